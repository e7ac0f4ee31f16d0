//! Application Configuration
//!
//! Loads configuration from files and environment variables.

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::application::use_cases::IdentitySettings;
use crate::domain::models::ledger::{ContractBinding, DiscoveryPolicy};

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Wallet configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WalletConfig {
    /// Directory of the filesystem wallet; in-memory when absent
    pub path: Option<PathBuf>,
}

/// Ledger network configuration
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    /// Path to the JSON connection profile
    pub connection_profile: PathBuf,
    pub msp_id: String,
    /// Certificate authority entry in the connection profile
    pub ca_host: String,
    pub channel: String,
    pub contract: String,
    /// Base URL of the ledger REST gateway
    pub gateway_url: String,
    pub request_timeout_secs: Option<u64>,
    #[serde(default)]
    pub discovery: DiscoveryPolicy,
}

impl NetworkConfig {
    #[must_use]
    pub fn binding(&self) -> ContractBinding {
        ContractBinding::new(self.channel.clone(), self.contract.clone())
    }
}

/// Identity bootstrap configuration
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
    pub user_id: String,
    pub affiliation: String,
    pub admin_label: String,
    pub admin_enrollment_id: String,
    pub admin_secret: String,
}

/// What to do when the gateway cannot bind its contract at startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectFailurePolicy {
    /// Abort startup with a non-zero exit code
    #[default]
    Exit,
    /// Serve 503 on every route
    Degraded,
}

/// Gateway startup configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GatewayConfig {
    #[serde(default)]
    pub on_connect_failure: ConnectFailurePolicy,
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub wallet: WalletConfig,
    pub network: NetworkConfig,
    pub identity: IdentityConfig,
    #[serde(default)]
    pub gateway: GatewayConfig,
}

impl AppConfig {
    /// Load configuration from files and environment
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "default".into());

        Config::builder()
            // Start with default config
            .add_source(File::with_name("config/default").required(true))
            // Merge environment-specific config if it exists
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Override with environment variables (e.g., APP__SERVER__PORT)
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Settings for the identity bootstrapper
    #[must_use]
    pub fn identity_settings(&self) -> IdentitySettings {
        IdentitySettings {
            msp_id: self.network.msp_id.clone(),
            admin_label: self.identity.admin_label.clone(),
            admin_enrollment_id: self.identity.admin_enrollment_id.clone(),
            admin_secret: self.identity.admin_secret.clone(),
            user_id: self.identity.user_id.clone(),
            affiliation: self.identity.affiliation.clone(),
        }
    }
}
