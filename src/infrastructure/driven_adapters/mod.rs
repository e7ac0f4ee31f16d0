//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Credential stores (wallets)
//! - Certificate authority client
//! - Ledger network client
//! - Configuration and connection profile

pub mod config;
pub mod connection_profile;
pub mod credential_store;
pub mod fabric_ca;
pub mod ledger;
pub mod signing;

pub use config::AppConfig;
pub use connection_profile::ConnectionProfile;
pub use credential_store::{FileSystemWallet, InMemoryWallet};
pub use fabric_ca::FabricCaClient;
pub use ledger::{bootstrap_contract, RestLedgerNetwork, UnavailableContract};
