//! Ledger Asset Gateway - Main Entry Point

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ledger_asset_gateway::application::use_cases::{ConnectGatewayUseCase, EnsureIdentityUseCase};
use ledger_asset_gateway::domain::gateways::CredentialStore;
use ledger_asset_gateway::infrastructure::driven_adapters::config::AppConfig;
use ledger_asset_gateway::infrastructure::driven_adapters::{
    bootstrap_contract, ConnectionProfile, FabricCaClient, FileSystemWallet, InMemoryWallet,
    RestLedgerNetwork,
};
use ledger_asset_gateway::infrastructure::driving_adapters::api_rest::{build_router, AppState};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "ledger_asset_gateway=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    if std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json")) {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded successfully");

    let profile = ConnectionProfile::load(&config.network.connection_profile)?;
    let organization = profile.client_organization()?;
    tracing::info!(profile = %profile.name, org_msp_id = %organization.mspid, "Connection profile loaded");
    if organization.mspid != config.network.msp_id {
        tracing::warn!(
            configured = %config.network.msp_id,
            profile = %organization.mspid,
            "Configured MSP id differs from the profile's client organization"
        );
    }

    let timeout = config.network.request_timeout_secs.map(Duration::from_secs);

    // Open wallet
    let wallet: Arc<dyn CredentialStore> = match &config.wallet.path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Using filesystem wallet");
            Arc::new(FileSystemWallet::open(path).await?)
        }
        None => {
            tracing::info!("Using in-memory wallet");
            Arc::new(InMemoryWallet::new())
        }
    };

    // Bootstrap identities; any failure here aborts startup
    let ca_entry = profile.certificate_authority(&config.network.ca_host)?;
    let certificate_authority = Arc::new(FabricCaClient::from_profile(ca_entry, timeout)?);
    EnsureIdentityUseCase::new(wallet.clone(), certificate_authority, config.identity_settings())
        .execute()
        .await?;
    tracing::info!("Wallet identities ready");

    // Connect gateway and bind contract
    let connect = async {
        let network = Arc::new(RestLedgerNetwork::new(&config.network.gateway_url, timeout)?);
        let contract = ConnectGatewayUseCase::new(
            wallet.clone(),
            network,
            config.network.binding(),
            config.network.discovery,
        )
        .execute(&config.identity.user_id)
        .await?;
        anyhow::Ok(contract)
    };
    let contract = bootstrap_contract(config.gateway.on_connect_failure, connect.await)?;

    // Build router
    let app = build_router(AppState::new(contract));

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Gateway connection closed");
    Ok(())
}
