//! Startup Binding
//!
//! Decides what the server runs on once the gateway connection attempt has
//! finished.

use std::fmt::Display;
use std::sync::Arc;

use super::UnavailableContract;
use crate::domain::gateways::LedgerContract;
use crate::infrastructure::driven_adapters::config::ConnectFailurePolicy;

/// Apply `policy` to the outcome of connecting and binding the contract.
///
/// A bound contract is returned as is. A failure is returned unchanged under
/// [`ConnectFailurePolicy::Exit`]; under [`ConnectFailurePolicy::Degraded`] it
/// is replaced by an [`UnavailableContract`] carrying the failure text.
///
/// # Errors
///
/// Returns the connection error when the policy is `Exit`.
pub fn bootstrap_contract<E: Display>(
    policy: ConnectFailurePolicy,
    connected: Result<Arc<dyn LedgerContract>, E>,
) -> Result<Arc<dyn LedgerContract>, E> {
    match connected {
        Ok(contract) => {
            tracing::info!("Contract bound; gateway ready");
            Ok(contract)
        }
        Err(err) if policy == ConnectFailurePolicy::Degraded => {
            tracing::error!(error = %err, "Failed to connect to gateway; serving 503 on all routes");
            Ok(Arc::new(UnavailableContract::new(err.to_string())))
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to connect to gateway");
            Err(err)
        }
    }
}
