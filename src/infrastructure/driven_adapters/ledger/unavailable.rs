//! Degraded-mode contract used when the gateway could not bind at startup.

use async_trait::async_trait;

use crate::domain::gateways::LedgerContract;
use crate::shared::errors::LedgerError;

/// Contract stand-in that fails every call with `NotConnected`
#[derive(Debug, Clone)]
pub struct UnavailableContract {
    reason: String,
}

impl UnavailableContract {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

#[async_trait]
impl LedgerContract for UnavailableContract {
    fn ensure_ready(&self) -> Result<(), LedgerError> {
        Err(LedgerError::NotConnected(self.reason.clone()))
    }

    async fn evaluate(&self, function: &str, _args: &[String]) -> Result<Vec<u8>, LedgerError> {
        tracing::warn!(function = %function, "Rejecting evaluate: gateway not connected");
        Err(LedgerError::NotConnected(self.reason.clone()))
    }

    async fn submit(&self, function: &str, _args: &[String]) -> Result<Vec<u8>, LedgerError> {
        tracing::warn!(function = %function, "Rejecting submit: gateway not connected");
        Err(LedgerError::NotConnected(self.reason.clone()))
    }
}
