//! Ledger Gateway
//!
//! The ledger client surface: a network connection under one identity, and
//! contract handles resolved on it.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::models::identity::Identity;
use crate::domain::models::ledger::{ContractBinding, DiscoveryPolicy};
use crate::shared::errors::LedgerError;

/// Entry point for opening connections to the ledger network
#[async_trait]
pub trait LedgerNetwork: Send + Sync {
    /// Open a connection signed by `identity`
    async fn connect(
        &self,
        label: &str,
        identity: &Identity,
        discovery: DiscoveryPolicy,
    ) -> Result<Arc<dyn LedgerConnection>, LedgerError>;
}

/// A live session with the ledger network
#[async_trait]
pub trait LedgerConnection: Send + Sync {
    /// Resolve a deployed contract on a channel
    async fn contract(&self, binding: &ContractBinding) -> Result<Arc<dyn LedgerContract>, LedgerError>;
}

/// A deployed smart contract.
///
/// Implementations must be safe to call concurrently from many requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LedgerContract: Send + Sync {
    /// Fail fast when no call can succeed, without contacting the ledger
    fn ensure_ready(&self) -> Result<(), LedgerError> {
        Ok(())
    }

    /// Run a read-only query against current ledger state
    async fn evaluate(&self, function: &str, args: &[String]) -> Result<Vec<u8>, LedgerError>;

    /// Submit a transaction and wait for it to commit
    async fn submit(&self, function: &str, args: &[String]) -> Result<Vec<u8>, LedgerError>;
}
