//! Connect Gateway Use Case
//!
//! Opens the process-wide ledger connection under the application identity
//! and resolves the bound contract.

use std::sync::Arc;

use crate::domain::gateways::{CredentialStore, LedgerContract, LedgerNetwork};
use crate::domain::models::ledger::{ContractBinding, DiscoveryPolicy};
use crate::shared::errors::UseCaseError;

/// Use case for connecting to the ledger network
pub struct ConnectGatewayUseCase {
    credential_store: Arc<dyn CredentialStore>,
    ledger_network: Arc<dyn LedgerNetwork>,
    binding: ContractBinding,
    discovery: DiscoveryPolicy,
}

impl ConnectGatewayUseCase {
    /// Create a new ConnectGatewayUseCase
    #[must_use]
    pub fn new(
        credential_store: Arc<dyn CredentialStore>,
        ledger_network: Arc<dyn LedgerNetwork>,
        binding: ContractBinding,
        discovery: DiscoveryPolicy,
    ) -> Self {
        Self {
            credential_store,
            ledger_network,
            binding,
            discovery,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::IdentityNotFound` if `user_id` is not in the wallet.
    /// Returns `UseCaseError::Ledger` if the connection or contract resolution fails.
    pub async fn execute(&self, user_id: &str) -> Result<Arc<dyn LedgerContract>, UseCaseError> {
        let identity = self
            .credential_store
            .get(user_id)
            .await?
            .ok_or_else(|| UseCaseError::IdentityNotFound(user_id.to_string()))?;

        tracing::info!(
            label = %user_id,
            msp_id = %identity.msp_id(),
            discovery = self.discovery.enabled,
            as_localhost = self.discovery.as_localhost,
            "Connecting to ledger network"
        );

        let connection = self
            .ledger_network
            .connect(user_id, &identity, self.discovery)
            .await?;
        let contract = connection.contract(&self.binding).await?;

        tracing::info!(binding = %self.binding, "Contract bound");
        Ok(contract)
    }
}
