//! Delete Asset Use Case

use std::sync::Arc;

use crate::domain::gateways::LedgerContract;
use crate::domain::models::asset::functions;
use crate::shared::errors::UseCaseError;

/// Use case for deleting an asset from the ledger
pub struct DeleteAssetUseCase {
    contract: Arc<dyn LedgerContract>,
}

impl DeleteAssetUseCase {
    /// Create a new DeleteAssetUseCase
    #[must_use]
    pub fn new(contract: Arc<dyn LedgerContract>) -> Self {
        Self { contract }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Ledger` if the submission fails.
    pub async fn execute(&self, id: &str) -> Result<(), UseCaseError> {
        tracing::info!(function = functions::DELETE_ASSET, asset_id = %id, "Submit transaction");

        self.contract
            .submit(functions::DELETE_ASSET, &[id.to_string()])
            .await?;

        tracing::info!(function = functions::DELETE_ASSET, "Transaction committed");
        Ok(())
    }
}
