//! Update Asset Use Case

use std::sync::Arc;

use crate::domain::gateways::LedgerContract;
use crate::domain::models::asset::{functions, AssetRecord};
use crate::shared::errors::UseCaseError;

/// Use case for updating an asset on the ledger
pub struct UpdateAssetUseCase {
    contract: Arc<dyn LedgerContract>,
}

impl UpdateAssetUseCase {
    /// Create a new UpdateAssetUseCase
    #[must_use]
    pub fn new(contract: Arc<dyn LedgerContract>) -> Self {
        Self { contract }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Ledger` if the submission fails.
    pub async fn execute(&self, record: AssetRecord) -> Result<(), UseCaseError> {
        tracing::info!(function = functions::UPDATE_ASSET, asset_id = %record.id, "Submit transaction");

        self.contract
            .submit(functions::UPDATE_ASSET, &record.into_args())
            .await?;

        tracing::info!(function = functions::UPDATE_ASSET, "Transaction committed");
        Ok(())
    }
}
