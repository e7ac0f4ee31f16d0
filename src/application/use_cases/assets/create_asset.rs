//! Create Asset Use Case

use std::sync::Arc;

use crate::domain::gateways::LedgerContract;
use crate::domain::models::asset::{functions, AssetRecord};
use crate::shared::errors::UseCaseError;

/// Use case for creating an asset on the ledger
pub struct CreateAssetUseCase {
    contract: Arc<dyn LedgerContract>,
}

impl CreateAssetUseCase {
    /// Create a new CreateAssetUseCase
    #[must_use]
    pub fn new(contract: Arc<dyn LedgerContract>) -> Self {
        Self { contract }
    }

    /// Execute the use case
    ///
    /// The contract's return payload is discarded.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Ledger` if the submission fails.
    pub async fn execute(&self, record: AssetRecord) -> Result<(), UseCaseError> {
        tracing::info!(function = functions::CREATE_ASSET, asset_id = %record.id, "Submit transaction");

        self.contract
            .submit(functions::CREATE_ASSET, &record.into_args())
            .await?;

        tracing::info!(function = functions::CREATE_ASSET, "Transaction committed");
        Ok(())
    }
}
