//! Create Asset Quality Use Case

use std::sync::Arc;

use crate::domain::gateways::LedgerContract;
use crate::domain::models::asset::{functions, AssetQualityRecord};
use crate::shared::errors::UseCaseError;

/// Use case for recording an asset quality reading
pub struct CreateAssetQualityUseCase {
    contract: Arc<dyn LedgerContract>,
}

impl CreateAssetQualityUseCase {
    /// Create a new CreateAssetQualityUseCase
    #[must_use]
    pub fn new(contract: Arc<dyn LedgerContract>) -> Self {
        Self { contract }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Ledger` if the submission fails.
    pub async fn execute(&self, record: AssetQualityRecord) -> Result<(), UseCaseError> {
        tracing::info!(
            function = functions::CREATE_ASSET_QUALITY,
            asset_id = %record.id,
            "Submit transaction"
        );

        self.contract
            .submit(functions::CREATE_ASSET_QUALITY, &record.into_args())
            .await?;

        tracing::info!(function = functions::CREATE_ASSET_QUALITY, "Transaction committed");
        Ok(())
    }
}
