//! Get All Assets Use Case
//!
//! Evaluates `GetAllAssets` for one of the two listings.

use std::sync::Arc;

use crate::domain::gateways::LedgerContract;
use crate::domain::models::asset::{functions, AssetListing};
use crate::shared::errors::UseCaseError;

/// Use case for listing assets
pub struct GetAllAssetsUseCase {
    contract: Arc<dyn LedgerContract>,
}

impl GetAllAssetsUseCase {
    /// Create a new GetAllAssetsUseCase
    #[must_use]
    pub fn new(contract: Arc<dyn LedgerContract>) -> Self {
        Self { contract }
    }

    /// Execute the use case, returning the contract's raw result
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Ledger` if the evaluation fails.
    pub async fn execute(&self, listing: AssetListing) -> Result<Vec<u8>, UseCaseError> {
        tracing::info!(function = functions::GET_ALL_ASSETS, %listing, "Evaluate transaction");

        let result = self
            .contract
            .evaluate(functions::GET_ALL_ASSETS, &listing.args())
            .await?;

        tracing::debug!(bytes = result.len(), "Evaluation returned");
        Ok(result)
    }
}
