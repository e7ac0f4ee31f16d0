//! Read Asset Use Case

use std::sync::Arc;

use crate::domain::gateways::LedgerContract;
use crate::domain::models::asset::functions;
use crate::shared::errors::UseCaseError;

/// Use case for reading a single asset
pub struct ReadAssetUseCase {
    contract: Arc<dyn LedgerContract>,
}

impl ReadAssetUseCase {
    /// Create a new ReadAssetUseCase
    #[must_use]
    pub fn new(contract: Arc<dyn LedgerContract>) -> Self {
        Self { contract }
    }

    /// Execute the use case, returning the contract's raw result
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Ledger` if the evaluation fails, including when
    /// the contract reports the asset does not exist.
    pub async fn execute(&self, id: &str) -> Result<Vec<u8>, UseCaseError> {
        tracing::info!(function = functions::READ_ASSET, asset_id = %id, "Evaluate transaction");

        let result = self
            .contract
            .evaluate(functions::READ_ASSET, &[id.to_string()])
            .await?;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::ledger::MockLedgerContract;
    use crate::shared::errors::LedgerError;

    #[tokio::test]
    async fn should_evaluate_read_asset_with_id() {
        let mut contract = MockLedgerContract::new();
        contract
            .expect_evaluate()
            .withf(|function, args| function == "ReadAsset" && args == ["asset1"])
            .times(1)
            .returning(|_, _| Ok(b"raw".to_vec()));
        let use_case = ReadAssetUseCase::new(Arc::new(contract));

        let result = use_case.execute("asset1").await.unwrap();

        assert_eq!(result, b"raw".to_vec());
    }

    #[tokio::test]
    async fn should_surface_contract_rejection() {
        let mut contract = MockLedgerContract::new();
        contract.expect_evaluate().returning(|_, _| {
            Err(LedgerError::TransactionRejected("the asset asset9 does not exist".into()))
        });
        let use_case = ReadAssetUseCase::new(Arc::new(contract));

        let result = use_case.execute("asset9").await;

        assert!(matches!(
            result,
            Err(UseCaseError::Ledger(LedgerError::TransactionRejected(_)))
        ));
    }
}
