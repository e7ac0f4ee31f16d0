//! Credential Store Gateway
//!
//! Abstract trait for persistent, label-keyed identity storage (the wallet).

use async_trait::async_trait;

use crate::domain::models::identity::Identity;
use crate::shared::errors::CredentialStoreError;

/// Keyed storage of enrolled identities
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Fetch the identity stored under `label`, if any
    async fn get(&self, label: &str) -> Result<Option<Identity>, CredentialStoreError>;

    /// Store `identity` under `label`, replacing any previous entry
    async fn put(&self, label: &str, identity: &Identity) -> Result<(), CredentialStoreError>;
}
