//! In-Memory Wallet

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::validate_label;
use crate::domain::gateways::CredentialStore;
use crate::domain::models::identity::Identity;
use crate::shared::errors::CredentialStoreError;

/// Process-local credential store; contents are lost on exit
#[derive(Debug, Default)]
pub struct InMemoryWallet {
    identities: RwLock<HashMap<String, Identity>>,
}

impl InMemoryWallet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for InMemoryWallet {
    async fn get(&self, label: &str) -> Result<Option<Identity>, CredentialStoreError> {
        validate_label(label)?;
        Ok(self.identities.read().await.get(label).cloned())
    }

    async fn put(&self, label: &str, identity: &Identity) -> Result<(), CredentialStoreError> {
        validate_label(label)?;
        self.identities
            .write()
            .await
            .insert(label.to_string(), identity.clone());
        Ok(())
    }
}
