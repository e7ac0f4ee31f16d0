//! Filesystem Wallet
//!
//! One `<label>.id` JSON file per identity.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use super::validate_label;
use crate::domain::gateways::CredentialStore;
use crate::domain::models::identity::Identity;
use crate::shared::errors::CredentialStoreError;

const IDENTITY_FILE_EXTENSION: &str = "id";

/// Directory-backed credential store
#[derive(Debug, Clone)]
pub struct FileSystemWallet {
    directory: PathBuf,
}

impl FileSystemWallet {
    /// Open (creating if needed) the wallet directory
    pub async fn open(directory: impl Into<PathBuf>) -> Result<Self, CredentialStoreError> {
        let directory = directory.into();
        fs::create_dir_all(&directory).await?;
        tracing::debug!(path = %directory.display(), "Filesystem wallet opened");
        Ok(Self { directory })
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn identity_path(&self, label: &str) -> PathBuf {
        self.directory
            .join(format!("{label}.{IDENTITY_FILE_EXTENSION}"))
    }
}

#[async_trait]
impl CredentialStore for FileSystemWallet {
    async fn get(&self, label: &str) -> Result<Option<Identity>, CredentialStoreError> {
        validate_label(label)?;

        match fs::read(self.identity_path(label)).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn put(&self, label: &str, identity: &Identity) -> Result<(), CredentialStoreError> {
        validate_label(label)?;

        let path = self.identity_path(label);
        let staging = self.directory.join(format!(".{label}.{IDENTITY_FILE_EXTENSION}.tmp"));
        let bytes = serde_json::to_vec(identity)?;

        fs::write(&staging, bytes).await?;
        fs::rename(&staging, &path).await?;

        tracing::debug!(label = %label, path = %path.display(), "Identity written to wallet");
        Ok(())
    }
}
