//! Credential Store Adapters
//!
//! Wallet implementations of the `CredentialStore` gateway.

mod filesystem;
mod memory;

pub use filesystem::FileSystemWallet;
pub use memory::InMemoryWallet;

use crate::shared::errors::CredentialStoreError;

/// Reject labels that could escape the wallet directory
fn validate_label(label: &str) -> Result<(), CredentialStoreError> {
    if label.is_empty() || label.contains(['/', '\\']) || label == "." || label.contains("..") {
        return Err(CredentialStoreError::InvalidLabel(label.to_string()));
    }
    Ok(())
}
