//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod certificate_authority;
pub mod credential_store;
pub mod ledger;

pub use certificate_authority::CertificateAuthority;
pub use credential_store::CredentialStore;
pub use ledger::{LedgerConnection, LedgerContract, LedgerNetwork};
