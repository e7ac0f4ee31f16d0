//! Domain Layer
//!
//! Contains the core models and gateway traits (ports) for identities and
//! ledger access. This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::{CertificateAuthority, CredentialStore, LedgerConnection, LedgerContract, LedgerNetwork};
pub use models::asset::{AssetListing, AssetQualityRecord, AssetRecord};
pub use models::identity::{Credentials, Identity, RegistrationRequest};
pub use models::ledger::{ContractBinding, DiscoveryPolicy};
