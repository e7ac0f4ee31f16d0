//! Identity Use Cases
//!
//! Wallet bootstrapping against the certificate authority.

mod ensure_identity;

pub use ensure_identity::{EnsureIdentityUseCase, IdentitySettings};
