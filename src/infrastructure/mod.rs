//! Infrastructure Layer
//!
//! Contains all external concerns: driving adapters (HTTP handlers) and
//! driven adapters (wallet, certificate authority, ledger client).

pub mod driven_adapters;
pub mod driving_adapters;
