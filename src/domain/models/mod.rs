//! Domain Models
//!
//! Identities, contract bindings and the ledger records forwarded by the gateway.

pub mod asset;
pub mod identity;
pub mod ledger;
