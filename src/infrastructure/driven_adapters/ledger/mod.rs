//! Ledger Adapters
//!
//! Implementations of the ledger gateway traits.

mod rest_gateway;
mod startup;
mod unavailable;

pub use rest_gateway::RestLedgerNetwork;
pub use startup::bootstrap_contract;
pub use unavailable::UnavailableContract;
