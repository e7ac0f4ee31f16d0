//! Ledger Asset Gateway
//!
//! A REST facade over one smart contract on a permissioned ledger, following
//! Clean/Hexagonal Architecture principles. Startup enrolls the application
//! identity, binds the contract once, and every route forwards to a single
//! contract transaction.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
