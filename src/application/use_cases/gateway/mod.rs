//! Gateway Use Cases
//!
//! Ledger connection lifecycle.

mod connect_gateway;

pub use connect_gateway::ConnectGatewayUseCase;
