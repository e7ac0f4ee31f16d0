//! Use Cases
//!
//! Application-specific orchestration.
//! Each use case is a single-purpose struct with an execute() method.

pub mod assets;
pub mod gateway;
pub mod identity;

pub use assets::{
    CreateAssetQualityUseCase, CreateAssetUseCase, DeleteAssetUseCase, GetAllAssetsUseCase,
    ReadAssetUseCase, UpdateAssetUseCase,
};
pub use gateway::ConnectGatewayUseCase;
pub use identity::{EnsureIdentityUseCase, IdentitySettings};
