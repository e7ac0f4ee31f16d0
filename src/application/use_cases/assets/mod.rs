//! Asset Use Cases
//!
//! One use case per contract transaction exposed over HTTP. Each forwards
//! its arguments unchanged to the bound contract.

mod create_asset;
mod create_asset_quality;
mod delete_asset;
mod get_all_assets;
mod read_asset;
mod update_asset;

pub use create_asset::CreateAssetUseCase;
pub use create_asset_quality::CreateAssetQualityUseCase;
pub use delete_asset::DeleteAssetUseCase;
pub use get_all_assets::GetAllAssetsUseCase;
pub use read_asset::ReadAssetUseCase;
pub use update_asset::UpdateAssetUseCase;
