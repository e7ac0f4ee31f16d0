//! Data Transfer Objects
//!
//! Request DTOs for the REST API.

pub mod asset;

pub use asset::{CreateAssetDto, CreateAssetQualityDto, DeleteAssetDto, LedgerArg, UpdateAssetDto};
