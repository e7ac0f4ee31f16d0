//! REST API Module
//!
//! Contains HTTP handlers, DTOs, extractors and middleware for the REST API.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::application::use_cases::assets::{
    CreateAssetQualityUseCase, CreateAssetUseCase, DeleteAssetUseCase, GetAllAssetsUseCase,
    ReadAssetUseCase, UpdateAssetUseCase,
};
use crate::domain::gateways::LedgerContract;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub contract: Arc<dyn LedgerContract>,
    pub get_all_assets_use_case: Arc<GetAllAssetsUseCase>,
    pub read_asset_use_case: Arc<ReadAssetUseCase>,
    pub create_asset_use_case: Arc<CreateAssetUseCase>,
    pub update_asset_use_case: Arc<UpdateAssetUseCase>,
    pub delete_asset_use_case: Arc<DeleteAssetUseCase>,
    pub create_asset_quality_use_case: Arc<CreateAssetQualityUseCase>,
}

impl AppState {
    /// Wire every use case to the one shared contract handle
    #[must_use]
    pub fn new(contract: Arc<dyn LedgerContract>) -> Self {
        Self {
            get_all_assets_use_case: Arc::new(GetAllAssetsUseCase::new(contract.clone())),
            read_asset_use_case: Arc::new(ReadAssetUseCase::new(contract.clone())),
            create_asset_use_case: Arc::new(CreateAssetUseCase::new(contract.clone())),
            update_asset_use_case: Arc::new(UpdateAssetUseCase::new(contract.clone())),
            delete_asset_use_case: Arc::new(DeleteAssetUseCase::new(contract.clone())),
            create_asset_quality_use_case: Arc::new(CreateAssetQualityUseCase::new(contract.clone())),
            contract,
        }
    }
}

/// Build the full HTTP application
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::assets::router())
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::gateway_ready_middleware,
        ))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
