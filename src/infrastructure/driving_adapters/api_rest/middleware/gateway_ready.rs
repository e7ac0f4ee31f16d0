//! Gateway Readiness Middleware
//!
//! Answers 503 before any extraction or validation when the bound contract
//! cannot serve calls, so degraded mode looks the same on every route.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Middleware rejecting every request while the gateway is unavailable
pub async fn gateway_ready_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if let Err(err) = state.contract.ensure_ready() {
        tracing::warn!(method = %request.method(), uri = %request.uri(), "Gateway unavailable");
        return ApiError::from(err).into_response();
    }

    next.run(request).await
}
