//! Asset Handlers
//!
//! HTTP routes forwarding 1:1 to contract transactions. Read routes return
//! the contract's raw result; write routes return a fixed confirmation.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use validator::Validate;

use crate::domain::models::asset::AssetListing;
use crate::infrastructure::driving_adapters::api_rest::dto::asset::{
    CreateAssetDto, CreateAssetQualityDto, DeleteAssetDto, UpdateAssetDto,
};
use crate::infrastructure::driving_adapters::api_rest::extract::JsonOrForm;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

pub const INSERTED: &str = "Inserted Successfully";
pub const UPDATED: &str = "Updated Successfully";
pub const DELETED: &str = "Deleted Successfully";

/// Contract result bytes, returned unmodified
#[derive(Debug)]
pub struct RawResult(pub Vec<u8>);

impl IntoResponse for RawResult {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, "application/octet-stream")], self.0).into_response()
    }
}

/// Create the router for asset endpoints
///
/// `/Quality` is matched before `/:id`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(get_all_assets)
                .post(create_asset)
                .put(update_asset)
                .delete(delete_asset),
        )
        .route("/Quality", get(get_all_asset_quality).post(create_asset_quality))
        .route("/:id", get(read_asset))
}

/// GET / - List assets
///
/// # Responses
///
/// * 200 OK - Raw `GetAllAssets` result
/// * 5xx - Ledger unavailable or gateway not connected
#[axum::debug_handler]
async fn get_all_assets(State(state): State<AppState>) -> Result<RawResult, ApiError> {
    let result = state.get_all_assets_use_case.execute(AssetListing::Assets).await?;
    Ok(RawResult(result))
}

/// GET /Quality - List asset quality readings
///
/// # Responses
///
/// * 200 OK - Raw `GetAllAssets` result
/// * 5xx - Ledger unavailable or gateway not connected
#[axum::debug_handler]
async fn get_all_asset_quality(State(state): State<AppState>) -> Result<RawResult, ApiError> {
    let result = state.get_all_assets_use_case.execute(AssetListing::Quality).await?;
    Ok(RawResult(result))
}

/// GET /:id - Read one asset
///
/// # Responses
///
/// * 200 OK - Raw `ReadAsset` result
/// * 422 Unprocessable Entity - Contract rejected the read (e.g. unknown id)
#[axum::debug_handler]
async fn read_asset(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<RawResult, ApiError> {
    let result = state.read_asset_use_case.execute(&id).await?;
    Ok(RawResult(result))
}

/// POST / - Create an asset
///
/// # Responses
///
/// * 200 OK - `Inserted Successfully`
/// * 400 Bad Request - Missing field or malformed body
/// * 422 Unprocessable Entity - Contract rejected the transaction
#[axum::debug_handler]
async fn create_asset(
    State(state): State<AppState>,
    JsonOrForm(dto): JsonOrForm<CreateAssetDto>,
) -> Result<&'static str, ApiError> {
    dto.validate()?;

    state.create_asset_use_case.execute(dto.into()).await?;

    Ok(INSERTED)
}

/// PUT / - Update an asset
///
/// # Responses
///
/// * 200 OK - `Updated Successfully`
/// * 400 Bad Request - Missing field (note: the date field is `packagedDate`)
/// * 422 Unprocessable Entity - Contract rejected the transaction
#[axum::debug_handler]
async fn update_asset(
    State(state): State<AppState>,
    JsonOrForm(dto): JsonOrForm<UpdateAssetDto>,
) -> Result<&'static str, ApiError> {
    if dto.uses_create_date_field() {
        tracing::warn!("Update body carries packedDate; this route reads packagedDate");
    }
    dto.validate()?;

    state.update_asset_use_case.execute(dto.into()).await?;

    Ok(UPDATED)
}

/// DELETE / - Delete an asset
///
/// # Responses
///
/// * 200 OK - `Deleted Successfully`
/// * 400 Bad Request - Missing `id`
/// * 422 Unprocessable Entity - Contract rejected the transaction
#[axum::debug_handler]
async fn delete_asset(
    State(state): State<AppState>,
    JsonOrForm(dto): JsonOrForm<DeleteAssetDto>,
) -> Result<&'static str, ApiError> {
    dto.validate()?;

    state.delete_asset_use_case.execute(&dto.into_id()).await?;

    Ok(DELETED)
}

/// POST /Quality - Record an asset quality reading
///
/// # Responses
///
/// * 200 OK - `Inserted Successfully`
/// * 400 Bad Request - Missing field or malformed body
/// * 422 Unprocessable Entity - Contract rejected the transaction
#[axum::debug_handler]
async fn create_asset_quality(
    State(state): State<AppState>,
    JsonOrForm(dto): JsonOrForm<CreateAssetQualityDto>,
) -> Result<&'static str, ApiError> {
    dto.validate()?;

    state.create_asset_quality_use_case.execute(dto.into()).await?;

    Ok(INSERTED)
}
