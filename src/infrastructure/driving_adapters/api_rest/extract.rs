//! Request Body Extraction
//!
//! Bodies arrive either as JSON or URL-encoded forms. Anything else is
//! treated as an empty body, so missing fields surface as validation errors.

use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use serde::de::DeserializeOwned;

use crate::shared::errors::ApiError;

/// Body extractor accepting `application/json` and `application/x-www-form-urlencoded`
#[derive(Debug, Clone)]
pub struct JsonOrForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
            return Ok(Self(value));
        }

        if content_type.starts_with("application/json") {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
            return Ok(Self(value));
        }

        serde_json::from_value(serde_json::Value::Object(serde_json::Map::new()))
            .map(Self)
            .map_err(|e| ApiError::BadRequest(e.to_string()))
    }
}
