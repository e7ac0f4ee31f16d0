//! Error Types
//!
//! Layered error types with HTTP status code mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::shared::request_context;

/// Credential store (wallet) failures
#[derive(Debug, Error)]
pub enum CredentialStoreError {
    #[error("Wallet I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed identity record: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid identity label: '{0}'")]
    InvalidLabel(String),
}

/// Certificate authority failures
#[derive(Debug, Error)]
pub enum CertificateAuthorityError {
    #[error("Certificate authority unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Certificate authority rejected the request: {0:?}")]
    Rejected(Vec<String>),

    #[error("Invalid certificate authority response: {0}")]
    InvalidResponse(String),

    #[error("Key material error: {0}")]
    Crypto(String),
}

/// Ledger network failures
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Ledger gateway is not connected: {0}")]
    NotConnected(String),

    #[error("Contract '{contract}' not found on channel '{channel}'")]
    ContractNotFound { channel: String, contract: String },

    #[error("Transaction rejected: {0}")]
    TransactionRejected(String),

    #[error("Ledger unavailable: {0}")]
    Unavailable(String),

    #[error("Ledger call timed out")]
    Timeout,

    #[error("Ledger transport error: {0}")]
    Transport(String),

    #[error("Invalid ledger endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Signing error: {0}")]
    Signing(String),
}

impl From<reqwest::Error> for LedgerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Unavailable(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("An identity for '{0}' does not exist in the wallet")]
    IdentityNotFound(String),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    CredentialStore(#[from] CredentialStoreError),

    #[error(transparent)]
    CertificateAuthority(#[from] CertificateAuthorityError),
}

impl UseCaseError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Ledger(LedgerError::TransactionRejected(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Ledger(
                LedgerError::NotConnected(_)
                | LedgerError::ContractNotFound { .. }
                | LedgerError::Unavailable(_),
            ) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Ledger(LedgerError::Timeout) => StatusCode::GATEWAY_TIMEOUT,
            Self::Ledger(LedgerError::Transport(_) | LedgerError::InvalidEndpoint(_)) => {
                StatusCode::BAD_GATEWAY
            }
            Self::Ledger(LedgerError::Signing(_))
            | Self::IdentityNotFound(_)
            | Self::CredentialStore(_)
            | Self::CertificateAuthority(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Ledger(LedgerError::TransactionRejected(_)) => "TRANSACTION_REJECTED",
            Self::Ledger(LedgerError::NotConnected(_) | LedgerError::ContractNotFound { .. }) => {
                "GATEWAY_UNAVAILABLE"
            }
            Self::Ledger(LedgerError::Unavailable(_)) => "LEDGER_UNAVAILABLE",
            Self::Ledger(LedgerError::Timeout) => "LEDGER_TIMEOUT",
            Self::Ledger(LedgerError::Transport(_) | LedgerError::InvalidEndpoint(_)) => "LEDGER_ERROR",
            Self::Ledger(LedgerError::Signing(_))
            | Self::IdentityNotFound(_)
            | Self::CredentialStore(_)
            | Self::CertificateAuthority(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the message may be shown to API clients
    fn is_public(&self) -> bool {
        self.status_code() != StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub timestamp: String,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level error for validation errors
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            ApiError::UseCase(uc_error) => {
                let details = if let UseCaseError::Validation(errors) = uc_error {
                    Some(
                        errors
                            .iter()
                            .map(|e| {
                                let (field, message) = e.split_once(": ").unwrap_or(("", e));
                                FieldError {
                                    field: field.to_string(),
                                    message: message.to_string(),
                                }
                            })
                            .collect(),
                    )
                } else {
                    None
                };
                let message = if uc_error.is_public() {
                    uc_error.to_string()
                } else {
                    tracing::error!(error = %uc_error, "Request failed");
                    "An unexpected error occurred".to_string()
                };
                (uc_error.status_code(), uc_error.error_code().to_string(), message, details)
            }
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST".to_string(), msg.clone(), None)
            }
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code,
                message,
                details,
            },
            request_id: request_context::current_request_id(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        ApiError::UseCase(UseCaseError::Ledger(err))
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.as_ref().map_or("invalid", |m| m.as_ref())
                    )
                })
            })
            .collect();
        messages.sort();
        ApiError::UseCase(UseCaseError::Validation(messages))
    }
}
