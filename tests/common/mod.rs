//! Common test utilities for e2e tests
//!
//! Provides a recording contract double and a router wired to it.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde::Deserialize;
use tower::util::ServiceExt;

use ledger_asset_gateway::domain::gateways::LedgerContract;
use ledger_asset_gateway::infrastructure::driving_adapters::api_rest::{build_router, AppState};
use ledger_asset_gateway::shared::errors::LedgerError;

/// A contract invocation seen by the recording contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Evaluate(String, Vec<String>),
    Submit(String, Vec<String>),
}

impl Call {
    pub fn evaluate(function: &str, args: &[&str]) -> Self {
        Self::Evaluate(function.to_string(), args.iter().map(ToString::to_string).collect())
    }

    pub fn submit(function: &str, args: &[&str]) -> Self {
        Self::Submit(function.to_string(), args.iter().map(ToString::to_string).collect())
    }
}

/// Contract double recording every call.
///
/// Returns `payload` unless a one-shot failure is armed.
pub struct RecordingContract {
    calls: Mutex<Vec<Call>>,
    payload: Vec<u8>,
    next_failure: Mutex<Option<LedgerError>>,
}

impl RecordingContract {
    pub fn new(payload: &[u8]) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            payload: payload.to_vec(),
            next_failure: Mutex::new(None),
        }
    }

    pub fn fail_next(&self, error: LedgerError) {
        *self.next_failure.lock().unwrap() = Some(error);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn respond(&self, call: Call) -> Result<Vec<u8>, LedgerError> {
        self.calls.lock().unwrap().push(call);
        match self.next_failure.lock().unwrap().take() {
            Some(error) => Err(error),
            None => Ok(self.payload.clone()),
        }
    }
}

#[async_trait]
impl LedgerContract for RecordingContract {
    async fn evaluate(&self, function: &str, args: &[String]) -> Result<Vec<u8>, LedgerError> {
        self.respond(Call::Evaluate(function.to_string(), args.to_vec()))
    }

    async fn submit(&self, function: &str, args: &[String]) -> Result<Vec<u8>, LedgerError> {
        self.respond(Call::Submit(function.to_string(), args.to_vec()))
    }
}

/// Payload the default test contract answers with
pub const LEDGER_PAYLOAD: &[u8] = br#"[{"ID":"asset1","item":"Melon","weight":"10"}]"#;

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub contract: Arc<RecordingContract>,
}

/// Response pieces the tests inspect
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }

    pub fn error(&self) -> ErrorResponse {
        serde_json::from_slice(&self.body).unwrap()
    }
}

impl TestApp {
    /// Create a new test application backed by a recording contract
    pub fn new() -> Self {
        let contract = Arc::new(RecordingContract::new(LEDGER_PAYLOAD));
        Self {
            router: build_router(AppState::new(contract.clone())),
            contract,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        send(&self.router, request).await
    }
}

pub async fn send(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();
    TestResponse { status, headers, body }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json(method: Method, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

pub fn form(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn asset_body() -> serde_json::Value {
    serde_json::json!({
        "id": "asset7",
        "item": "Mango",
        "weight": "12",
        "packedDate": "01-01-2023",
        "packagedLocation": "Hyderabad",
        "value": "500",
        "owner": "Farm Co"
    })
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub request_id: Option<String>,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<Vec<FieldError>>,
}

#[derive(Debug, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
