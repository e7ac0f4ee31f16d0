//! End-to-end tests for asset endpoints
//!
//! These tests drive the full router against a recording contract and check
//! which transaction each route issues and what it returns.

mod common;

use std::sync::Arc;

use axum::http::{header, Method, StatusCode};

use common::{asset_body, form, get, json, send, Call, TestApp, LEDGER_PAYLOAD};
use ledger_asset_gateway::infrastructure::driven_adapters::UnavailableContract;
use ledger_asset_gateway::infrastructure::driving_adapters::api_rest::{build_router, AppState};
use ledger_asset_gateway::shared::errors::LedgerError;

// ============================================================================
// Reads
// ============================================================================

#[tokio::test]
async fn test_get_root_lists_assets_with_leading_zero() {
    let app = TestApp::new();

    let response = app.send(get("/")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, LEDGER_PAYLOAD);
    assert_eq!(app.contract.calls(), vec![Call::evaluate("GetAllAssets", &["0", "0"])]);
}

#[tokio::test]
async fn test_get_quality_lists_with_leading_one() {
    let app = TestApp::new();

    let response = app.send(get("/Quality")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(app.contract.calls(), vec![Call::evaluate("GetAllAssets", &["1", "0"])]);
}

#[tokio::test]
async fn test_get_by_id_returns_raw_result_unmodified() {
    let app = TestApp::new();

    let response = app.send(get("/asset1")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, LEDGER_PAYLOAD);
    assert_eq!(
        response.headers.get(header::CONTENT_TYPE).unwrap(),
        "application/octet-stream"
    );
    assert_eq!(app.contract.calls(), vec![Call::evaluate("ReadAsset", &["asset1"])]);
}

#[tokio::test]
async fn test_get_unknown_asset_maps_rejection_to_422() {
    let app = TestApp::new();
    app.contract
        .fail_next(LedgerError::TransactionRejected("the asset asset9 does not exist".into()));

    let response = app.send(get("/asset9")).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    let error = response.error();
    assert_eq!(error.error.code, "TRANSACTION_REJECTED");
    assert!(error.error.message.contains("asset9"));
}

// ============================================================================
// POST / - Create Asset
// ============================================================================

#[tokio::test]
async fn test_create_asset_submits_fields_in_order() {
    let app = TestApp::new();

    let response = app.send(json(Method::POST, "/", &asset_body())).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "Inserted Successfully");
    assert_eq!(
        app.contract.calls(),
        vec![Call::submit(
            "CreateAsset",
            &["asset7", "Mango", "12", "01-01-2023", "Hyderabad", "500", "Farm Co"]
        )]
    );
}

#[tokio::test]
async fn test_create_asset_forwards_numbers_as_text() {
    let app = TestApp::new();
    let mut body = asset_body();
    body["weight"] = serde_json::json!(10);
    body["value"] = serde_json::json!(350.5);

    let response = app.send(json(Method::POST, "/", &body)).await;

    assert_eq!(response.status, StatusCode::OK);
    let calls = app.contract.calls();
    let Call::Submit(_, args) = &calls[0] else {
        panic!("expected a submit, got {calls:?}");
    };
    assert_eq!(args[2], "10");
    assert_eq!(args[5], "350.5");
}

#[tokio::test]
async fn test_create_asset_accepts_urlencoded_body() {
    let app = TestApp::new();

    let response = app
        .send(form(
            Method::POST,
            "/",
            "id=asset8&item=Rice&weight=25&packedDate=02-02-2023&packagedLocation=Delhi&value=900&owner=Mill+Ltd",
        ))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        app.contract.calls(),
        vec![Call::submit(
            "CreateAsset",
            &["asset8", "Rice", "25", "02-02-2023", "Delhi", "900", "Mill Ltd"]
        )]
    );
}

#[tokio::test]
async fn test_create_asset_missing_fields_returns_bad_request() {
    let app = TestApp::new();

    let response = app
        .send(json(Method::POST, "/", &serde_json::json!({ "id": "asset7" })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let error = response.error();
    assert_eq!(error.error.code, "VALIDATION_ERROR");
    assert_eq!(error.error.details.unwrap().len(), 6);
    assert!(app.contract.calls().is_empty());
}

#[tokio::test]
async fn test_create_asset_without_content_type_is_treated_as_empty() {
    let app = TestApp::new();
    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/")
        .body(axum::body::Body::from("id=asset7"))
        .unwrap();

    let response = app.send(request).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error().error.details.unwrap().len(), 7);
}

#[tokio::test]
async fn test_create_asset_malformed_json_returns_bad_request() {
    let app = TestApp::new();
    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let response = app.send(request).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error().error.code, "BAD_REQUEST");
}

#[tokio::test]
async fn test_ledger_failure_during_create_returns_error_and_keeps_serving() {
    let app = TestApp::new();
    app.contract
        .fail_next(LedgerError::Unavailable("orderer unreachable".into()));

    let failed = app.send(json(Method::POST, "/", &asset_body())).await;

    assert_eq!(failed.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(failed.error().error.code, "LEDGER_UNAVAILABLE");

    let retried = app.send(json(Method::POST, "/", &asset_body())).await;
    assert_eq!(retried.status, StatusCode::OK);
    assert_eq!(retried.text(), "Inserted Successfully");
    assert_eq!(app.contract.calls().len(), 2);
}

#[tokio::test]
async fn test_ledger_timeout_maps_to_gateway_timeout() {
    let app = TestApp::new();
    app.contract.fail_next(LedgerError::Timeout);

    let response = app.send(json(Method::POST, "/", &asset_body())).await;

    assert_eq!(response.status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(response.error().error.code, "LEDGER_TIMEOUT");
}

// ============================================================================
// PUT / - Update Asset
// ============================================================================

#[tokio::test]
async fn test_update_asset_reads_packaged_date() {
    let app = TestApp::new();
    let body = serde_json::json!({
        "id": "asset3",
        "item": "Melon",
        "weight": 10,
        "packagedDate": "05-10-2022",
        "packagedLocation": "warangal",
        "value": "350",
        "owner": "Reliance Retail store"
    });

    let response = app.send(json(Method::PUT, "/", &body)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "Updated Successfully");
    assert_eq!(
        app.contract.calls(),
        vec![Call::submit(
            "UpdateAsset",
            &["asset3", "Melon", "10", "05-10-2022", "warangal", "350", "Reliance Retail store"]
        )]
    );
}

#[tokio::test]
async fn test_update_asset_with_packed_date_is_rejected() {
    let app = TestApp::new();

    let response = app.send(json(Method::PUT, "/", &asset_body())).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let details = response.error().error.details.unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0].message, "packagedDate is required");
    assert!(app.contract.calls().is_empty());
}

// ============================================================================
// DELETE / - Delete Asset
// ============================================================================

#[tokio::test]
async fn test_delete_asset_forwards_only_the_id() {
    let app = TestApp::new();

    let response = app.send(json(Method::DELETE, "/", &asset_body())).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "Deleted Successfully");
    assert_eq!(app.contract.calls(), vec![Call::submit("DeleteAsset", &["asset7"])]);
}

#[tokio::test]
async fn test_delete_asset_without_id_returns_bad_request() {
    let app = TestApp::new();

    let response = app
        .send(json(Method::DELETE, "/", &serde_json::json!({ "item": "Mango" })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(app.contract.calls().is_empty());
}

// ============================================================================
// POST /Quality - Create Asset Quality
// ============================================================================

#[tokio::test]
async fn test_create_asset_quality_submits_reading() {
    let app = TestApp::new();
    let body = serde_json::json!({
        "id": "asset1Quality",
        "temperature": 25,
        "humidity": 10.01,
        "gas": "0.3"
    });

    let response = app.send(json(Method::POST, "/Quality", &body)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "Inserted Successfully");
    assert_eq!(
        app.contract.calls(),
        vec![Call::submit("CreateAssetQuality", &["asset1Quality", "25", "10.01", "0.3"])]
    );
}

// ============================================================================
// Degraded mode and cross-cutting behavior
// ============================================================================

#[tokio::test]
async fn test_degraded_gateway_answers_503_on_every_route() {
    let router = build_router(AppState::new(Arc::new(UnavailableContract::new(
        "connection refused",
    ))));
    let quality = serde_json::json!({ "id": "q", "temperature": 1, "humidity": 2, "gas": 3 });
    let update = serde_json::json!({
        "id": "a", "item": "b", "weight": 1, "packagedDate": "d",
        "packagedLocation": "l", "value": 2, "owner": "o"
    });

    let requests = vec![
        get("/"),
        get("/Quality"),
        get("/asset1"),
        json(Method::POST, "/", &asset_body()),
        json(Method::PUT, "/", &update),
        json(Method::DELETE, "/", &asset_body()),
        json(Method::POST, "/Quality", &quality),
    ];

    for request in requests {
        let uri = request.uri().clone();
        let method = request.method().clone();
        let response = send(&router, request).await;

        assert_eq!(
            response.status,
            StatusCode::SERVICE_UNAVAILABLE,
            "{method} {uri} should be unavailable"
        );
        assert_eq!(response.error().error.code, "GATEWAY_UNAVAILABLE");
    }
}

#[tokio::test]
async fn test_degraded_gateway_answers_503_before_validating_bodies() {
    let router = build_router(AppState::new(Arc::new(UnavailableContract::new(
        "connection refused",
    ))));
    let empty = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/Quality")
        .body(axum::body::Body::empty())
        .unwrap();
    let malformed = axum::http::Request::builder()
        .method(Method::PUT)
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let requests = vec![
        json(Method::POST, "/", &serde_json::json!({ "id": "a" })),
        json(Method::DELETE, "/", &serde_json::json!({})),
        empty,
        malformed,
    ];

    for request in requests {
        let uri = request.uri().clone();
        let method = request.method().clone();
        let response = send(&router, request).await;

        assert_eq!(
            response.status,
            StatusCode::SERVICE_UNAVAILABLE,
            "{method} {uri} should be unavailable"
        );
        assert_eq!(response.error().error.code, "GATEWAY_UNAVAILABLE");
    }
}

#[tokio::test]
async fn test_error_body_carries_request_id() {
    let app = TestApp::new();
    let request = axum::http::Request::builder()
        .method(Method::DELETE)
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-request-id", "trace-404")
        .body(axum::body::Body::from("{}"))
        .unwrap();

    let response = app.send(request).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error().request_id.as_deref(), Some("trace-404"));
}

#[tokio::test]
async fn test_request_id_is_generated_or_echoed() {
    let app = TestApp::new();

    let generated = app.send(get("/")).await;
    let id = generated.headers.get("x-request-id").unwrap().to_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());

    let request = axum::http::Request::builder()
        .uri("/")
        .header("x-request-id", "trace-123")
        .body(axum::body::Body::empty())
        .unwrap();
    let echoed = app.send(request).await;
    assert_eq!(echoed.headers.get("x-request-id").unwrap(), "trace-123");
}

#[tokio::test]
async fn test_unsupported_method_is_rejected_without_ledger_call() {
    let app = TestApp::new();
    let request = axum::http::Request::builder()
        .method(Method::PATCH)
        .uri("/")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app.send(request).await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert!(app.contract.calls().is_empty());
}
