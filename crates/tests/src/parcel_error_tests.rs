use httpmock::prelude::*;
use server::error_convert::AppErrorExt;
use shared_types::{AppError, AppErrorKind};

use crate::common::{sample_request, upstream_client, UNREACHABLE_URL};

async fn create_against(status: u16, body: serde_json::Value) -> AppError {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(POST).path("/api/parcels");
            then.status(status).json_body(body);
        })
        .await;

    upstream_client(&upstream)
        .create_parcel(&sample_request())
        .await
        .unwrap_err()
}

#[tokio::test]
async fn missing_field_rejection_is_bad_request() {
    let err = create_against(400, serde_json::json!({ "error": "'sender'" })).await;
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(err.message, "'sender'");
}

#[tokio::test]
async fn unprocessable_payload_is_validation_error() {
    let err = create_against(422, serde_json::json!({ "error": "weight must be positive" })).await;
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.message, "weight must be positive");
}

#[tokio::test]
async fn upstream_server_error_is_unavailable() {
    let err = create_against(500, serde_json::json!({ "error": "database locked" })).await;
    assert_eq!(err.kind, AppErrorKind::Unavailable);
}

#[tokio::test]
async fn error_without_json_body_uses_status_reason() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(POST).path("/api/parcels");
            then.status(404).body("nope");
        })
        .await;

    let err = upstream_client(&upstream)
        .create_parcel(&sample_request())
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.message, "Not Found");
}

#[tokio::test]
async fn malformed_success_body_is_internal_error() {
    let err = create_against(201, serde_json::json!({ "message": "ok" })).await;
    assert_eq!(err.kind, AppErrorKind::InternalError);
}

#[tokio::test]
async fn unreachable_service_is_unavailable() {
    let err = server::upstream::ParcelServiceClient::new(UNREACHABLE_URL, None)
        .unwrap()
        .create_parcel(&sample_request())
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unavailable);
    assert_eq!(err.message, "Parcel service is unreachable");
}

#[tokio::test]
async fn upstream_error_survives_the_server_fn_boundary() {
    let err = create_against(400, serde_json::json!({ "error": "'recipient'" })).await;

    let wire = err.clone().into_server_fn_error().to_string();
    let recovered = AppError::from_server_error(&wire).unwrap();

    assert_eq!(recovered, err);
}
