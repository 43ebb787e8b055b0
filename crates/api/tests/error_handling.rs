//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router or
//! database is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use todo_api::error::{panic_response, AppError};
use todo_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    into_parts(err.into_response()).await
}

async fn into_parts(response: axum::response::Response) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404_with_detail() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Todo",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, serde_json::json!({ "detail": "Todo not found" }));
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("secret database path leaked".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        !json.to_string().contains("secret"),
        "Internal error response must not leak details"
    );
    assert_eq!(json["detail"], "An internal error occurred");
}

#[tokio::test]
async fn database_error_returns_500_and_sanitizes_message() {
    let err = AppError::Database(sqlx::Error::PoolClosed);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["detail"], "An internal error occurred");
}

#[tokio::test]
async fn panic_payload_is_not_exposed() {
    let response = panic_response(Box::new("index out of bounds"));

    let (status, json) = into_parts(response).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["detail"], "An internal error occurred");
}
