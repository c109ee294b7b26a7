//! Tests for API error translation.

use axum::{http::StatusCode, response::IntoResponse};
use http_body_util::BodyExt;
use serde_json::{Value, json};

use super::ApiError;
use crate::db::DbError;

async fn body_bytes(error: ApiError) -> (StatusCode, Vec<u8>) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

async fn json_response(error: ApiError) -> (StatusCode, Value) {
    let (status, body) = body_bytes(error).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn content_missing_is_bad_request() {
    let (status, body) = json_response(ApiError::ContentMissing).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "content missing"}));
}

#[tokio::test]
async fn malformed_id_is_bad_request() {
    let error = ApiError::from(DbError::InvalidId {
        id: "5f3a".to_string(),
    });
    let (status, body) = json_response(error).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "malformatted id"}));
}

#[tokio::test]
async fn store_validation_is_bad_request_with_message() {
    let error = ApiError::from(DbError::Validation {
        message: "content must not be empty".to_string(),
    });
    let (status, body) = json_response(error).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "content must not be empty"}));
}

#[tokio::test]
async fn not_found_has_empty_body() {
    let error = ApiError::from(DbError::NotFound {
        entity_type: "Note".to_string(),
        id: "9".to_string(),
    });
    let (status, body) = body_bytes(error).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn unknown_endpoint_is_not_found_with_message() {
    let (status, body) = json_response(ApiError::UnknownEndpoint).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "unknown endpoint"}));
}

#[tokio::test]
async fn unrecognized_store_errors_are_internal() {
    let error = ApiError::from(DbError::Database {
        message: "disk I/O error".to_string(),
    });
    assert!(matches!(error, ApiError::Internal(_)));

    let (status, body) = json_response(error).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    // Store details stay in the logs
    assert_eq!(body, json!({"error": "internal server error"}));
}
