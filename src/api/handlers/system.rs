//! System health and status handlers.

use axum::{Json, response::Html};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::ApiError;

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    #[schema(example = "ok")]
    pub status: String,
}

/// Greeting page
#[utoipa::path(
    get,
    path = "/",
    tag = "system",
    responses(
        (status = 200, description = "Static HTML greeting", body = String, content_type = "text/html")
    )
)]
#[instrument]
pub async fn root() -> Html<&'static str> {
    Html("<h1>hello world</h1>")
}

/// Health check endpoint
///
/// Returns the current health status of the API
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Health check successful", body = HealthResponse)
    )
)]
#[instrument]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Catch-all for routes that match nothing else.
#[instrument]
pub async fn unknown_endpoint() -> ApiError {
    ApiError::UnknownEndpoint
}
