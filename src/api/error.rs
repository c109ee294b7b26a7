//! HTTP error translation.
//!
//! Handlers never build error responses themselves. Store errors are
//! propagated with `?` into [`ApiError`], and its `IntoResponse` impl is the
//! single place that decides status codes and bodies.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};
use utoipa::ToSchema;

use crate::db::DbError;

/// Error body returned by the API.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "content missing")]
    pub error: String,
}

/// Request-level API errors.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("content missing")]
    #[diagnostic(code(notes::api::content_missing))]
    ContentMissing,

    #[error("{message}")]
    #[diagnostic(code(notes::api::validation))]
    Validation { message: String },

    #[error("malformatted id")]
    #[diagnostic(code(notes::api::malformatted_id))]
    MalformattedId { id: String },

    #[error("note '{id}' not found")]
    #[diagnostic(code(notes::api::not_found))]
    NotFound { id: String },

    #[error("unknown endpoint")]
    #[diagnostic(code(notes::api::unknown_endpoint))]
    UnknownEndpoint,

    #[error("internal server error")]
    #[diagnostic(code(notes::api::internal))]
    Internal(#[source] DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::ContentMissing
            | ApiError::Validation { .. }
            | ApiError::MalformattedId { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } | ApiError::UnknownEndpoint => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { id, .. } => ApiError::NotFound { id },
            DbError::InvalidId { id } => ApiError::MalformattedId { id },
            DbError::Validation { message } => ApiError::Validation { message },
            other => ApiError::Internal(other),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation {
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            // Missing notes answer with an empty body
            ApiError::NotFound { id } => {
                debug!(%id, "Note not found");
                status.into_response()
            }
            ApiError::Internal(e) => {
                error!(error = %e, "Unhandled store error");
                json_error(status, "internal server error".to_string())
            }
            ApiError::MalformattedId { id } => {
                debug!(%id, "Malformatted note id");
                json_error(status, "malformatted id".to_string())
            }
            other => {
                debug!(error = %other, "Rejected request");
                json_error(status, other.to_string())
            }
        }
    }
}

fn json_error(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}
