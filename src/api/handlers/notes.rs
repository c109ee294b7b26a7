//! Note management handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;

use crate::api::extract::ApiJson;
use crate::api::{ApiError, AppState, ErrorResponse};
use crate::db::{Database, NewNote, Note, NoteChanges, NoteId, NoteRepository};

// =============================================================================
// DTOs
// =============================================================================

#[derive(Debug, Serialize, ToSchema)]
pub struct NoteResponse {
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "HTML is easy")]
    pub content: String,
    #[schema(example = true)]
    pub important: bool,
}

impl From<Note> for NoteResponse {
    fn from(n: Note) -> Self {
        Self {
            id: n.id.to_string(),
            content: n.content,
            important: n.important,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateNoteRequest {
    #[schema(example = "CSS is easy")]
    pub content: Option<String>,
    /// Defaults to false
    #[schema(example = false)]
    pub important: Option<bool>,
}

/// Full replacement of a note. `content` is required.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateNoteRequest {
    #[schema(example = "CSS is hard")]
    pub content: Option<String>,
    /// Defaults to false
    #[schema(example = true)]
    pub important: Option<bool>,
}

impl TryFrom<UpdateNoteRequest> for NoteChanges {
    type Error = ApiError;

    fn try_from(req: UpdateNoteRequest) -> Result<Self, Self::Error> {
        let content = req.content.ok_or_else(|| ApiError::Validation {
            message: "content missing".to_string(),
        })?;

        Ok(NoteChanges::new(content, req.important.unwrap_or(false)))
    }
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    get,
    path = "/api/notes",
    tag = "notes",
    responses(
        (status = 200, description = "All notes", body = [NoteResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_notes<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<NoteResponse>>, ApiError> {
    let notes = state.db().notes().list().await?;

    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/notes/{id}",
    tag = "notes",
    params(("id" = String, Path, description = "Note ID")),
    responses(
        (status = 200, description = "Note found", body = NoteResponse),
        (status = 400, description = "Malformatted id", body = ErrorResponse),
        (status = 404, description = "Note not found")
    )
)]
#[instrument(skip(state))]
pub async fn get_note<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<Json<NoteResponse>, ApiError> {
    let id: NoteId = id.parse()?;
    let note = state.db().notes().get(id).await?;

    Ok(Json(NoteResponse::from(note)))
}

#[utoipa::path(
    post,
    path = "/api/notes",
    tag = "notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 200, description = "Note created", body = NoteResponse),
        (status = 400, description = "Content missing or invalid", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_note<D: Database>(
    State(state): State<AppState<D>>,
    ApiJson(req): ApiJson<CreateNoteRequest>,
) -> Result<Json<NoteResponse>, ApiError> {
    let content = req
        .content
        .filter(|c| !c.is_empty())
        .ok_or(ApiError::ContentMissing)?;

    let note = NewNote::new(content, req.important.unwrap_or(false));
    let created = state.db().notes().create(&note).await?;
    info!(id = %created.id, "Note created");

    Ok(Json(NoteResponse::from(created)))
}

#[utoipa::path(
    put,
    path = "/api/notes/{id}",
    tag = "notes",
    params(("id" = String, Path, description = "Note ID")),
    request_body = UpdateNoteRequest,
    responses(
        (status = 200, description = "Note updated", body = NoteResponse),
        (status = 400, description = "Malformatted id or invalid values", body = ErrorResponse),
        (status = 404, description = "Note not found")
    )
)]
#[instrument(skip(state))]
pub async fn update_note<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateNoteRequest>,
) -> Result<Json<NoteResponse>, ApiError> {
    let id: NoteId = id.parse()?;
    let changes = NoteChanges::try_from(req)?;
    let updated = state.db().notes().update(id, &changes).await?;
    info!(%id, "Note updated");

    Ok(Json(NoteResponse::from(updated)))
}

#[utoipa::path(
    delete,
    path = "/api/notes/{id}",
    tag = "notes",
    params(("id" = String, Path, description = "Note ID")),
    responses(
        (status = 204, description = "Note deleted, or was never there"),
        (status = 400, description = "Malformatted id", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_note<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: NoteId = id.parse()?;
    state.db().notes().delete(id).await?;
    info!(%id, "Note deleted");

    Ok(StatusCode::NO_CONTENT)
}
