//! Note routes
//!
//! Thin handlers: decode the request, call the notes service, and turn the
//! result or [`ApiError`] into a response.

use crate::app::AppState;
use crate::error::ApiError;
use crate::services::notes::{NoteResponse, NotesListResponse};
use crate::services::validation::NoteRequest;
use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

/// GET /api/notes
pub async fn list_notes(
    State(state): State<AppState>,
) -> Result<Json<NotesListResponse>, ApiError> {
    let notes = state.notes_service.list_notes().await?;
    Ok(Json(notes))
}

/// POST /api/notes
pub async fn create_note(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<NoteResponse>), ApiError> {
    let req = NoteRequest::decode(&body)?;
    let note = state.notes_service.create_note(req).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// DELETE /api/notes/:id
pub async fn delete_note(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id.map_err(|e| {
        tracing::debug!("Rejected note id: {}", e);
        ApiError::invalid_id()
    })?;
    let id: i64 = id.parse().map_err(|_| ApiError::invalid_id())?;
    state.notes_service.delete_note(id).await?;
    Ok(StatusCode::OK)
}
