//! Notes service
//!
//! High-level business logic for notes: list, create and delete. Every
//! operation returns either its result or a single [`ApiError`].

use super::validation::{validate_note_request, NoteRequest};
use crate::database::{Note, NoteAlias, NoteType, Repository};
use crate::error::ApiError;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// Note as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteResponse {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub note_type: NoteType,
    pub content: String,
    pub aliases: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl NoteResponse {
    /// Fails when the stored type is not one of the known names.
    fn from_note(note: Note, aliases: Vec<String>) -> Result<Self, ApiError> {
        let note_type = note.note_type.parse::<NoteType>().map_err(|e| {
            tracing::error!("Note {} has {}", note.id, e);
            ApiError::internal()
        })?;

        Ok(Self {
            id: note.id,
            name: note.name,
            note_type,
            content: note.content,
            aliases,
            created_at: format_epoch_millis(note.created_at),
            updated_at: format_epoch_millis(note.updated_at),
        })
    }
}

/// Body of the list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotesListResponse {
    pub notes: Vec<NoteResponse>,
}

/// RFC 3339 in UTC with second precision, e.g. `2024-05-01T12:00:00Z`
pub fn format_epoch_millis(millis: i64) -> String {
    let timestamp = match DateTime::from_timestamp_millis(millis) {
        Some(timestamp) => timestamp,
        None => {
            tracing::warn!("Timestamp {} ms is out of range, using the epoch", millis);
            DateTime::<Utc>::default()
        }
    };
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Group alias values by the note they belong to, keeping store order.
fn aliases_by_note(aliases: Vec<NoteAlias>) -> HashMap<i64, Vec<String>> {
    let mut out: HashMap<i64, Vec<String>> = HashMap::new();
    for alias in aliases {
        out.entry(alias.note_id).or_default().push(alias.value);
    }
    out
}

/// Service for managing notes
#[derive(Clone)]
pub struct NotesService {
    repo: Repository,
}

impl NotesService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// List all notes with their aliases
    pub async fn list_notes(&self) -> Result<NotesListResponse, ApiError> {
        let notes = self.repo.list_notes().await.map_err(|e| {
            tracing::error!("Failed to fetch notes: {}", e);
            ApiError::internal()
        })?;

        let aliases = self.repo.list_aliases().await.map_err(|e| {
            tracing::error!("Failed to fetch aliases: {}", e);
            ApiError::internal()
        })?;

        let mut by_note = aliases_by_note(aliases);
        let notes = notes
            .into_iter()
            .map(|note| {
                let aliases = by_note.remove(&note.id).unwrap_or_default();
                NoteResponse::from_note(note, aliases)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(NotesListResponse { notes })
    }

    /// Validate a request and persist the note with its aliases
    pub async fn create_note(&self, req: NoteRequest) -> Result<NoteResponse, ApiError> {
        let validated = validate_note_request(req)?;

        tracing::info!("Creating new note: {}", validated.note.name);

        let note = self
            .repo
            .create_note_with_aliases(&validated.note, &validated.aliases)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create note: {}", e);
                ApiError::internal()
            })?;

        tracing::info!("Note created successfully: {}", note.id);

        NoteResponse::from_note(note, validated.aliases)
    }

    /// Delete a note by ID
    pub async fn delete_note(&self, id: i64) -> Result<(), ApiError> {
        tracing::info!("Deleting note: {}", id);

        let existing = self.repo.get_note(id).await.map_err(|e| {
            tracing::error!("Failed to fetch note {}: {}", id, e);
            ApiError::internal()
        })?;

        if existing.is_none() {
            return Err(ApiError::not_found());
        }

        let rows = self.repo.delete_note(id).await.map_err(|e| {
            tracing::error!("Failed to delete note {}: {}", id, e);
            ApiError::internal()
        })?;

        if rows == 0 {
            tracing::warn!("Note {} vanished before it could be deleted", id);
            return Err(ApiError::not_found());
        }

        tracing::info!("Note deleted successfully: {}", id);

        Ok(())
    }
}
