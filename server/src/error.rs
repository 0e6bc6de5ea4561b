//! Error types for SimpleNotes
//!
//! `AppError` covers internal failures (database, I/O, startup config).
//! `ApiError` is the status + message value every service operation returns
//! instead of panicking; the HTTP layer turns it into a JSON response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::ser::SerializeStruct;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Classifier for every error the note service can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedInput,
    ValidationFailed,
    AliasLength,
    DuplicateAlias,
    NotFound,
    Internal,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::MalformedInput
            | ErrorKind::ValidationFailed
            | ErrorKind::AliasLength
            | ErrorKind::DuplicateAlias => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error value returned across the service boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    kind: ErrorKind,
    message: String,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn malformed_json() -> Self {
        Self::new(ErrorKind::MalformedInput, "Malformed JSON body")
    }

    pub fn invalid_id() -> Self {
        Self::new(ErrorKind::MalformedInput, "ID is not a number")
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ValidationFailed, message)
    }

    pub fn alias_length(alias: &str, min: usize, max: usize) -> Self {
        Self::new(
            ErrorKind::AliasLength,
            format!(
                "Notes aliases must be in range of [{} - {}], provided ({}): {}",
                min,
                max,
                alias.chars().count(),
                alias
            ),
        )
    }

    pub fn duplicate_alias() -> Self {
        Self::new(ErrorKind::DuplicateAlias, "Cannot have duplicate aliases")
    }

    pub fn not_found() -> Self {
        Self::new(ErrorKind::NotFound, "Resource not found")
    }

    pub fn internal() -> Self {
        Self::new(ErrorKind::Internal, "Internal server error")
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> StatusCode {
        self.kind.status()
    }
}

impl serde::Serialize for ApiError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("ApiError", 2)?;
        state.serialize_field("message", &self.message)?;
        state.serialize_field("status", &self.status().as_u16())?;
        state.end()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}
