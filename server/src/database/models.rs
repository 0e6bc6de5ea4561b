//! Database models
//!
//! Rust structs representing the two persisted entities and the note type
//! enumeration. Timestamps are stored as milliseconds since the Unix epoch (UTC).

use serde::Serialize;
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Kind of media a note describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NoteType {
    Pdf,
    Image,
    Text,
    Video,
    Audio,
}

impl NoteType {
    pub const ALL: [NoteType; 5] = [
        NoteType::Pdf,
        NoteType::Image,
        NoteType::Text,
        NoteType::Video,
        NoteType::Audio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NoteType::Pdf => "PDF",
            NoteType::Image => "IMAGE",
            NoteType::Text => "TEXT",
            NoteType::Video => "VIDEO",
            NoteType::Audio => "AUDIO",
        }
    }
}

impl fmt::Display for NoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown note type: {0}")]
pub struct UnknownNoteType(pub String);

/// Case-sensitive: only the exact upper-case names are accepted.
impl FromStr for NoteType {
    type Err = UnknownNoteType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NoteType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownNoteType(s.to_string()))
    }
}

/// A stored note
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Note {
    pub id: i64,
    pub name: String,
    #[sqlx(rename = "type")]
    pub note_type: String,
    pub content: String,
    pub created_at: i64,
    /// Set at creation; no operation revises it
    pub updated_at: i64,
}

/// An alternate short name bound to a note. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct NoteAlias {
    pub id: i64,
    pub note_id: i64,
    pub value: String,
    pub created_at: i64,
}

/// Fields of a note about to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub name: String,
    pub note_type: NoteType,
    pub content: String,
}
