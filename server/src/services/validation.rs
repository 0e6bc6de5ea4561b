//! Note input decoding, validation and alias sanitization
//!
//! Everything here is pure: a request is either turned into a
//! [`ValidatedNote`] or rejected with an [`ApiError`] before anything
//! touches the database.

use crate::config::{
    ALIAS_MAX_LENGTH, ALIAS_MIN_LENGTH, MAX_ALIASES, NAME_MAX_LENGTH, NAME_MIN_LENGTH,
};
use crate::database::{NewNote, NoteType};
use crate::error::ApiError;
use serde::Deserialize;
use std::collections::HashSet;

/// Create note request as sent by clients.
///
/// Missing string fields decode as empty so they are reported as validation
/// failures rather than malformed input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NoteRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub note_type: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub aliases: Option<Vec<String>>,
}

impl NoteRequest {
    /// Decode a JSON body. Any structural mismatch is malformed input.
    pub fn decode(body: &[u8]) -> Result<Self, ApiError> {
        serde_json::from_slice(body).map_err(|e| {
            tracing::debug!("Rejected note request body: {}", e);
            ApiError::malformed_json()
        })
    }
}

/// A note request that passed every check, with aliases sanitized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedNote {
    pub note: NewNote,
    pub aliases: Vec<String>,
}

/// Run the full pipeline: structure, alias sanitization, alias length, duplicates.
pub fn validate_note_request(req: NoteRequest) -> Result<ValidatedNote, ApiError> {
    let note_type = validate_structure(&req)?;

    let aliases = sanitize_aliases(req.aliases.as_deref().unwrap_or_default());
    validate_aliases(&aliases)?;

    Ok(ValidatedNote {
        note: NewNote {
            name: req.name.trim().to_string(),
            note_type,
            content: req.content,
        },
        aliases,
    })
}

/// Check the four request fields, reporting every violation at once.
fn validate_structure(req: &NoteRequest) -> Result<NoteType, ApiError> {
    let mut violations = Vec::new();

    let name_len = req.name.trim().chars().count();
    if name_len == 0 {
        violations.push("name is required".to_string());
    } else if !(NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&name_len) {
        violations.push(format!(
            "name must be between {} and {} characters, got {}",
            NAME_MIN_LENGTH, NAME_MAX_LENGTH, name_len
        ));
    }

    let note_type = if req.note_type.is_empty() {
        violations.push("type is required".to_string());
        None
    } else {
        match req.note_type.parse::<NoteType>() {
            Ok(t) => Some(t),
            Err(_) => {
                let allowed: Vec<&str> = NoteType::ALL.iter().map(|t| t.as_str()).collect();
                violations.push(format!(
                    "type must be one of [{}], got '{}'",
                    allowed.join(" "),
                    req.note_type
                ));
                None
            }
        }
    };

    if req.content.is_empty() {
        violations.push("content is required".to_string());
    }

    if let Some(aliases) = &req.aliases {
        if aliases.len() > MAX_ALIASES {
            violations.push(format!(
                "aliases must contain at most {} entries, got {}",
                MAX_ALIASES,
                aliases.len()
            ));
        }
    }

    match note_type {
        Some(t) if violations.is_empty() => Ok(t),
        _ => Err(ApiError::validation(violations.join("; "))),
    }
}

/// Remove all whitespace (including inner whitespace) and lower-case.
pub fn sanitize_alias(alias: &str) -> String {
    alias
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

pub fn sanitize_aliases(aliases: &[String]) -> Vec<String> {
    aliases.iter().map(|a| sanitize_alias(a)).collect()
}

/// Length-check each sanitized alias, then reject duplicates.
pub fn validate_aliases(aliases: &[String]) -> Result<(), ApiError> {
    for alias in aliases {
        let len = alias.chars().count();
        if !(ALIAS_MIN_LENGTH..=ALIAS_MAX_LENGTH).contains(&len) {
            return Err(ApiError::alias_length(
                alias,
                ALIAS_MIN_LENGTH,
                ALIAS_MAX_LENGTH,
            ));
        }
    }

    let mut seen = HashSet::with_capacity(aliases.len());
    if !aliases.iter().all(|a| seen.insert(a.as_str())) {
        return Err(ApiError::duplicate_alias());
    }

    Ok(())
}
