//! HTTP routes exposed to clients
//!
//! - `notes`: note listing, creation and deletion under `/api/notes`

pub mod notes;

use crate::app::AppState;
use axum::routing::{delete, get};
use axum::Router;

pub use notes::*;

/// Build the API router without middleware layers.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/notes", get(list_notes).post(create_note))
        .route("/api/notes/:id", delete(delete_note))
}
