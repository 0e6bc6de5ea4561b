//! Services module
//!
//! Business logic that sits between the HTTP routes and the repository.

pub mod notes;
pub mod validation;

pub use notes::{NoteResponse, NotesListResponse, NotesService};
pub use validation::NoteRequest;
