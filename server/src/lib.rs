//! SimpleNotes library
//!
//! Notes CRUD over SQLite: persistence, validation, the notes service and the
//! HTTP routes. The binary in `main.rs` only wires these together.

pub mod app;
pub mod config;
pub mod database;
pub mod error;
pub mod routes;
pub mod services;
