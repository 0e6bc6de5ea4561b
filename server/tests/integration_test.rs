//! Integration tests for SimpleNotes
//!
//! These tests run against a file-backed SQLite database and verify:
//! - Note creation, listing and deletion through the service
//! - Persistence across reopening the database
//! - The full HTTP surface on a real listener

use simplenotes::app::{build_router, AppState};
use simplenotes::database::{create_pool, Repository};
use simplenotes::error::ErrorKind;
use simplenotes::services::{NoteRequest, NotesService};
use serde_json::{json, Value};
use tempfile::TempDir;

/// Helper to create a test database with schema
async fn create_test_service() -> (NotesService, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");

    let pool = create_pool(&db_path).await.unwrap();
    let service = NotesService::new(Repository::new(pool));

    (service, temp_dir)
}

fn request(name: &str, note_type: &str, aliases: &[&str]) -> NoteRequest {
    NoteRequest {
        name: name.to_string(),
        note_type: note_type.to_string(),
        content: format!("content of {}", name),
        aliases: Some(aliases.iter().map(|a| a.to_string()).collect()),
    }
}

#[tokio::test]
async fn test_note_crud_operations() {
    let (service, _temp) = create_test_service().await;

    // Create note
    let note = service
        .create_note(request("Test Note", "TEXT", &["Foo Bar", " baz "]))
        .await
        .unwrap();

    assert!(note.id > 0);
    assert_eq!(note.name, "Test Note");
    assert_eq!(note.aliases, vec!["foobar", "baz"]);

    // List notes
    let list = service.list_notes().await.unwrap();
    assert_eq!(list.notes.len(), 1);
    assert_eq!(list.notes[0], note);

    // Delete note
    service.delete_note(note.id).await.unwrap();

    let list = service.list_notes().await.unwrap();
    assert!(list.notes.is_empty());

    // Second delete is reported, not ignored
    let err = service.delete_note(note.id).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_ids_are_unique() {
    let (service, _temp) = create_test_service().await;

    let mut ids = Vec::new();
    for i in 0..5 {
        let note = service
            .create_note(request(&format!("Note {}", i), "AUDIO", &[]))
            .await
            .unwrap();
        ids.push(note.id);
    }

    service.delete_note(ids[4]).await.unwrap();
    let next = service
        .create_note(request("After delete", "AUDIO", &[]))
        .await
        .unwrap();

    assert!(!ids.contains(&next.id));
    let mut sorted = ids.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), ids.len());
}

#[tokio::test]
async fn test_data_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("notes.db");

    let created = {
        let pool = create_pool(&db_path).await.unwrap();
        let service = NotesService::new(Repository::new(pool.clone()));
        let note = service
            .create_note(request("Persistent", "PDF", &["keep me"]))
            .await
            .unwrap();
        pool.close().await;
        note
    };

    let pool = create_pool(&db_path).await.unwrap();
    let service = NotesService::new(Repository::new(pool));

    let list = service.list_notes().await.unwrap();
    assert_eq!(list.notes, vec![created]);
    assert_eq!(list.notes[0].aliases, vec!["keepme"]);
}

#[tokio::test]
async fn test_http_server_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let pool = create_pool(&temp_dir.path().join("http.db")).await.unwrap();
    let app = build_router(AppState::new(pool), None);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = reqwest::Client::new();
    let base_url = format!("http://{}", addr);

    let response = client
        .post(format!("{}/api/notes", base_url))
        .json(&json!({
            "name": "Over the wire",
            "type": "VIDEO",
            "content": "clip.mp4",
            "aliases": ["Clip"]
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    let created: Value = response.json().await.unwrap();
    assert!(created["id"].as_i64().unwrap() > 0);
    assert_eq!(created["name"], "Over the wire");
    assert_eq!(created["type"], "VIDEO");
    assert_eq!(created["aliases"], json!(["clip"]));

    let response = client
        .get(format!("{}/api/notes", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let listed: Value = response.json().await.unwrap();
    assert_eq!(listed["notes"], json!([created]));

    let response = client
        .delete(format!("{}/api/notes/{}", base_url, created["id"]))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let response = client
        .delete(format!("{}/api/notes/{}", base_url, created["id"]))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Resource not found", "status": 404 }));
}
