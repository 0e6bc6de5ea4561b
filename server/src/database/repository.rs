//! Repository layer for database operations
//!
//! Reads and writes for notes and their aliases. Writes that touch both
//! tables run in a single transaction.

use super::models::*;
use crate::error::Result;
use chrono::Utc;
use sqlx::SqlitePool;

/// Repository for database operations
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all notes
    pub async fn list_notes(&self) -> Result<Vec<Note>> {
        let notes = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, name, type, content, created_at, updated_at
            FROM notes
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(notes)
    }

    /// List every alias of every note
    pub async fn list_aliases(&self) -> Result<Vec<NoteAlias>> {
        let aliases = sqlx::query_as::<_, NoteAlias>(
            r#"
            SELECT id, note_id, value, created_at
            FROM note_aliases
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(aliases)
    }

    /// Get a note by ID, `None` when no row matches
    pub async fn get_note(&self, id: i64) -> Result<Option<Note>> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, name, type, content, created_at, updated_at
            FROM notes WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(note)
    }

    /// Insert a note and its aliases atomically.
    ///
    /// Both timestamps of the note and the creation time of every alias share
    /// one instant. If any alias insert fails the note insert is rolled back.
    pub async fn create_note_with_aliases(&self, new: &NewNote, aliases: &[String]) -> Result<Note> {
        let timestamp = Utc::now().timestamp_millis();

        let mut tx = self.pool.begin().await?;

        let note = sqlx::query_as::<_, Note>(
            r#"
            INSERT INTO notes (name, type, content, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, name, type, content, created_at, updated_at
            "#,
        )
        .bind(&new.name)
        .bind(new.note_type.as_str())
        .bind(&new.content)
        .bind(timestamp)
        .bind(timestamp)
        .fetch_one(&mut *tx)
        .await?;

        for alias in aliases {
            sqlx::query(
                r#"
                INSERT INTO note_aliases (note_id, value, created_at)
                VALUES (?, ?, ?)
                "#,
            )
            .bind(note.id)
            .bind(alias)
            .bind(timestamp)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::debug!("Created note: {} with {} aliases", note.id, aliases.len());
        Ok(note)
    }

    /// Delete a note together with its aliases.
    ///
    /// Returns the number of note rows removed (0 or 1).
    pub async fn delete_note(&self, id: i64) -> Result<u64> {
        let mut tx = self.pool.begin().await?;

        let aliases = sqlx::query("DELETE FROM note_aliases WHERE note_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let rows = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        // Dropping the transaction rolls back the alias delete
        if rows == 0 {
            return Ok(0);
        }

        tx.commit().await?;

        tracing::debug!("Deleted note: {} ({} aliases)", id, aliases);
        Ok(rows)
    }
}
