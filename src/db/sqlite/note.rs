//! SQLite NoteRepository implementation.

use sqlx::SqlitePool;
use tracing::debug;

use super::helpers::{NOTE_COLUMNS, map_sqlx_error, not_found, note_from_row};
use crate::db::{DbResult, NewNote, Note, NoteChanges, NoteId, NoteRepository, validate_content};

/// SQLx-backed note repository.
pub struct SqliteNoteRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl<'a> NoteRepository for SqliteNoteRepository<'a> {
    async fn list(&self) -> DbResult<Vec<Note>> {
        let rows = sqlx::query(&format!("SELECT {NOTE_COLUMNS} FROM note ORDER BY id"))
            .fetch_all(self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.iter().map(note_from_row).collect())
    }

    async fn get(&self, id: NoteId) -> DbResult<Note> {
        let row = sqlx::query(&format!("SELECT {NOTE_COLUMNS} FROM note WHERE id = ?"))
            .bind(id.get())
            .fetch_optional(self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.as_ref().map(note_from_row).ok_or_else(|| not_found(id))
    }

    async fn create(&self, note: &NewNote) -> DbResult<Note> {
        validate_content(&note.content)?;

        // The id is computed inside the INSERT so concurrent writers can
        // never be handed the same value.
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO note (id, content, important)
            VALUES ((SELECT COALESCE(MAX(id), 0) + 1 FROM note), ?, ?)
            RETURNING {NOTE_COLUMNS}
            "#
        ))
        .bind(&note.content)
        .bind(note.important)
        .fetch_one(self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let created = note_from_row(&row);
        debug!(id = %created.id, "Created note");
        Ok(created)
    }

    async fn update(&self, id: NoteId, changes: &NoteChanges) -> DbResult<Note> {
        changes.validate()?;

        let row = sqlx::query(&format!(
            r#"
            UPDATE note
            SET content = ?, important = ?
            WHERE id = ?
            RETURNING {NOTE_COLUMNS}
            "#
        ))
        .bind(&changes.content)
        .bind(changes.important)
        .bind(id.get())
        .fetch_optional(self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.as_ref().map(note_from_row).ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: NoteId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM note WHERE id = ?")
            .bind(id.get())
            .execute(self.pool)
            .await
            .map_err(map_sqlx_error)?;

        debug!(%id, removed = result.rows_affected(), "Deleted note");
        Ok(())
    }
}
