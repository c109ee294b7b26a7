//! Shared helper functions for SQLite repositories.

use sqlx::Row;
use sqlx::error::ErrorKind;
use sqlx::sqlite::SqliteRow;

use crate::db::{DbError, Note, NoteId};

/// Columns selected for every note query, in `note_from_row` order.
pub const NOTE_COLUMNS: &str = "id, content, important";

/// Translate a SQLx error into a storage-agnostic error.
///
/// Rows rejected by a `CHECK` constraint are reported as validation
/// failures, everything else as a generic database error.
pub fn map_sqlx_error(e: sqlx::Error) -> DbError {
    if let Some(db_err) = e.as_database_error()
        && matches!(db_err.kind(), ErrorKind::CheckViolation)
    {
        return DbError::Validation {
            message: db_err.message().to_string(),
        };
    }

    DbError::Database {
        message: e.to_string(),
    }
}

/// Build a Note from a row selected with `NOTE_COLUMNS`.
pub fn note_from_row(row: &SqliteRow) -> Note {
    Note {
        id: NoteId::from_raw(row.get("id")),
        content: row.get("content"),
        important: row.get("important"),
    }
}

pub fn not_found(id: NoteId) -> DbError {
    DbError::NotFound {
        entity_type: "Note".to_string(),
        id: id.to_string(),
    }
}
