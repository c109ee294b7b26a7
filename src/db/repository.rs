//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the HTTP layer.
//! Methods return `Send` futures so handlers stay usable from axum.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{NewNote, Note, NoteChanges, NoteId},
};

/// Repository for Note operations.
pub trait NoteRepository: Send + Sync {
    /// Get all notes, ordered by id.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Note>>> + Send;

    /// Get a note by ID.
    fn get(&self, id: NoteId) -> impl Future<Output = DbResult<Note>> + Send;

    /// Store a new note under a freshly assigned id.
    fn create(&self, note: &NewNote) -> impl Future<Output = DbResult<Note>> + Send;

    /// Overwrite an existing note's fields and return the stored result.
    fn update(
        &self,
        id: NoteId,
        changes: &NoteChanges,
    ) -> impl Future<Output = DbResult<Note>> + Send;

    /// Delete a note by ID. Deleting a missing note is not an error.
    fn delete(&self, id: NoteId) -> impl Future<Output = DbResult<()>> + Send;
}

/// Combined database interface.
pub trait Database: Send + Sync {
    type Notes<'a>: NoteRepository
    where
        Self: 'a;

    /// Run pending migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the note repository.
    fn notes(&self) -> Self::Notes<'_>;
}
