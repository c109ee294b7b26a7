//! Database error types.
//!
//! This module provides abstracted error types for note storage.
//! It uses miette for fancy diagnostic output and thiserror for derive macros.
//! The error types are storage-backend agnostic.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Entity not found: {entity_type} with id '{id}'")]
    #[diagnostic(code(notes::db::not_found))]
    NotFound { entity_type: String, id: String },

    #[error("Invalid id: '{id}'")]
    #[diagnostic(
        code(notes::db::invalid_id),
        help("Note ids are positive integers")
    )]
    InvalidId { id: String },

    #[error("Validation error: {message}")]
    #[diagnostic(code(notes::db::validation_error))]
    Validation { message: String },

    #[error("Database error: {message}")]
    #[diagnostic(code(notes::db::database_error))]
    Database { message: String },

    #[error("Migration error: {message}")]
    #[diagnostic(code(notes::db::migration_error))]
    Migration { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(code(notes::db::connection_error))]
    Connection { message: String },
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
