//! Domain models for the notes database.
//!
//! These models are storage-agnostic and represent the entities
//! used throughout the application.

use std::fmt;
use std::str::FromStr;

use crate::db::{DbError, DbResult};

/// Identifier of a stored note.
///
/// Ids are assigned by the store as sequential positive integers and travel
/// over the wire as strings. Each id has exactly one textual form: decimal
/// digits without leading zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoteId(i64);

impl NoteId {
    /// Wrap a raw id read back from the store.
    pub(crate) fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DbError::InvalidId { id: s.to_string() };

        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if s.len() > 1 && s.starts_with('0') {
            return Err(invalid());
        }

        // "0" is well formed but never assigned
        s.parse::<i64>().map(Self).map_err(|_| invalid())
    }
}

/// A stored note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    pub content: String,
    pub important: bool,
}

/// Values for a note that has not been stored yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewNote {
    pub content: String,
    pub important: bool,
}

impl NewNote {
    pub fn new(content: impl Into<String>, important: bool) -> Self {
        Self {
            content: content.into(),
            important,
        }
    }
}

/// Replacement values for an existing note. Both fields overwrite the
/// stored ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteChanges {
    pub content: String,
    pub important: bool,
}

impl NoteChanges {
    pub fn new(content: impl Into<String>, important: bool) -> Self {
        Self {
            content: content.into(),
            important,
        }
    }

    /// Check the supplied values before they reach the store.
    pub fn validate(&self) -> DbResult<()> {
        validate_content(&self.content)
    }
}

/// Reject note content the store will not accept.
pub fn validate_content(content: &str) -> DbResult<()> {
    if content.trim().is_empty() {
        return Err(DbError::Validation {
            message: "content must not be empty".to_string(),
        });
    }
    Ok(())
}
