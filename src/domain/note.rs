// src/domain/note.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::util::time::{local_timestamp, utc_timestamp};

/// A note held by the blob-backed service, stored as `{id}.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub text: String,
    pub created_at: String,
}

impl Note {
    /// Build a note with a fresh v4 id, stamped with the current UTC time.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            created_at: utc_timestamp(),
        }
    }
}

/// Reply body for a freshly created note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedNote {
    pub id: Uuid,
    pub created_at: String,
}

impl From<&Note> for CreatedNote {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id,
            created_at: note.created_at.clone(),
        }
    }
}

/// A notebook entry, keyed by its title inside the notebook file.
///
/// `created` stays an opaque string so files written by other tools load as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalNote {
    pub content: String,
    pub created: String,
}

impl LocalNote {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            created: local_timestamp(),
        }
    }
}
