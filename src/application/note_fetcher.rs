// src/application/note_fetcher.rs
use crate::application::DocumentStore;
use crate::domain::DomainError;
use tracing::debug;
use uuid::Uuid;

pub struct NoteFetcher<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> NoteFetcher<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Fetch the stored document for `raw_id` exactly as it was written.
    ///
    /// A blank id is rejected first, then an unconfigured store, then an id
    /// that cannot exist.
    pub async fn fetch_document(&self, raw_id: &str) -> Result<String, DomainError> {
        let raw_id = require_note_id(raw_id)?;
        self.store.ensure_configured()?;
        let id = parse_note_id(raw_id)?;
        self.store.get(&id).await
    }
}

/// Trimmed path segment, or `ValidationFailed` when it is blank.
pub fn require_note_id(raw_id: &str) -> Result<&str, DomainError> {
    let raw_id = raw_id.trim();
    if raw_id.is_empty() {
        return Err(DomainError::ValidationFailed("Note ID required".to_string()));
    }
    Ok(raw_id)
}

/// Turn a path segment into a note id.
///
/// Blank input is a validation failure. Anything that is not a UUID can never
/// have been issued, so it reports `NoteNotFound` without touching storage.
pub fn parse_note_id(raw_id: &str) -> Result<Uuid, DomainError> {
    let raw_id = require_note_id(raw_id)?;
    Uuid::parse_str(raw_id).map_err(|_| {
        debug!(raw_id, "Rejecting id that is not a UUID");
        DomainError::NoteNotFound(raw_id.to_string())
    })
}
