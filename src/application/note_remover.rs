// src/application/note_remover.rs
use crate::application::note_fetcher::{parse_note_id, require_note_id};
use crate::application::DocumentStore;
use crate::domain::DomainError;
use tracing::info;

pub struct NoteRemover<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> NoteRemover<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn remove_note(&self, raw_id: &str) -> Result<(), DomainError> {
        let raw_id = require_note_id(raw_id)?;
        self.store.ensure_configured()?;
        let id = parse_note_id(raw_id)?;
        self.store.delete(&id).await?;
        info!(note_id = %id, "Removed note");
        Ok(())
    }
}
