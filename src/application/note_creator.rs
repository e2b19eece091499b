// src/application/note_creator.rs
use crate::domain::{DomainError, Note};
use async_trait::async_trait;
use tracing::{debug, info};
use uuid::Uuid;

/// Key-value storage for serialized note documents, keyed by note id.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// `Unconfigured` when the store has no target to talk to
    fn ensure_configured(&self) -> Result<(), DomainError> {
        Ok(())
    }

    /// Create or overwrite the document for `id`
    async fn save(&self, id: &Uuid, document: &str) -> Result<(), DomainError>;

    /// Raw stored document; `NoteNotFound` when there is none
    async fn get(&self, id: &Uuid) -> Result<String, DomainError>;

    /// Remove the document; `NoteNotFound` when there is none
    async fn delete(&self, id: &Uuid) -> Result<(), DomainError>;
}

#[async_trait]
impl<S: DocumentStore + ?Sized> DocumentStore for &S {
    fn ensure_configured(&self) -> Result<(), DomainError> {
        (**self).ensure_configured()
    }

    async fn save(&self, id: &Uuid, document: &str) -> Result<(), DomainError> {
        (**self).save(id, document).await
    }

    async fn get(&self, id: &Uuid) -> Result<String, DomainError> {
        (**self).get(id).await
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        (**self).delete(id).await
    }
}

pub struct NoteCreator<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> NoteCreator<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validate `text`, build a note around it and persist it.
    ///
    /// Blank text fails with `ValidationFailed` before the store is touched.
    pub async fn create_note(&self, text: &str) -> Result<Note, DomainError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DomainError::ValidationFailed(
                "text field is required".to_string(),
            ));
        }

        let note = Note::new(text);
        let document = serde_json::to_string(&note)
            .map_err(|e| DomainError::Serialization(e.to_string()))?;
        debug!(note_id = %note.id, "Persisting new note");

        self.store.save(&note.id, &document).await?;

        info!(note_id = %note.id, "Created note");
        Ok(note)
    }
}
