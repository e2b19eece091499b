// src/infrastructure/blob.rs
use crate::application::DocumentStore;
use crate::config::StorageSettings;
use crate::constants::DOCUMENT_SUFFIX;
use crate::domain::DomainError;
use crate::infrastructure::connection::ConnectionTarget;
use async_trait::async_trait;
use opendal::{ErrorKind, Operator};
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

/// Note documents in a blob container, one object per note at `{id}.json`.
///
/// Every call opens its own operator; nothing is pooled between calls.
#[derive(Debug, Clone)]
pub struct BlobNoteStore {
    settings: StorageSettings,
}

impl BlobNoteStore {
    pub fn new(settings: StorageSettings) -> Self {
        Self { settings }
    }

    pub fn blob_name(id: &Uuid) -> String {
        format!("{id}{DOCUMENT_SUFFIX}")
    }

    fn connect(&self) -> Result<Operator, DomainError> {
        let connection = self
            .settings
            .connection
            .as_deref()
            .ok_or_else(unconfigured)?;
        ConnectionTarget::parse(connection)?.operator(&self.settings.container)
    }
}

fn unconfigured() -> DomainError {
    DomainError::Unconfigured("no storage connection string".to_string())
}

#[async_trait]
impl DocumentStore for BlobNoteStore {
    fn ensure_configured(&self) -> Result<(), DomainError> {
        if self.settings.is_configured() {
            Ok(())
        } else {
            Err(unconfigured())
        }
    }

    #[instrument(level = "debug", skip(self, document))]
    async fn save(&self, id: &Uuid, document: &str) -> Result<(), DomainError> {
        let operator = self.connect()?;
        let blob_name = Self::blob_name(id);

        operator
            .write(&blob_name, document.as_bytes().to_vec())
            .await
            .map_err(|e| {
                error!(note_id = %id, error = %e, "Error saving note");
                DomainError::StorageUnavailable(format!("Error saving note {id}: {e}"))
            })?;

        info!(note_id = %id, "Note saved successfully");
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    async fn get(&self, id: &Uuid) -> Result<String, DomainError> {
        let operator = self.connect()?;
        let blob_name = Self::blob_name(id);

        let bytes = operator.read(&blob_name).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                info!(note_id = %id, "Note not found");
                DomainError::NoteNotFound(id.to_string())
            } else {
                error!(note_id = %id, error = %e, "Error retrieving note");
                DomainError::StorageUnavailable(format!("Error retrieving note {id}: {e}"))
            }
        })?;

        let document = String::from_utf8(bytes).map_err(|e| {
            error!(note_id = %id, error = %e, "Stored note is not UTF-8");
            DomainError::Serialization(format!("Note {id} is not valid UTF-8"))
        })?;

        info!(note_id = %id, "Note retrieved successfully");
        Ok(document)
    }

    #[instrument(level = "debug", skip(self))]
    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        let operator = self.connect()?;
        let blob_name = Self::blob_name(id);

        // The store treats deleting a missing object as success, so check first
        match operator.stat(&blob_name).await {
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(note_id = %id, "Note not found for deletion");
                return Err(DomainError::NoteNotFound(id.to_string()));
            }
            Err(e) => {
                error!(note_id = %id, error = %e, "Failed to check note existence");
                return Err(DomainError::StorageUnavailable(format!(
                    "Failed to check note existence: {e}"
                )));
            }
        }

        operator.delete(&blob_name).await.map_err(|e| {
            error!(note_id = %id, error = %e, "Error deleting note");
            DomainError::StorageUnavailable(format!("Error deleting note {id}: {e}"))
        })?;

        info!(note_id = %id, "Note deleted successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_note_id_when_naming_blob_then_appends_json_suffix() {
        let id = Uuid::parse_str("6f9619ff-8b86-4d11-b42d-00c04fc964ff").unwrap();

        assert_eq!(
            BlobNoteStore::blob_name(&id),
            "6f9619ff-8b86-4d11-b42d-00c04fc964ff.json"
        );
    }

    #[tokio::test]
    async fn given_no_connection_when_saving_then_reports_unconfigured() {
        let store = BlobNoteStore::new(StorageSettings::default());

        let result = store.save(&Uuid::new_v4(), "{}").await;

        assert!(matches!(result, Err(DomainError::Unconfigured(_))));
    }
}
