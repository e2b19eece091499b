// src/infrastructure/json_file.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, LocalNote};
use anyhow::{Context, Result};
use indexmap::IndexMap;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Notebook kept in a single JSON file mapping title to note.
///
/// The whole mapping is held in memory and the file is rewritten after every
/// change, via a temporary sibling file that is renamed over the original.
#[derive(Debug)]
pub struct JsonFileRepository {
    path: PathBuf,
    notes: IndexMap<String, LocalNote>,
}

impl JsonFileRepository {
    /// Load the notebook at `path`; a missing file is an empty notebook.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = PathBuf::from(path.as_ref());
        debug!(?path, "Opening notebook");

        let notes: IndexMap<String, LocalNote> = if path.exists() {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read notebook {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Notebook {} is not valid JSON", path.display()))?
        } else {
            debug!(?path, "Notebook file absent, starting empty");
            IndexMap::new()
        };

        info!(?path, count = notes.len(), "Loaded notebook");
        Ok(Self { path, notes })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    fn persist(&self) -> Result<(), DomainError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let storage_error = |action: &str, e: &dyn std::fmt::Display| {
            DomainError::StorageUnavailable(format!(
                "Failed to {action} {}: {e}",
                self.path.display()
            ))
        };

        // the replacement keeps the mode of the file it replaces
        let existing = fs::metadata(&self.path).ok().map(|m| m.permissions());
        #[cfg_attr(not(unix), allow(unused_mut))]
        let mut builder = tempfile::Builder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if existing.is_none() {
                // umask still applies on creation
                builder.permissions(fs::Permissions::from_mode(0o666));
            }
        }
        let temp = builder
            .tempfile_in(dir)
            .map_err(|e| storage_error("stage", &e))?;
        if let Some(permissions) = existing {
            temp.as_file()
                .set_permissions(permissions)
                .map_err(|e| storage_error("set permissions on", &e))?;
        }
        {
            let mut writer = BufWriter::new(temp.as_file());
            serde_json::to_writer_pretty(&mut writer, &self.notes)
                .map_err(|e| DomainError::Serialization(e.to_string()))?;
            writer.flush().map_err(|e| storage_error("write", &e))?;
        }
        temp.as_file()
            .sync_all()
            .map_err(|e| storage_error("sync", &e))?;
        temp.persist(&self.path)
            .map_err(|e| storage_error("replace", &e.error))?;

        debug!(count = self.notes.len(), "Notebook written");
        Ok(())
    }
}

impl NoteRepository for JsonFileRepository {
    fn list_titles(&self) -> Result<Vec<String>, DomainError> {
        Ok(self.notes.keys().cloned().collect())
    }

    fn get_note(&self, title: &str) -> Result<LocalNote, DomainError> {
        self.notes
            .get(title)
            .cloned()
            .ok_or_else(|| DomainError::NoteNotFound(title.to_string()))
    }

    #[instrument(level = "debug", skip(self, note))]
    fn put_note(&mut self, title: &str, note: LocalNote) -> Result<(), DomainError> {
        let replaced = self.notes.insert(title.to_string(), note).is_some();
        debug!(replaced, "Stored note in memory");
        self.persist()?;
        info!(title, "Note added");
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_note(&mut self, title: &str) -> Result<LocalNote, DomainError> {
        let removed = self
            .notes
            .shift_remove(title)
            .ok_or_else(|| DomainError::NoteNotFound(title.to_string()))?;
        self.persist()?;
        info!(title, "Note deleted");
        Ok(removed)
    }
}
