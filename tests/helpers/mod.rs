use anyhow::{Context, Result};
use std::path::PathBuf;
use tempfile::TempDir;
use tinynote::config::StorageSettings;
use tinynote::infrastructure::{BlobNoteStore, JsonFileRepository};

/// Test fixture for a notebook file in a temporary directory
#[allow(dead_code)]
pub struct TestNotebook {
    _temp_dir: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestNotebook {
    /// Empty directory; the notebook file does not exist yet
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let path = temp_dir.path().join("notes.json");
        Ok(Self {
            _temp_dir: temp_dir,
            path,
        })
    }

    /// Notebook file pre-filled with `contents`
    pub fn with_contents(contents: &str) -> Result<Self> {
        let notebook = Self::new()?;
        std::fs::write(&notebook.path, contents).context("Failed to write notebook fixture")?;
        Ok(notebook)
    }

    pub fn open_repository(&self) -> Result<JsonFileRepository> {
        JsonFileRepository::open(&self.path)
    }

    pub fn read_json(&self) -> Result<serde_json::Value> {
        let raw = std::fs::read_to_string(&self.path).context("Failed to read notebook")?;
        serde_json::from_str(&raw).context("Notebook is not JSON")
    }
}

/// Test fixture for a blob container on the local filesystem
#[allow(dead_code)]
pub struct TestContainer {
    temp_dir: TempDir,
    pub settings: StorageSettings,
}

#[allow(dead_code)]
impl TestContainer {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let connection = format!("file://{}", temp_dir.path().display());
        Ok(Self {
            settings: StorageSettings::new(Some(connection), "notes"),
            temp_dir,
        })
    }

    pub fn store(&self) -> BlobNoteStore {
        BlobNoteStore::new(self.settings.clone())
    }

    /// Where a blob lands on disk
    pub fn blob_path(&self, blob_name: &str) -> PathBuf {
        self.temp_dir.path().join("notes").join(blob_name)
    }

    /// Number of blobs in the container
    pub fn blob_count(&self) -> usize {
        std::fs::read_dir(self.temp_dir.path().join("notes"))
            .map(|entries| entries.count())
            .unwrap_or(0)
    }
}

/// Settings with no connection string at all
#[allow(dead_code)]
pub fn unconfigured_settings() -> StorageSettings {
    StorageSettings::new(None, "notes")
}
