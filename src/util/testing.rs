// src/util/testing.rs

use anyhow::Result;
use async_trait::async_trait;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};
use uuid::Uuid;

use crate::application::{DocumentStore, NoteRepository};
use crate::domain::{DomainError, LocalNote};

/// In-memory notebook for testing the CLI use cases
///
/// Keeps insertion order like the file-backed notebook and counts writes so
/// tests can assert that rejected input never reaches storage.
///
/// # Examples
///
/// ```
/// use tinynote::util::testing::MockNoteRepository;
/// use tinynote::domain::LocalNote;
///
/// let mock = MockNoteRepository::builder()
///     .with_note("groceries", LocalNote::new("buy milk"))
///     .build();
/// assert_eq!(mock.put_count(), 0);
/// ```
pub struct MockNoteRepository {
    notes: IndexMap<String, LocalNote>,
    fail_writes: Option<String>,
    puts: usize,
}

impl MockNoteRepository {
    pub fn builder() -> MockNoteRepositoryBuilder {
        MockNoteRepositoryBuilder::new()
    }

    /// Number of successful `put_note` calls
    pub fn put_count(&self) -> usize {
        self.puts
    }

    fn check_writable(&self) -> Result<(), DomainError> {
        match &self.fail_writes {
            Some(reason) => Err(DomainError::StorageUnavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

impl NoteRepository for MockNoteRepository {
    fn list_titles(&self) -> Result<Vec<String>, DomainError> {
        Ok(self.notes.keys().cloned().collect())
    }

    fn get_note(&self, title: &str) -> Result<LocalNote, DomainError> {
        self.notes
            .get(title)
            .cloned()
            .ok_or_else(|| DomainError::NoteNotFound(title.to_string()))
    }

    fn put_note(&mut self, title: &str, note: LocalNote) -> Result<(), DomainError> {
        self.check_writable()?;
        self.notes.insert(title.to_string(), note);
        self.puts += 1;
        Ok(())
    }

    fn delete_note(&mut self, title: &str) -> Result<LocalNote, DomainError> {
        if !self.notes.contains_key(title) {
            return Err(DomainError::NoteNotFound(title.to_string()));
        }
        self.check_writable()?;
        self.notes
            .shift_remove(title)
            .ok_or_else(|| DomainError::NoteNotFound(title.to_string()))
    }
}

/// Builder for MockNoteRepository
pub struct MockNoteRepositoryBuilder {
    notes: IndexMap<String, LocalNote>,
    fail_writes: Option<String>,
}

impl MockNoteRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            notes: IndexMap::new(),
            fail_writes: None,
        }
    }

    /// Seed a note; seeding does not count as a write
    pub fn with_note(mut self, title: &str, note: LocalNote) -> Self {
        self.notes.insert(title.to_string(), note);
        self
    }

    /// Make every write fail with `StorageUnavailable`
    pub fn with_failing_writes(mut self, reason: &str) -> Self {
        self.fail_writes = Some(reason.to_string());
        self
    }

    pub fn build(self) -> MockNoteRepository {
        MockNoteRepository {
            notes: self.notes,
            fail_writes: self.fail_writes,
            puts: 0,
        }
    }
}

impl Default for MockNoteRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory document store for testing the service use cases
pub struct MockDocumentStore {
    documents: Mutex<HashMap<Uuid, String>>,
    failure: Option<String>,
    configured: bool,
    saves: AtomicUsize,
}

impl MockDocumentStore {
    pub fn new() -> Self {
        Self {
            documents: Mutex::new(HashMap::new()),
            failure: None,
            configured: true,
            saves: AtomicUsize::new(0),
        }
    }

    /// A store with no connection target
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new()
        }
    }

    /// A store whose every call fails with `StorageUnavailable(reason)`
    pub fn failing(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            ..Self::new()
        }
    }

    pub fn with_document(self, id: Uuid, document: &str) -> Self {
        self.documents
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(id, document.to_string());
        self
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), DomainError> {
        self.ensure_configured()?;
        match &self.failure {
            Some(reason) => Err(DomainError::StorageUnavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

impl Default for MockDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MockDocumentStore {
    fn ensure_configured(&self) -> Result<(), DomainError> {
        if self.configured {
            Ok(())
        } else {
            Err(DomainError::Unconfigured("mock store".to_string()))
        }
    }

    async fn save(&self, id: &Uuid, document: &str) -> Result<(), DomainError> {
        self.check()?;
        self.documents
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(*id, document.to_string());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn get(&self, id: &Uuid) -> Result<String, DomainError> {
        self.check()?;
        self.documents
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::NoteNotFound(id.to_string()))
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        self.check()?;
        self.documents
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NoteNotFound(id.to_string()))
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

/// Filter for test runs: `RUST_LOG` when set, otherwise debug for this crate only
fn test_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tinynote=debug"))
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "h2", "reqwest", "mio", "opendal"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = test_env_filter();

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
