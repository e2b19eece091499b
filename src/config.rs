// src/config.rs
use crate::constants::DEFAULT_CONTAINER;

/// Where the service keeps its note documents.
///
/// `connection` stays optional: the service starts without it and reports
/// `Unconfigured` on every storage call until it is provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageSettings {
    pub connection: Option<String>,
    pub container: String,
}

impl StorageSettings {
    pub fn new(connection: Option<String>, container: impl Into<String>) -> Self {
        let container = container.into();
        let container = if container.trim().is_empty() {
            DEFAULT_CONTAINER.to_string()
        } else {
            container.trim().to_string()
        };
        Self {
            connection: connection.filter(|c| !c.trim().is_empty()),
            container,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.connection.is_some()
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self::new(None, DEFAULT_CONTAINER)
    }
}
