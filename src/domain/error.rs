// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Note not found: {0}")]
    NoteNotFound(String),
    #[error("{0}")]
    ValidationFailed(String),
    #[error("Invalid JSON")]
    InvalidJson,
    #[error("Storage not configured: {0}")]
    Unconfigured(String),
    #[error("Storage error: {0}")]
    StorageUnavailable(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}
