// src/application/note_lister.rs
use crate::application::NoteRepository;
use crate::domain::DomainError;

pub struct NoteLister<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteLister<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// List all note titles in the order they were first added
    pub fn list_titles(&self) -> Result<Vec<String>, DomainError> {
        self.repository.list_titles()
    }
}
