// src/application/note_deleter.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, LocalNote};

pub struct NoteDeleter<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteDeleter<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Delete a note by title and return the removed note
    pub fn delete_note(&mut self, title: &str) -> Result<LocalNote, DomainError> {
        self.repository.delete_note(title.trim())
    }
}
