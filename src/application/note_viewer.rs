// src/application/note_viewer.rs
use crate::domain::{DomainError, LocalNote};

/// Title-keyed notebook storage used by the CLI use cases.
pub trait NoteRepository {
    /// Titles in insertion order
    fn list_titles(&self) -> Result<Vec<String>, DomainError>;

    fn get_note(&self, title: &str) -> Result<LocalNote, DomainError>;

    /// Insert or overwrite a note, then persist the whole notebook
    fn put_note(&mut self, title: &str, note: LocalNote) -> Result<(), DomainError>;

    /// Remove a note, persist, and hand back what was removed
    fn delete_note(&mut self, title: &str) -> Result<LocalNote, DomainError>;
}

impl<R: NoteRepository + ?Sized> NoteRepository for &mut R {
    fn list_titles(&self) -> Result<Vec<String>, DomainError> {
        (**self).list_titles()
    }

    fn get_note(&self, title: &str) -> Result<LocalNote, DomainError> {
        (**self).get_note(title)
    }

    fn put_note(&mut self, title: &str, note: LocalNote) -> Result<(), DomainError> {
        (**self).put_note(title, note)
    }

    fn delete_note(&mut self, title: &str) -> Result<LocalNote, DomainError> {
        (**self).delete_note(title)
    }
}

pub struct NoteViewer<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteViewer<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn view_note(&self, title: &str) -> Result<LocalNote, DomainError> {
        self.repository.get_note(title.trim())
    }
}
