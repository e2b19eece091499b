// src/application/note_adder.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, LocalNote};
use tracing::debug;

pub struct NoteAdder<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteAdder<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Store `content` under `title`, silently replacing an existing note.
    ///
    /// A blank title is rejected before anything is written.
    pub fn add_note(&mut self, title: &str, content: &str) -> Result<LocalNote, DomainError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DomainError::ValidationFailed(
                "Title cannot be empty.".to_string(),
            ));
        }

        let note = LocalNote::new(content.trim());
        debug!(title, created = %note.created, "Adding note");
        self.repository.put_note(title, note.clone())?;
        Ok(note)
    }
}
