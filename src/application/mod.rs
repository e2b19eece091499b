// src/application/mod.rs
pub mod note_adder;
pub mod note_creator;
pub mod note_deleter;
pub mod note_fetcher;
pub mod note_lister;
pub mod note_remover;
pub mod note_viewer;

pub use note_adder::NoteAdder;
pub use note_creator::{DocumentStore, NoteCreator};
pub use note_deleter::NoteDeleter;
pub use note_fetcher::NoteFetcher;
pub use note_lister::NoteLister;
pub use note_remover::NoteRemover;
pub use note_viewer::{NoteRepository, NoteViewer};
