// src/ports/console.rs
use crate::domain::LocalNote;

/// Text rendering for the interactive notebook.
#[derive(Debug, Default)]
pub struct ConsolePresenter;

impl ConsolePresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render_titles(&self, titles: &[String]) -> String {
        if titles.is_empty() {
            return "No notes yet.".to_string();
        }
        titles
            .iter()
            .map(|title| format!("- {title}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render_note(&self, title: &str, note: &LocalNote) -> String {
        format!(
            "\n--- {title} ---\n{content}\nCreated: {created}\n",
            content = note.content,
            created = note.created
        )
    }

    pub fn render_added(&self, title: &str) -> String {
        format!("Note '{title}' added.")
    }

    pub fn render_deleted(&self, title: &str) -> String {
        format!("Note '{title}' deleted.")
    }

    pub fn render_not_found(&self, title: &str) -> String {
        format!("Note '{title}' not found.")
    }
}
