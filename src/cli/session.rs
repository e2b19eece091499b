// src/cli/session.rs
use crate::application::{NoteAdder, NoteDeleter, NoteLister, NoteRepository, NoteViewer};
use crate::domain::DomainError;
use crate::ports::ConsolePresenter;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

const MENU: &str = "\nOptions: (l)ist, (a)dd, (v)iew, (d)elete, (q)uit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    List,
    Add,
    View,
    Delete,
    Quit,
    Invalid,
}

impl Choice {
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "l" => Self::List,
            "a" => Self::Add,
            "v" => Self::View,
            "d" => Self::Delete,
            "q" => Self::Quit,
            _ => Self::Invalid,
        }
    }
}

/// Prompt loop over a notebook.
///
/// Generic over its input and output so it can be driven by a script.
/// Not-found and validation outcomes are reported to the user; storage
/// failures end the session with an error.
pub struct Session<R: NoteRepository, I: BufRead, O: Write> {
    repository: R,
    presenter: ConsolePresenter,
    input: I,
    output: O,
}

impl<R: NoteRepository, I: BufRead, O: Write> Session<R, I, O> {
    pub fn new(repository: R, input: I, output: O) -> Self {
        Self {
            repository,
            presenter: ConsolePresenter::new(),
            input,
            output,
        }
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        self.say("Welcome to TinyNote!")?;

        loop {
            self.say(MENU)?;
            let Some(choice) = self.prompt("Choose: ")? else {
                debug!("Input closed, leaving session");
                break;
            };

            match Choice::parse(&choice) {
                Choice::List => self.list()?,
                Choice::Add => self.add()?,
                Choice::View => self.view()?,
                Choice::Delete => self.delete()?,
                Choice::Quit => {
                    self.say("Goodbye!")?;
                    break;
                }
                Choice::Invalid => self.say("Invalid choice.")?,
            }
        }

        Ok(())
    }

    fn list(&mut self) -> Result<()> {
        let titles = NoteLister::new(&mut self.repository).list_titles()?;
        let rendered = self.presenter.render_titles(&titles);
        self.say(&rendered)
    }

    #[instrument(level = "debug", skip(self))]
    fn add(&mut self) -> Result<()> {
        let Some(title) = self.prompt("Note title: ")? else {
            return Ok(());
        };
        if title.is_empty() {
            return self.say("Title cannot be empty.");
        }
        let Some(content) = self.prompt("Note content: ")? else {
            return Ok(());
        };

        let added = NoteAdder::new(&mut self.repository).add_note(&title, &content);
        match added {
            Ok(_) => {
                let rendered = self.presenter.render_added(&title);
                self.say(&rendered)
            }
            Err(DomainError::ValidationFailed(msg)) => self.say(&msg),
            Err(e) => Err(e).context("Failed to save notebook"),
        }
    }

    #[instrument(level = "debug", skip(self))]
    fn view(&mut self) -> Result<()> {
        let Some(title) = self.prompt("Note title to view: ")? else {
            return Ok(());
        };

        let found = NoteViewer::new(&mut self.repository).view_note(&title);
        let rendered = match found {
            Ok(note) => self.presenter.render_note(&title, &note),
            Err(DomainError::NoteNotFound(_)) => self.presenter.render_not_found(&title),
            Err(e) => return Err(e).context("Failed to read notebook"),
        };
        self.say(&rendered)
    }

    #[instrument(level = "debug", skip(self))]
    fn delete(&mut self) -> Result<()> {
        let Some(title) = self.prompt("Note title to delete: ")? else {
            return Ok(());
        };

        let deleted = NoteDeleter::new(&mut self.repository).delete_note(&title);
        let rendered = match deleted {
            Ok(_) => self.presenter.render_deleted(&title),
            Err(DomainError::NoteNotFound(_)) => self.presenter.render_not_found(&title),
            Err(e) => return Err(e).context("Failed to save notebook"),
        };
        self.say(&rendered)
    }

    /// Print `label` and read one trimmed line; `None` once input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}").context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}").context("Failed to write output")
    }
}
