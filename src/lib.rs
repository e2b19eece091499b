// src/lib.rs
pub mod application;
pub mod cli;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use crate::cli::args::{Args, ServerArgs};
use crate::cli::Session;
use crate::config::StorageSettings;
use crate::infrastructure::JsonFileRepository;
use crate::ports::AppState;
use anyhow::Result;
use std::io;
use tracing::{debug, info};

/// Run the interactive notebook on stdin/stdout.
pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting tinynote with arguments");

    // Initialize infrastructure
    let repository = JsonFileRepository::open(&args.file)?;
    info!(path = ?repository.path(), notes = repository.len(), "Notebook ready");

    // Drive the session
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(repository, stdin.lock(), stdout.lock());
    session.run()
}

/// Run the HTTP note service until shutdown.
pub async fn serve(args: ServerArgs) -> Result<()> {
    debug!(
        listen = %args.listen,
        container = %args.container,
        configured = args.connection.is_some(),
        "Starting tinynote-server"
    );

    let storage = StorageSettings::new(args.connection, args.container);
    ports::http::serve(args.listen, AppState::new(storage)).await
}
