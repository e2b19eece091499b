// src/cli/args.rs
use crate::constants::{
    DEFAULT_CONTAINER, DEFAULT_LISTEN_ADDR, ENV_CONTAINER, ENV_LISTEN, ENV_STORAGE_CONNECTION,
    NOTES_FILE,
};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Interactive notebook kept in a local JSON file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
pub struct Args {
    /// Notebook file (created on first write)
    #[arg(short, long, value_name = "FILE", default_value = NOTES_FILE)]
    pub file: PathBuf,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// HTTP note service backed by blob storage
#[derive(Parser, Debug)]
#[command(name = "tinynote-server", version, about, long_about = None)]
pub struct ServerArgs {
    /// Address to listen on
    #[arg(short, long, value_name = "ADDR", env = ENV_LISTEN, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen: SocketAddr,

    /// Storage connection string (account connection string, UseDevelopmentStorage=true, or file:///dir)
    #[arg(short, long, value_name = "CONNECTION", env = ENV_STORAGE_CONNECTION, hide_env_values = true)]
    pub connection: Option<String>,

    /// Container holding the note documents
    #[arg(long, value_name = "NAME", env = ENV_CONTAINER, default_value = DEFAULT_CONTAINER)]
    pub container: String,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
