// src/cli/mod.rs
pub mod args;
pub mod session;

pub use session::Session;
