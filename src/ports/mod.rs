// src/ports/mod.rs
pub mod console;
pub mod http;

pub use console::ConsolePresenter;
pub use http::{router, ApiError, AppState};
