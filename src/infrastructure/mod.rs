// src/infrastructure/mod.rs
pub mod blob;
pub mod connection;
pub mod json_file;

pub use blob::BlobNoteStore;
pub use connection::ConnectionTarget;
pub use json_file::JsonFileRepository;
