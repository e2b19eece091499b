// src/util/mod.rs
pub mod logging;
pub mod testing;
pub mod time;
