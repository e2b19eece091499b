// src/constants.rs
//
// Application-wide constants shared by the service and the notebook CLI.

/// Default notebook file, relative to the working directory.
///
/// Used in: `cli/args.rs`
pub const NOTES_FILE: &str = "notes.json";

/// Container used when `NOTES_CONTAINER` is not set.
///
/// Used in: `config.rs`, `cli/args.rs`
pub const DEFAULT_CONTAINER: &str = "notes";

/// Suffix appended to a note id to form its blob key (`{id}.json`).
///
/// Used in: `infrastructure/blob.rs`
pub const DOCUMENT_SUFFIX: &str = ".json";

/// Address the service binds to when none is given.
///
/// 7071 is the port the serverless functions host listens on locally, so
/// existing client configuration keeps working.
///
/// Used in: `cli/args.rs`
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:7071";

/// Environment variable holding the storage connection string.
pub const ENV_STORAGE_CONNECTION: &str = "NOTES_STORAGE_CONNECTION";

/// Environment variable holding the container name.
pub const ENV_CONTAINER: &str = "NOTES_CONTAINER";

/// Environment variable holding the listen address.
pub const ENV_LISTEN: &str = "TINYNOTE_LISTEN";

/// Blob endpoint of the local storage emulator (`UseDevelopmentStorage=true`).
///
/// Used in: `infrastructure/connection.rs`
pub const DEV_STORAGE_ENDPOINT: &str = "http://127.0.0.1:10000/devstoreaccount1";

/// Account name of the local storage emulator.
pub const DEV_STORAGE_ACCOUNT: &str = "devstoreaccount1";

/// Publicly documented account key of the local storage emulator.
pub const DEV_STORAGE_KEY: &str =
    "Eby8vdM02xNOcqFlqUwJPLlmEtlCDXJ1OUzFT50uSRZ6IFsuFq2UVErCz4I6tq/K1SZFPTOtr/KBHBeksoGMGw==";
