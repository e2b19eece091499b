// src/util/logging.rs
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber for a binary.
///
/// `RUST_LOG` is honoured; `verbose` raises the crate's own level
/// (0 = info, 1 = debug, 2+ = trace).
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let mut filter = EnvFilter::from_default_env();
    for target in ["tinynote", "tower_http"] {
        if let Ok(directive) = format!("{target}={level}").parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
