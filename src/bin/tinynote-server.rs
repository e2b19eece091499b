// src/bin/tinynote-server.rs
use anyhow::Result;
use clap::Parser;
use tinynote::cli::args::ServerArgs;
use tinynote::util::logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let args = ServerArgs::parse();

    // Initialize logging based on verbosity
    init_logging(args.verbose);

    tinynote::serve(args).await
}
