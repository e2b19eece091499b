// src/main.rs
use anyhow::Result;
use clap::Parser;
use tinynote::cli::args::Args;
use tinynote::util::logging::init_logging;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging based on verbosity
    init_logging(args.verbose);

    tinynote::run(args)
}
