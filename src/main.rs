// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

fn main() {
    // Log level is configurable via RUST_LOG; logs go to stderr so stdout
    // stays clean for knot vectors and JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    if let Err(e) = cli::run(cli) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
