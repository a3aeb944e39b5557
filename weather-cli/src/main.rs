//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Logging setup
//! - Parsing CLI arguments
//! - Human-friendly output formatting

use clap::Parser;
use tracing::Level;

mod cli;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout is reserved for the weather block
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
