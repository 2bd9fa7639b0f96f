//! Binary crate for the `capitals` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Wiring the collaborator clients to the poller
//! - Signal handling and process exit codes

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
