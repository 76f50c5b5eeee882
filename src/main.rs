//! zhconvert CLI entry point.
//!
//! Initializes logging, runs the conversion and maps failures to the
//! process exit status.

use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Parse CLI arguments first to get log_level
    let cli = zhconvert::cli::parse_cli();

    // Priority: RUST_LOG env var > --log-level CLI arg
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)))
        .try_init()
        .context("failed to initialize logging")?;

    match zhconvert::cli::run_with_cli(cli).await {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            tracing::debug!(error = ?err, "Conversion aborted");
            eprintln!("Error: {err}");
            Ok(ExitCode::from(err.exit_code()))
        }
    }
}
