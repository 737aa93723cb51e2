//! Triage - AI Symptom Analysis
//!
//! CLI entry point for the Triage terminal client.

#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let cli = cli::Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "triage=info,triage_client=info".into());

    // The TUI owns the terminal, so its logs go to a file instead of
    // being painted over the interface. The guard must outlive main.
    let _appender_guard = if cli.wants_tui() {
        let log_dir = dirs::home_dir()
            .map(|home| home.join(".triage"))
            .unwrap_or_else(|| std::path::PathBuf::from(".triage"));
        std::fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

        let appender = tracing_appender::rolling::never(log_dir, "triage.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false),
            )
            .init();
        Some(guard)
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
        None
    };

    cli::run(cli).await
}
