//! CLI module for Triage
//!
//! Provides the commands:
//! - `tui` (default): Full-screen symptom analysis interface
//! - `analyze`: One-shot analysis for scripting
//! - `doctor`: Backend connectivity diagnostics

use clap::{Parser, Subcommand};
use std::time::Duration;
use triage_client::BackendConfig;

pub mod analyze;
pub mod doctor;
pub mod tui;

/// Triage CLI
#[derive(Parser, Debug)]
#[command(name = "triage")]
#[command(about = "AI symptom analysis from the terminal")]
#[command(version)]
pub struct Cli {
    /// Backend base URL (overrides TRIAGE_BACKEND_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub backend_url: Option<String>,

    /// Request timeout in seconds (overrides TRIAGE_TIMEOUT_SECS)
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the full-screen analysis interface (default)
    Tui,
    /// Analyze a symptom description once and print the report
    Analyze {
        /// Free-text symptom description
        symptoms: String,
        /// Print the raw JSON report instead of labelled sections
        #[arg(long)]
        json: bool,
    },
    /// Check that the analysis backend is reachable
    Doctor,
}

impl Cli {
    /// Returns true when this invocation opens the full-screen interface.
    pub fn wants_tui(&self) -> bool {
        matches!(self.command, None | Some(Commands::Tui))
    }

    /// Resolve the backend configuration: flags win over environment
    /// variables, which win over defaults.
    pub fn backend_config(&self) -> BackendConfig {
        let mut config = BackendConfig::from_env();
        if let Some(url) = &self.backend_url {
            config = config.with_base_url(url);
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }
}

/// Run the CLI command
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.backend_config();

    match cli.command {
        Some(Commands::Analyze { symptoms, json }) => analyze::run(config, &symptoms, json).await,
        Some(Commands::Doctor) => doctor::run(config).await,
        Some(Commands::Tui) | None => tui::run(config).await,
    }
}
