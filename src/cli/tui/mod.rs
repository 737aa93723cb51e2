//! TUI symptom-analysis interface
//!
//! Provides a full-screen terminal UI using ratatui + crossterm.
//! Talks to the analysis backend directly through triage-client.

pub mod app;
pub mod event;
pub mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use triage_client::{AnalysisClient, BackendConfig};

use app::App;

/// Run the TUI symptom-analysis interface.
pub async fn run(config: BackendConfig) -> Result<()> {
    let backend_label = config.base_url.clone();
    let client = Arc::new(AnalysisClient::new(config).context("Failed to build HTTP client")?);

    info!("TUI: backend = {}", backend_label);

    // ── Terminal setup ──────────────────────────────────────────────

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(client, backend_label);

    // ── Main loop ───────────────────────────────────────────────────

    let tick_rate = Duration::from_millis(200);

    let run_result: Result<()> = loop {
        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        if let Err(e) = event::handle_events(&mut app, tick_rate) {
            break Err(e);
        }

        if app.should_quit {
            break Ok(());
        }
    };

    // ── Restore terminal ────────────────────────────────────────────

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    run_result
}
