//! TUI application state management

use chrono::{DateTime, Local};
use ratatui::style::Style;
use ratatui::widgets::ScrollbarState;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn};
use triage_client::{AnalysisClient, AnalysisReport};
use tui_textarea::{CursorMove, TextArea};

/// Maximum number of input history entries retained.
const MAX_HISTORY: usize = 50;

/// Lifecycle of the current analysis.
///
/// Exactly one of these holds at any time; a settled report or error can
/// only be replaced by a fresh submission or a reset.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// Nothing submitted yet, or the form was reset.
    Idle,
    /// A request is in flight.
    Loading,
    /// The latest request settled with a report.
    Done(AnalysisReport),
    /// The latest request settled with the user-facing failure message.
    Failed(String),
}

/// Settled result of one spawned analysis request.
#[derive(Debug)]
pub struct AnalysisOutcome {
    /// Token of the submission this outcome answers.
    pub seq: u64,
    /// What the backend said.
    pub result: triage_client::Result<AnalysisReport>,
}

/// Main application state.
pub struct App {
    pub textarea: TextArea<'static>,
    pub phase: Phase,
    pub backend_label: String,
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
    pub should_quit: bool,
    pub loading_tick: usize,
    /// When the latest request settled, for the status bar.
    pub settled_at: Option<DateTime<Local>>,
    /// Previous submissions for history navigation.
    input_history: Vec<String>,
    /// Current position in input history (None = new input).
    history_index: Option<usize>,
    /// Monotonically increasing submission token. Only the outcome carrying
    /// the current value may touch `phase`; everything else is stale.
    request_seq: u64,
    client: Arc<AnalysisClient>,
    /// Sender side lives in App so `submit` can clone it into spawned tasks.
    outcome_tx: mpsc::UnboundedSender<AnalysisOutcome>,
    /// Receiver side polled each frame by the event loop.
    pub outcome_rx: mpsc::UnboundedReceiver<AnalysisOutcome>,
}

impl App {
    pub fn new(client: Arc<AnalysisClient>, backend_label: String) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        Self {
            textarea: new_textarea(),
            phase: Phase::Idle,
            backend_label,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::default(),
            should_quit: false,
            loading_tick: 0,
            settled_at: None,
            input_history: Vec::new(),
            history_index: None,
            request_seq: 0,
            client,
            outcome_tx: tx,
            outcome_rx: rx,
        }
    }

    // ── helpers ──────────────────────────────────────────────────────────

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    /// Returns true if the textarea holds nothing but whitespace.
    pub fn is_input_empty(&self) -> bool {
        self.textarea
            .lines()
            .iter()
            .all(|line| line.trim().is_empty())
    }

    /// Returns true if there are previous submissions in history.
    pub fn has_history(&self) -> bool {
        !self.input_history.is_empty()
    }

    // ── input handling ──────────────────────────────────────────────────

    /// Navigate to the previous entry in input history.
    pub fn history_up(&mut self) {
        if self.input_history.is_empty() {
            return;
        }
        let idx = match self.history_index {
            None => self.input_history.len() - 1,
            Some(0) => return,
            Some(i) => i - 1,
        };
        self.history_index = Some(idx);
        let text = self.input_history[idx].clone();
        self.set_input(&text);
    }

    /// Navigate to the next entry in input history, or clear if at the end.
    pub fn history_down(&mut self) {
        match self.history_index {
            None => {}
            Some(i) if i >= self.input_history.len() - 1 => {
                self.history_index = None;
                self.textarea = new_textarea();
            }
            Some(i) => {
                self.history_index = Some(i + 1);
                let text = self.input_history[i + 1].clone();
                self.set_input(&text);
            }
        }
    }

    fn set_input(&mut self, text: &str) {
        self.textarea = TextArea::new(text.split('\n').map(str::to_string).collect());
        self.textarea.set_cursor_line_style(Style::default());
        self.textarea.move_cursor(CursorMove::End);
    }

    /// Scroll the report toward the top.
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll the report toward the bottom.
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    // ── submit ──────────────────────────────────────────────────────────

    /// Submit the current symptom description for analysis.
    ///
    /// Empty or whitespace-only input is a silent no-op. The text stays in
    /// the box so it can be edited and resubmitted; a fresh submission
    /// always supersedes an in-flight one.
    pub fn submit(&mut self) {
        let text = self.textarea.lines().join("\n").trim().to_string();
        if text.is_empty() {
            return;
        }

        // Store in history (cap at MAX_HISTORY)
        self.input_history.push(text.clone());
        if self.input_history.len() > MAX_HISTORY {
            self.input_history.remove(0);
        }
        self.history_index = None;

        self.request_seq += 1;
        let seq = self.request_seq;

        self.phase = Phase::Loading;
        self.loading_tick = 0;
        self.scroll_offset = 0;

        let client = self.client.clone();
        let tx = self.outcome_tx.clone();

        tokio::spawn(async move {
            let result = client.analyze(&text).await;
            let _ = tx.send(AnalysisOutcome { seq, result });
        });
    }

    /// Called every tick to drain settled analysis outcomes.
    pub fn poll_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    /// Apply one settled outcome, dropping it if its token is stale.
    pub fn apply_outcome(&mut self, outcome: AnalysisOutcome) {
        if outcome.seq != self.request_seq {
            debug!(
                seq = outcome.seq,
                current = self.request_seq,
                "dropping stale analysis outcome"
            );
            return;
        }

        self.phase = match outcome.result {
            Ok(report) => Phase::Done(report),
            Err(e) => {
                warn!("analysis request failed: {}", e);
                Phase::Failed(e.user_message().to_string())
            }
        };
        self.settled_at = Some(Local::now());
        self.scroll_offset = 0;
    }

    /// Reset the form to idle. Advancing the token means an in-flight
    /// reply can no longer resurrect a cleared screen.
    pub fn reset(&mut self) {
        self.request_seq += 1;
        self.phase = Phase::Idle;
        self.textarea = new_textarea();
        self.scroll_offset = 0;
        self.history_index = None;
    }

    /// Advance the loading spinner animation counter.
    pub fn tick(&mut self) {
        if self.is_loading() {
            self.loading_tick = self.loading_tick.wrapping_add(1);
        }
    }
}

/// Create a fresh TextArea with default styling.
fn new_textarea() -> TextArea<'static> {
    let mut ta = TextArea::default();
    ta.set_cursor_line_style(Style::default());
    ta.set_placeholder_text(
        "e.g., I have a sharp pain in my chest, difficulty breathing, and sweating...",
    );
    ta.set_max_histories(50);
    ta
}
