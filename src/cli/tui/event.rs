//! Crossterm event handling for the TUI

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use std::time::Duration;

use super::app::App;

/// Mouse scroll lines per event.
const MOUSE_SCROLL_LINES: u32 = 3;

/// Poll crossterm events and update app state.
pub fn handle_events(app: &mut App, timeout: Duration) -> Result<()> {
    // Drain any settled analysis outcomes first.
    app.poll_outcomes();

    if event::poll(timeout)? {
        match event::read()? {
            Event::Key(key) => handle_key(app, key),
            Event::Mouse(mouse) => handle_mouse(app, mouse),
            _ => {}
        }
    }

    // Advance the spinner.
    app.tick();

    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // ── Quit ────────────────────────────────────────────────
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (_, KeyCode::Esc) => {
            app.should_quit = true;
        }

        // ── Reset the form ──────────────────────────────────────
        (KeyModifiers::CONTROL, KeyCode::Char('l')) => app.reset(),

        // ── Submit / newline ────────────────────────────────────
        (KeyModifiers::ALT, KeyCode::Enter) => {
            app.textarea.insert_newline();
        }
        (_, KeyCode::Enter) => app.submit(),

        // ── Input history (Up/Down edit the input when non-empty) ──
        (KeyModifiers::ALT, KeyCode::Up) => app.history_up(),
        (KeyModifiers::ALT, KeyCode::Down) => app.history_down(),
        (_, KeyCode::Up) if app.is_input_empty() && app.has_history() => app.history_up(),
        (_, KeyCode::Down) if app.is_input_empty() && app.has_history() => app.history_down(),

        // ── Report scrolling ────────────────────────────────────
        (_, KeyCode::PageUp) => {
            for _ in 0..10 {
                app.scroll_up();
            }
        }
        (_, KeyCode::PageDown) => {
            for _ in 0..10 {
                app.scroll_down();
            }
        }

        // ── Delegate everything else to textarea ────────────────
        _ => {
            app.textarea.input(Event::Key(key));
        }
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            for _ in 0..MOUSE_SCROLL_LINES {
                app.scroll_up();
            }
        }
        MouseEventKind::ScrollDown => {
            for _ in 0..MOUSE_SCROLL_LINES {
                app.scroll_down();
            }
        }
        _ => {}
    }
}
