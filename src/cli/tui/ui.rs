//! TUI rendering with ratatui

use chrono::Timelike;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};
use triage_client::AnalysisReport;
use unicode_width::UnicodeWidthStr;

use super::app::{App, Phase};

const SPINNER_FRAMES: &[&str] = &["   ", ".  ", ".. ", "..."];

/// Main draw function — renders the full TUI layout.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Min(3),    // analysis body
            Constraint::Length(5), // input (3 content rows + border)
            Constraint::Length(1), // key help
        ])
        .split(frame.area());

    draw_status_bar(frame, app, outer[0]);
    draw_body(frame, app, outer[1]);
    draw_input(frame, app, outer[2]);
    draw_help(frame, outer[3]);
}

// ── status bar ──────────────────────────────────────────────────────────

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let version = env!("CARGO_PKG_VERSION");
    let info_text = format!(
        " Triage v{} \u{00b7} AI Symptom Analysis \u{00b7} {}",
        version, app.backend_label,
    );

    let center = if app.is_loading() {
        let dots = SPINNER_FRAMES[app.loading_tick % SPINNER_FRAMES.len()];
        format!("Analyzing with AI{}", dots)
    } else {
        String::new()
    };

    let right = match (&app.phase, app.settled_at) {
        (Phase::Done(_), Some(at)) => format!("analyzed {:02}:{:02} ", at.hour(), at.minute()),
        (Phase::Failed(_), Some(at)) => format!("failed {:02}:{:02} ", at.hour(), at.minute()),
        _ => String::new(),
    };

    let mut spans = vec![Span::raw(info_text)];

    // Center/right alignment is manual: pad with spaces to the area width.
    let current_len: usize = spans.iter().map(|s| s.content.width()).sum();
    let center_len = center.width();
    let right_len = right.width();
    let width = area.width as usize;

    let total_used = current_len + center_len + right_len;
    let remaining = width.saturating_sub(total_used);

    let left_spacer = remaining / 2;
    let right_spacer = remaining.saturating_sub(left_spacer);

    if left_spacer > 0 {
        spans.push(Span::raw(" ".repeat(left_spacer)));
    }
    if !center.is_empty() {
        spans.push(Span::styled(center, Style::default().fg(Color::Yellow).bold()));
    }
    if right_spacer > 0 {
        spans.push(Span::raw(" ".repeat(right_spacer)));
    }
    if !right.is_empty() {
        spans.push(Span::styled(right, Style::default().fg(Color::Cyan)));
    }

    let line = Line::from(spans);
    let p = Paragraph::new(line).style(Style::default().bg(Color::Rgb(20, 20, 20)).fg(Color::White));
    frame.render_widget(p, area);
}

// ── body: one panel per phase ───────────────────────────────────────────

fn draw_body(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Analysis ");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let all_lines = match &app.phase {
        Phase::Idle => idle_lines(),
        Phase::Loading => loading_lines(app.loading_tick),
        Phase::Failed(message) => error_lines(message),
        Phase::Done(report) => report_lines(report),
    };

    let text = Text::from(all_lines);
    let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });

    // Scroll logic: offset counts wrapped lines from the top.
    let total_lines = paragraph.line_count(inner.width) as u16;
    let view_height = inner.height;
    let max_scroll = total_lines.saturating_sub(view_height);

    // If scroll_offset ran past the end (PageDown spam), clamp it.
    let scroll_pos = (app.scroll_offset as u16).min(max_scroll);
    app.scroll_offset = scroll_pos as usize;

    app.scrollbar_state = ScrollbarState::new(max_scroll as usize).position(scroll_pos as usize);

    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("\u{25b2}"))
            .end_symbol(Some("\u{25bc}"))
            .track_symbol(Some("\u{2502}"))
            .thumb_symbol("\u{2588}"),
        area,
        &mut app.scrollbar_state,
    );

    frame.render_widget(paragraph.scroll((scroll_pos, 0)), inner);
}

fn idle_lines() -> Vec<Line<'static>> {
    vec![
        Line::raw(""),
        Line::from(Span::styled(
            "  Describe your symptoms below and press Enter.",
            Style::default().fg(Color::Gray),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "  Results are AI-generated and not a medical diagnosis.",
            Style::default().fg(Color::DarkGray).italic(),
        )),
    ]
}

fn loading_lines(loading_tick: usize) -> Vec<Line<'static>> {
    let dots = SPINNER_FRAMES[loading_tick % SPINNER_FRAMES.len()];
    vec![
        Line::raw(""),
        Line::from(Span::styled(
            format!("  Analyzing with AI{}", dots),
            Style::default().fg(Color::Yellow).italic(),
        )),
    ]
}

fn error_lines(message: &str) -> Vec<Line<'static>> {
    vec![
        Line::raw(""),
        Line::from(vec![
            Span::styled("  \u{26a0} ", Style::default().fg(Color::Red).bold()),
            Span::styled(message.to_string(), Style::default().fg(Color::Red)),
        ]),
    ]
}

fn report_lines(report: &AnalysisReport) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    // Disclaimer banner first, exactly as the backend phrased it.
    if !report.disclaimer.is_empty() {
        lines.push(Line::raw(""));
        for (i, text) in report.disclaimer.split('\n').enumerate() {
            let lead = if i == 0 { "  \u{26a0} " } else { "    " };
            lines.push(Line::from(vec![
                Span::styled(lead, Style::default().fg(Color::Yellow).bold()),
                Span::styled(text.to_string(), Style::default().fg(Color::Yellow)),
            ]));
        }
    }
    lines.push(Line::raw(""));

    push_section(
        &mut lines,
        "Potential Condition",
        &report.disease_name,
        Color::Magenta,
    );
    push_section(
        &mut lines,
        "Suggested Actions",
        &report.suggested_treatment,
        Color::Green,
    );
    push_section(
        &mut lines,
        "Medical Reasoning",
        &report.analysis_reasoning,
        Color::Blue,
    );

    lines
}

fn push_section(lines: &mut Vec<Line<'static>>, title: &str, body: &str, accent: Color) {
    lines.push(Line::from(Span::styled(
        format!("  {}", title),
        Style::default().fg(accent).bold(),
    )));
    // A blank field stays blank under its header.
    if !body.is_empty() {
        for text in body.split('\n') {
            lines.push(Line::from(Span::raw(format!("    {}", text))));
        }
    }
    lines.push(Line::raw(""));
}

// ── input + key help ────────────────────────────────────────────────────

fn draw_input(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.is_loading() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Blue)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Describe Your Symptoms ");

    let mut textarea = app.textarea.clone();
    textarea.set_block(block);

    frame.render_widget(&textarea, area);
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let help = " Enter analyze \u{00b7} Alt+Enter newline \u{00b7} Alt+\u{2191}/\u{2193} history \u{00b7} PgUp/PgDn scroll \u{00b7} Ctrl+L reset \u{00b7} Esc quit";
    let p = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(p, area);
}
