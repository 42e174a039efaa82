//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::clock::Phase;
use crate::tui::app::App;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: header, length controls, timer, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Length controls
            Constraint::Min(6),    // Timer
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_lengths(frame, app, chunks[1]);
    render_timer(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, area: Rect) {
    let header = Paragraph::new(" 25 + 5 Clock ")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

/// Render the break and session length counters.
fn render_lengths(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_length(
        frame,
        "Break Length",
        app.clock.break_minutes(),
        "b / B",
        halves[0],
    );
    render_length(
        frame,
        "Session Length",
        app.clock.session_minutes(),
        "s / S",
        halves[1],
    );
}

/// Render a single length counter block.
fn render_length(frame: &mut Frame<'_>, label: &str, minutes: i64, keys: &str, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            minutes.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(keys, Style::default().fg(Color::DarkGray))),
    ];

    let counter = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {label} ")),
    );

    frame.render_widget(counter, area);
}

/// Render the phase label, time left, and progress gauge.
fn render_timer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let transport_icon = if app.clock.is_running() { "❚❚" } else { "▶" };

    let phase_color = match app.clock.phase() {
        Phase::Session => Color::Green,
        Phase::Break => Color::Yellow,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {transport_icon} "))
        .border_style(Style::default().fg(phase_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Phase label
            Constraint::Length(1), // Time left
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Progress gauge
        ])
        .split(inner);

    let phase = Paragraph::new(app.clock.phase().to_string())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(phase_color)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(phase, rows[0]);

    let time_left = Paragraph::new(app.clock.display_time())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(time_left, rows[1]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(phase_color).bg(Color::DarkGray))
        .ratio(app.clock.progress())
        .label("");
    frame.render_widget(gauge, rows[3]);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app
        .status
        .as_deref()
        .unwrap_or("Space:start/pause | S/s:session +/- | B/b:break +/- | r:reset | ?:help | q:quit");

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
