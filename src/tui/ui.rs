//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::timer::SessionKind;
use crate::tui::app::{App, Screen};

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: header, body, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    match app.screen {
        Screen::Home => render_home(frame, app, chunks[1]),
        Screen::Explore => render_explore(frame, chunks[1]),
    }
    render_status_bar(frame, app, chunks[2]);
}

/// Render the header: title on the left, session pill on the right.
fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let pill_color = match app.timer.kind() {
        SessionKind::Work => Color::Green,
        SessionKind::Break => Color::Yellow,
    };

    let title = Line::from(vec![
        Span::styled(
            " Pomodoro ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("· "),
        Span::styled(
            format!("[{}] ", app.screen.title()),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!(" {} ", app.timer.kind().display_name()),
            Style::default().fg(Color::Black).bg(pill_color),
        ),
    ]);

    let header = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(header, area);
}

/// Render the timer screen: the countdown card and a progress bar.
fn render_home(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Timer card
            Constraint::Length(3), // Progress bar
        ])
        .split(area);

    let hint = if app.timer.is_running() {
        "space to pause · r to reset"
    } else {
        "space to start"
    };

    let card_lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            app.timer.format_remaining(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
    ];

    let card = Paragraph::new(card_lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        );

    frame.render_widget(card, chunks[0]);

    let gauge_color = match app.timer.kind() {
        SessionKind::Work => Color::Green,
        SessionKind::Break => Color::Yellow,
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(gauge_color))
        .ratio(app.timer.progress().clamp(0.0, 1.0))
        .label(app.timer.format_remaining());

    frame.render_widget(gauge, chunks[1]);
}

/// Render the about screen.
fn render_explore(frame: &mut Frame<'_>, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "About Pomodoro",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for paragraph in about_paragraphs() {
        lines.push(Line::from(paragraph));
        lines.push(Line::from(""));
    }

    let body = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    frame.render_widget(body, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app
        .status
        .as_deref()
        .unwrap_or("space:start/pause | r:reset | Tab:switch tab | ?:help | q:quit");

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

/// The about-page copy, shared with `tomadoro about`.
#[must_use]
pub fn about_paragraphs() -> Vec<String> {
    vec![
        "The Pomodoro Technique is a simple time-management method that breaks \
         work into intervals (traditionally 25 minutes) separated by short \
         breaks. Use the Timer tab to start a focus session; when the timer \
         finishes, take a 5-minute break."
            .to_string(),
        "Durations are configurable in ~/.tomadoro/config.yaml.".to_string(),
        "Happy focusing! 🍅".to_string(),
    ]
}
