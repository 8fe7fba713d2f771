//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};

use crate::error::TomadoroError;
use crate::tui::app::{App, Screen};

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or pause the countdown.
    ToggleTimer,
    /// Reset to a fresh work session.
    ResetTimer,
}

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed. Blocks for at
/// most 100 ms so the caller can keep draining the ticker.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App) -> Result<Option<Action>, TomadoroError> {
    // Poll for events with a small timeout
    if event::poll(Duration::from_millis(100))
        .map_err(|e| TomadoroError::Terminal(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) = event::read()
            .map_err(|e| TomadoroError::Terminal(format!("Event read failed: {e}")))?
        {
            // Handle Ctrl+C
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(Some(Action::Quit));
            }

            match key.code {
                // Quit
                KeyCode::Char('q') | KeyCode::Esc => {
                    return Ok(Some(Action::Quit));
                }

                // Timer controls
                KeyCode::Char(' ') => {
                    return Ok(Some(Action::ToggleTimer));
                }
                KeyCode::Char('r') => {
                    return Ok(Some(Action::ResetTimer));
                }

                // Tab switching
                KeyCode::Tab => {
                    app.next_screen();
                }
                KeyCode::Char('1') => {
                    app.show_screen(Screen::Home);
                }
                KeyCode::Char('2') | KeyCode::Char('e') => {
                    app.show_screen(Screen::Explore);
                }

                // Help
                KeyCode::Char('?') => {
                    app.status = Some(
                        "space:start/pause | r:reset | Tab:switch tab | q:quit".to_string(),
                    );
                }

                _ => {}
            }
        }
    }

    Ok(None)
}
