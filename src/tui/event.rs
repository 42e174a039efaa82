//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};

use crate::clock::LengthKind;
use crate::error::PomoclockError;
use crate::tui::app::App;

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or pause the countdown.
    Toggle,
    /// Reset the clock to its defaults.
    Reset,
    /// Increase a length by one minute.
    Increment(LengthKind),
    /// Decrease a length by one minute.
    Decrement(LengthKind),
}

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App) -> Result<Option<Action>, PomoclockError> {
    // Poll for events with a small timeout so the tick loop keeps going
    if event::poll(Duration::from_millis(100))
        .map_err(|e| PomoclockError::Terminal(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) = event::read()
            .map_err(|e| PomoclockError::Terminal(format!("Event read failed: {e}")))?
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

                // Start / pause
                KeyCode::Char(' ') | KeyCode::Enter => {
                    return Ok(Some(Action::Toggle));
                }

                // Reset
                KeyCode::Char('r') => {
                    return Ok(Some(Action::Reset));
                }

                // Length controls
                KeyCode::Char('S') => {
                    return Ok(Some(Action::Increment(LengthKind::Session)));
                }
                KeyCode::Char('s') => {
                    return Ok(Some(Action::Decrement(LengthKind::Session)));
                }
                KeyCode::Char('B') => {
                    return Ok(Some(Action::Increment(LengthKind::Break)));
                }
                KeyCode::Char('b') => {
                    return Ok(Some(Action::Decrement(LengthKind::Break)));
                }

                // Help
                KeyCode::Char('?') => {
                    app.status = Some(
                        "Space:start/pause | S/s:session +/- | B/b:break +/- | r:reset | q:quit"
                            .to_string(),
                    );
                }

                _ => {}
            }
        }
    }

    Ok(None)
}
