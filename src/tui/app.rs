//! Application state for the TUI.

use chrono::Utc;

use crate::audio::Cue;
use crate::clock::{Clock, LengthKind};

/// Application state.
pub struct App {
    /// The countdown clock.
    pub clock: Clock,
    /// The phase-transition sound cue.
    cue: Cue,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new app instance around a clock and a cue.
    #[must_use]
    pub fn new(clock: Clock, cue: Cue) -> Self {
        Self {
            clock,
            cue,
            status: Some("Press ? for help".to_string()),
            should_quit: false,
        }
    }

    /// Start or pause the countdown.
    pub fn toggle(&mut self) {
        self.clock.toggle_at(Utc::now());
        self.status = None;
    }

    /// Restore the default state and silence the cue.
    pub fn reset(&mut self) {
        self.clock.reset();
        self.cue.reset();
        self.status = Some("Reset".to_string());
    }

    /// Bump a length up by one minute.
    pub fn increment(&mut self, kind: LengthKind) {
        self.clock.increment(kind);
    }

    /// Bump a length down by one minute.
    pub fn decrement(&mut self, kind: LengthKind) {
        self.clock.decrement(kind);
    }

    /// Advance the countdown by one tick.
    ///
    /// On expiry the phase has already flipped and the new countdown is
    /// running; this fires the cue once and reports any playback failure
    /// on the status line without touching the clock.
    pub fn tick(&mut self) {
        if let Some(expiry) = self.clock.tick_at(Utc::now()) {
            self.status = Some(format!("{} started", expiry.into));
            if let Err(e) = self.cue.play() {
                self.status = Some(format!("Sound unavailable: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Phase;

    fn test_app() -> App {
        App::new(Clock::default(), Cue::disabled())
    }

    #[test]
    fn test_toggle_starts_and_pauses() {
        let mut app = test_app();
        assert!(!app.clock.is_running());

        app.toggle();
        assert!(app.clock.is_running());

        app.toggle();
        assert!(!app.clock.is_running());
    }

    #[test]
    fn test_reset_restores_defaults_and_status() {
        let mut app = test_app();
        app.increment(LengthKind::Session);
        app.toggle();

        app.reset();
        assert!(app.clock.is_idle());
        assert_eq!(app.clock.phase(), Phase::Session);
        assert_eq!(app.clock.session_minutes(), 25);
        assert_eq!(app.clock.break_minutes(), 5);
        assert_eq!(app.status.as_deref(), Some("Reset"));
    }

    #[test]
    fn test_length_keys_adjust_counters() {
        let mut app = test_app();
        app.increment(LengthKind::Break);
        app.decrement(LengthKind::Session);

        assert_eq!(app.clock.break_minutes(), 6);
        assert_eq!(app.clock.session_minutes(), 24);
    }

    #[test]
    fn test_tick_while_idle_changes_nothing() {
        let mut app = test_app();
        app.tick();
        assert!(app.clock.is_idle());
        assert_eq!(app.clock.display_time(), "25:00");
    }
}
