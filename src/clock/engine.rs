//! The countdown timer engine.
//!
//! A deadline-based state machine that alternates between session and
//! break phases. Remaining time is always derived from the current
//! deadline and the instant passed in by the caller; the engine never
//! reads the wall clock itself, which keeps every transition
//! deterministic under test.

use chrono::{DateTime, Duration, Utc};

use crate::clock::length::{LengthKind, Lengths};

/// Which interval the countdown currently represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A work session.
    Session,
    /// A break.
    Break,
}

impl Phase {
    /// The phase the clock switches to on expiry.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Session => Self::Break,
            Self::Break => Self::Session,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Session => write!(f, "Session"),
            Self::Break => write!(f, "Break"),
        }
    }
}

/// Countdown state. Each variant owns exactly the data valid in it:
/// a deadline exists only while running, a captured remaining duration
/// only while paused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    /// Nothing started; the display previews the current phase's length.
    Idle,
    /// Counting down toward `deadline`. `shown` is the remaining time
    /// observed at the most recent transition or tick.
    Running {
        /// Absolute instant at which the countdown reaches zero.
        deadline: DateTime<Utc>,
        /// Remaining time as of the last tick, clamped at zero.
        shown: Duration,
    },
    /// Paused mid-countdown. `remaining` was captured at the moment
    /// pause was pressed, not recomputed later from the stale deadline.
    Paused {
        /// Time left when the clock was paused.
        remaining: Duration,
    },
}

/// Event returned by a tick that crossed zero.
///
/// The caller consumes this to fire the audio cue exactly once per
/// phase transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiry {
    /// The phase the clock switched into.
    pub into: Phase,
}

/// The 25+5 countdown clock.
#[derive(Debug, Clone)]
pub struct Clock {
    lengths: Lengths,
    phase: Phase,
    state: ClockState,
}

impl Clock {
    /// Create a clock with the given initial lengths, idle in the
    /// session phase.
    #[must_use]
    pub fn new(session_minutes: i64, break_minutes: i64) -> Self {
        Self {
            lengths: Lengths::new(session_minutes, break_minutes),
            phase: Phase::Session,
            state: ClockState::Idle,
        }
    }

    /// Toggle between counting and paused, as of `now`.
    ///
    /// From idle, starts a fresh countdown over the current phase's
    /// length. From paused, resumes from the captured remaining time.
    /// From running, pauses and captures the remaining time.
    pub fn toggle_at(&mut self, now: DateTime<Utc>) {
        self.state = match self.state {
            ClockState::Idle => {
                let length = Duration::minutes(self.lengths.for_phase(self.phase));
                ClockState::Running {
                    deadline: now + length,
                    shown: length,
                }
            }
            ClockState::Paused { remaining } => ClockState::Running {
                deadline: now + remaining,
                shown: remaining,
            },
            ClockState::Running { deadline, .. } => ClockState::Paused {
                remaining: (deadline - now).max(Duration::zero()),
            },
        };
    }

    /// Recompute remaining time as of `now`.
    ///
    /// Does nothing unless running. When the deadline has passed, flips
    /// the phase, starts the new phase's countdown immediately, and
    /// returns the expiry event; the clock keeps running across the
    /// transition.
    pub fn tick_at(&mut self, now: DateTime<Utc>) -> Option<Expiry> {
        let ClockState::Running { deadline, .. } = self.state else {
            return None;
        };

        let remaining = deadline - now;
        if remaining > Duration::zero() {
            self.state = ClockState::Running {
                deadline,
                shown: remaining,
            };
            return None;
        }

        self.phase = self.phase.flip();
        let length = Duration::minutes(self.lengths.for_phase(self.phase));
        self.state = ClockState::Running {
            deadline: now + length,
            shown: length,
        };
        Some(Expiry { into: self.phase })
    }

    /// Restore the default state: session phase, 25/5 lengths, idle.
    pub fn reset(&mut self) {
        self.lengths = Lengths::default();
        self.phase = Phase::Session;
        self.state = ClockState::Idle;
    }

    /// Increase a length by one minute; a no-op at 60.
    pub fn increment(&mut self, kind: LengthKind) {
        self.lengths.increment(kind);
    }

    /// Decrease a length by one minute; a no-op at 1.
    pub fn decrement(&mut self, kind: LengthKind) {
        self.lengths.decrement(kind);
    }

    /// The current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> ClockState {
        self.state
    }

    /// Whether the countdown is actively ticking.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, ClockState::Running { .. })
    }

    /// Whether nothing has been started (fresh or just reset).
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self.state, ClockState::Idle)
    }

    /// The break length in minutes.
    #[must_use]
    pub const fn break_minutes(&self) -> i64 {
        self.lengths.get(LengthKind::Break)
    }

    /// The session length in minutes.
    #[must_use]
    pub const fn session_minutes(&self) -> i64 {
        self.lengths.get(LengthKind::Session)
    }

    /// The time-left display, formatted as MM:SS.
    ///
    /// Always derived: idle shows the current phase's length at :00
    /// (which is how session length changes preview while idle), paused
    /// shows the captured remaining time, running shows the remaining
    /// time as of the last tick.
    #[must_use]
    pub fn display_time(&self) -> String {
        let remaining = match self.state {
            ClockState::Idle => Duration::minutes(self.lengths.for_phase(self.phase)),
            ClockState::Running { shown, .. } => shown,
            ClockState::Paused { remaining } => remaining,
        };
        format_duration_mmss(remaining.max(Duration::zero()))
    }

    /// Elapsed fraction of the current phase's length (0.0 - 1.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        let remaining = match self.state {
            ClockState::Idle => return 0.0,
            ClockState::Running { shown, .. } => shown,
            ClockState::Paused { remaining } => remaining,
        };
        let total = self.lengths.for_phase(self.phase) * 60;
        if total == 0 {
            return 1.0;
        }
        let fraction = 1.0 - remaining.num_seconds() as f64 / total as f64;
        fraction.clamp(0.0, 1.0)
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self {
            lengths: Lengths::default(),
            phase: Phase::Session,
            state: ClockState::Idle,
        }
    }
}

/// Format a duration as MM:SS, two-digit zero-padded.
#[must_use]
pub fn format_duration_mmss(d: Duration) -> String {
    let total_seconds = d.num_seconds().abs();
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}
