//! Bounded interval length counters.
//!
//! Break and session lengths are whole minutes in [1,60], adjusted by
//! unit increments. Requests that would leave the range are silently
//! absorbed.

use crate::clock::engine::Phase;

/// Smallest allowed interval length, in minutes.
pub const MIN_MINUTES: i64 = 1;
/// Largest allowed interval length, in minutes.
pub const MAX_MINUTES: i64 = 60;

/// Default break length, in minutes.
pub const DEFAULT_BREAK_MINUTES: i64 = 5;
/// Default session length, in minutes.
pub const DEFAULT_SESSION_MINUTES: i64 = 25;

/// Which interval length a control targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthKind {
    /// The break interval.
    Break,
    /// The work session interval.
    Session,
}

/// The pair of interval lengths, always within [1,60] minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lengths {
    break_minutes: i64,
    session_minutes: i64,
}

impl Lengths {
    /// Create lengths from minute values, clamping each into [1,60].
    #[must_use]
    pub fn new(session_minutes: i64, break_minutes: i64) -> Self {
        Self {
            break_minutes: break_minutes.clamp(MIN_MINUTES, MAX_MINUTES),
            session_minutes: session_minutes.clamp(MIN_MINUTES, MAX_MINUTES),
        }
    }

    /// Increase a length by one minute; a no-op at the upper bound.
    pub fn increment(&mut self, kind: LengthKind) {
        let value = self.slot(kind);
        if *value < MAX_MINUTES {
            *value += 1;
        }
    }

    /// Decrease a length by one minute; a no-op at the lower bound.
    pub fn decrement(&mut self, kind: LengthKind) {
        let value = self.slot(kind);
        if *value > MIN_MINUTES {
            *value -= 1;
        }
    }

    /// Get a length in minutes.
    #[must_use]
    pub const fn get(&self, kind: LengthKind) -> i64 {
        match kind {
            LengthKind::Break => self.break_minutes,
            LengthKind::Session => self.session_minutes,
        }
    }

    /// Get the length for a phase, in minutes.
    #[must_use]
    pub const fn for_phase(&self, phase: Phase) -> i64 {
        match phase {
            Phase::Session => self.session_minutes,
            Phase::Break => self.break_minutes,
        }
    }

    fn slot(&mut self, kind: LengthKind) -> &mut i64 {
        match kind {
            LengthKind::Break => &mut self.break_minutes,
            LengthKind::Session => &mut self.session_minutes,
        }
    }
}

impl Default for Lengths {
    fn default() -> Self {
        Self {
            break_minutes: DEFAULT_BREAK_MINUTES,
            session_minutes: DEFAULT_SESSION_MINUTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let lengths = Lengths::default();
        assert_eq!(lengths.get(LengthKind::Break), 5);
        assert_eq!(lengths.get(LengthKind::Session), 25);
    }

    #[test]
    fn test_increment_within_range() {
        for kind in [LengthKind::Break, LengthKind::Session] {
            for n in MIN_MINUTES..MAX_MINUTES {
                let mut lengths = match kind {
                    LengthKind::Break => Lengths::new(25, n),
                    LengthKind::Session => Lengths::new(n, 5),
                };
                lengths.increment(kind);
                assert_eq!(lengths.get(kind), n + 1);
            }
        }
    }

    #[test]
    fn test_increment_at_upper_bound() {
        let mut lengths = Lengths::new(60, 60);
        lengths.increment(LengthKind::Session);
        lengths.increment(LengthKind::Break);
        assert_eq!(lengths.get(LengthKind::Session), 60);
        assert_eq!(lengths.get(LengthKind::Break), 60);
    }

    #[test]
    fn test_decrement_within_range() {
        for kind in [LengthKind::Break, LengthKind::Session] {
            for n in (MIN_MINUTES + 1)..=MAX_MINUTES {
                let mut lengths = match kind {
                    LengthKind::Break => Lengths::new(25, n),
                    LengthKind::Session => Lengths::new(n, 5),
                };
                lengths.decrement(kind);
                assert_eq!(lengths.get(kind), n - 1);
            }
        }
    }

    #[test]
    fn test_decrement_at_lower_bound() {
        let mut lengths = Lengths::new(1, 1);
        lengths.decrement(LengthKind::Session);
        lengths.decrement(LengthKind::Break);
        assert_eq!(lengths.get(LengthKind::Session), 1);
        assert_eq!(lengths.get(LengthKind::Break), 1);
    }

    #[test]
    fn test_new_clamps_out_of_range() {
        let lengths = Lengths::new(0, 99);
        assert_eq!(lengths.get(LengthKind::Session), 1);
        assert_eq!(lengths.get(LengthKind::Break), 60);
    }

    #[test]
    fn test_kinds_are_independent() {
        let mut lengths = Lengths::default();
        lengths.increment(LengthKind::Break);
        assert_eq!(lengths.get(LengthKind::Break), 6);
        assert_eq!(lengths.get(LengthKind::Session), 25);
    }
}
