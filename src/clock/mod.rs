//! Countdown clock domain logic.
//!
//! Provides the bounded length counters and the deadline-based timer
//! engine that alternates between session and break phases.

pub mod engine;
pub mod length;

pub use engine::{format_duration_mmss, Clock, ClockState, Expiry, Phase};
pub use length::{LengthKind, Lengths, MAX_MINUTES, MIN_MINUTES};
