//! pomoclock - A 25+5 session/break countdown clock for the terminal
//!
//! This crate provides a small terminal UI that alternates between a work
//! "session" interval and a "break" interval, with adjustable lengths and
//! an audible cue on each transition.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod audio;
pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod tui;

pub use audio::Cue;
pub use cli::args::Cli;
pub use clock::{Clock, LengthKind, Phase};
pub use error::PomoclockError;
