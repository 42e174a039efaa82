//! Error types for pomoclock.

use thiserror::Error;

/// Errors that can occur in pomoclock.
#[derive(Debug, Error)]
pub enum PomoclockError {
    /// Configuration loading or parsing failed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal setup, drawing, or event handling failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Audio cue playback failed.
    ///
    /// Callers catch this at the call site; it never stops the countdown.
    #[error("Audio error: {0}")]
    Audio(String),

    /// An underlying I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
