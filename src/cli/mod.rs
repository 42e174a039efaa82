//! Command-line interface for pomoclock.

pub mod args;

pub use args::Cli;
