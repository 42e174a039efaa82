use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use pomoclock::audio::Cue;
use pomoclock::cli::args::Cli;
use pomoclock::clock::Clock;
use pomoclock::config::Config;
use pomoclock::error::PomoclockError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PomoclockError> {
    let cli = Cli::parse();
    let config = Config::load()?;

    // Command-line flags win over the config file.
    let session = cli
        .session
        .unwrap_or_else(|| config.timer.clamped_session_minutes());
    let break_minutes = cli
        .break_minutes
        .unwrap_or_else(|| config.timer.clamped_break_minutes());

    let cue = if cli.mute || !config.sound.enabled {
        Cue::disabled()
    } else {
        Cue::new(cli.sound.or(config.sound.file))
    };

    let clock = Clock::new(session, break_minutes);
    pomoclock::tui::run(clock, cue)
}
