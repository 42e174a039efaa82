use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "pomoclock")]
#[command(about = "A 25+5 session/break countdown clock for the terminal")]
#[command(long_about = "pomoclock - A 25+5 clock for the terminal

Alternates between a work session and a break, switching automatically
with an audible cue whenever the countdown reaches zero.

KEYS:
  Space      Start or pause the countdown
  S / s      Session length +1 / -1 minute
  B / b      Break length +1 / -1 minute
  r          Reset (session phase, 25/5 lengths, stopped)
  q / Esc    Quit

Lengths can also be set up front with --session and --break, or in
~/.pomoclock/config.yaml. Command-line flags win over the config file.")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Initial session length in minutes (1-60)
    #[arg(short = 's', long, value_name = "MINUTES",
          value_parser = clap::value_parser!(i64).range(1..=60))]
    pub session: Option<i64>,

    /// Initial break length in minutes (1-60)
    #[arg(short = 'b', long = "break", value_name = "MINUTES",
          value_parser = clap::value_parser!(i64).range(1..=60))]
    pub break_minutes: Option<i64>,

    /// Sound file to play on phase transitions (wav/ogg/mp3)
    ///
    /// A short built-in beep is used when no file is given.
    #[arg(long, value_name = "FILE")]
    pub sound: Option<PathBuf>,

    /// Disable the transition sound entirely
    #[arg(long)]
    pub mute: bool,
}
