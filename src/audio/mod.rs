//! The phase-transition audio cue.
//!
//! Playback is fire-and-forget: `play` hands a source to a rodio sink
//! and returns immediately. Failures are reported to the caller, who
//! surfaces them on the status line; they never affect the countdown.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use crate::error::PomoclockError;

/// Pitch of the built-in beep, in hertz.
const BEEP_FREQUENCY: f32 = 880.0;
/// Length of the built-in beep.
const BEEP_DURATION: Duration = Duration::from_millis(400);
/// Volume of the built-in beep (0.0 - 1.0).
const BEEP_AMPLIFY: f32 = 0.25;

/// The transition cue: a configured sound file, or a built-in beep.
pub struct Cue {
    // The stream must stay alive for the sink to produce sound.
    _stream: Option<OutputStream>,
    handle: Option<OutputStreamHandle>,
    sink: Option<Sink>,
    sound_file: Option<PathBuf>,
}

impl Cue {
    /// Create a cue, opening the default audio output.
    ///
    /// When no output device is available the cue degrades to a silent
    /// no-op instead of failing startup.
    #[must_use]
    pub fn new(sound_file: Option<PathBuf>) -> Self {
        match OutputStream::try_default() {
            Ok((stream, handle)) => Self {
                _stream: Some(stream),
                handle: Some(handle),
                sink: None,
                sound_file,
            },
            Err(_) => Self {
                _stream: None,
                handle: None,
                sink: None,
                sound_file,
            },
        }
    }

    /// Create a muted cue that never plays anything.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            _stream: None,
            handle: None,
            sink: None,
            sound_file: None,
        }
    }

    /// Play the cue from the start, cutting off any previous playback.
    ///
    /// # Errors
    ///
    /// Returns an error if the sound file cannot be opened or decoded,
    /// or if the audio sink cannot be created. Muted cues return `Ok`.
    pub fn play(&mut self) -> Result<(), PomoclockError> {
        let Some(handle) = self.handle.as_ref() else {
            return Ok(());
        };

        if let Some(previous) = self.sink.take() {
            previous.stop();
        }

        let sink = Sink::try_new(handle)
            .map_err(|e| PomoclockError::Audio(format!("Failed to create audio sink: {e}")))?;

        match &self.sound_file {
            Some(path) => {
                let file = File::open(path).map_err(|e| {
                    PomoclockError::Audio(format!("Failed to open {}: {e}", path.display()))
                })?;
                let source = Decoder::new(BufReader::new(file)).map_err(|e| {
                    PomoclockError::Audio(format!("Failed to decode {}: {e}", path.display()))
                })?;
                sink.append(source);
            }
            None => {
                let beep = SineWave::new(BEEP_FREQUENCY)
                    .take_duration(BEEP_DURATION)
                    .amplify(BEEP_AMPLIFY);
                sink.append(beep);
            }
        }

        self.sink = Some(sink);
        Ok(())
    }

    /// Stop playback and rewind, so the next play starts from the top.
    pub fn reset(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_cue_play_is_silent_ok() {
        let mut cue = Cue::disabled();
        assert!(cue.play().is_ok());
        assert!(cue.play().is_ok());
    }

    #[test]
    fn test_reset_without_playback_is_noop() {
        let mut cue = Cue::disabled();
        cue.reset();
        assert!(cue.play().is_ok());
    }

    #[test]
    fn test_no_output_device_short_circuits_before_file_access() {
        // A cue with no device short-circuits before touching the file,
        // so a bogus path is still Ok when muted by absence of output.
        let mut cue = Cue {
            _stream: None,
            handle: None,
            sink: None,
            sound_file: Some(PathBuf::from("/nonexistent/beep.wav")),
        };
        assert!(cue.play().is_ok());
    }
}
