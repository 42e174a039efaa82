//! Configuration settings for pomoclock.
//!
//! Settings are loaded from `~/.pomoclock/config.yaml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::clock::{MAX_MINUTES, MIN_MINUTES};
use crate::config::Paths;
use crate::error::PomoclockError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Timer settings.
    pub timer: TimerConfig,
    /// Sound cue settings.
    pub sound: SoundConfig,
}

/// Timer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Initial session length in minutes.
    #[serde(default = "default_session_minutes")]
    pub session_minutes: i64,
    /// Initial break length in minutes.
    #[serde(default = "default_break_minutes")]
    pub break_minutes: i64,
}

/// Sound cue settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundConfig {
    /// Play the cue on phase transitions.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Cue sound file; the built-in beep is used when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

// Default value functions for serde
const fn default_session_minutes() -> i64 {
    25
}

const fn default_break_minutes() -> i64 {
    5
}

const fn default_true() -> bool {
    true
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            session_minutes: default_session_minutes(),
            break_minutes: default_break_minutes(),
        }
    }
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            file: None,
        }
    }
}

impl TimerConfig {
    /// Session length clamped into the valid [1,60] range.
    #[must_use]
    pub fn clamped_session_minutes(&self) -> i64 {
        self.session_minutes.clamp(MIN_MINUTES, MAX_MINUTES)
    }

    /// Break length clamped into the valid [1,60] range.
    #[must_use]
    pub fn clamped_break_minutes(&self) -> i64 {
        self.break_minutes.clamp(MIN_MINUTES, MAX_MINUTES)
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, PomoclockError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, PomoclockError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PomoclockError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            PomoclockError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<(), PomoclockError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), PomoclockError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| PomoclockError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            PomoclockError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.timer.session_minutes, 25);
        assert_eq!(config.timer.break_minutes, 5);
        assert!(config.sound.enabled);
        assert!(config.sound.file.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert_eq!(config.timer.session_minutes, 25);
        assert_eq!(config.timer.break_minutes, 5);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut config = Config::default();
        config.timer.session_minutes = 50;
        config.timer.break_minutes = 10;
        config.sound.enabled = false;
        config.sound.file = Some(PathBuf::from("/tmp/chime.wav"));

        config.save_to_path(&config_path).unwrap();
        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded.timer.session_minutes, 50);
        assert_eq!(loaded.timer.break_minutes, 10);
        assert!(!loaded.sound.enabled);
        assert_eq!(loaded.sound.file, Some(PathBuf::from("/tmp/chime.wav")));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "timer:\n  session_minutes: 45\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config.timer.session_minutes, 45);
        assert_eq!(config.timer.break_minutes, 5);
        assert!(config.sound.enabled);
    }

    #[test]
    fn test_malformed_config_errors() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "timer: [not, a, mapping]\n").unwrap();

        assert!(Config::load_from_path(&config_path).is_err());
    }

    #[test]
    fn test_clamped_lengths() {
        let config = TimerConfig {
            session_minutes: 0,
            break_minutes: 120,
        };

        assert_eq!(config.clamped_session_minutes(), 1);
        assert_eq!(config.clamped_break_minutes(), 60);
    }
}
