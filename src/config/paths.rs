//! Path resolution for pomoclock configuration files.
//!
//! All pomoclock data is stored in `~/.pomoclock/`:
//! - `config.yaml` - Main configuration file
//! - `sounds/` - User-provided cue sounds

use std::path::PathBuf;

use crate::error::PomoclockError;

/// Paths to pomoclock configuration directories.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.pomoclock/`
    pub root: PathBuf,
    /// Config file: `~/.pomoclock/config.yaml`
    pub config_file: PathBuf,
    /// Sounds directory: `~/.pomoclock/sounds/`
    pub sounds: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PomoclockError> {
        let home = std::env::var("HOME").map_err(|_| {
            PomoclockError::Config("Could not determine home directory".to_string())
        })?;

        let root = PathBuf::from(home).join(".pomoclock");

        Ok(Self {
            config_file: root.join("config.yaml"),
            sounds: root.join("sounds"),
            root,
        })
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            sounds: root.join("sounds"),
            root,
        }
    }

    /// Ensure all directories exist, creating them if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), PomoclockError> {
        for dir in [&self.root, &self.sounds] {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    PomoclockError::Config(format!("Failed to create directory {dir:?}: {e}"))
                })?;
            }
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".pomoclock"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-pomoclock");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.sounds, root.join("sounds"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());

        paths.ensure_dirs().unwrap();

        assert!(paths.root.exists());
        assert!(paths.sounds.exists());
    }
}
