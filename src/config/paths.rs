//! Path resolution for tomadoro configuration files.
//!
//! All tomadoro data lives in `~/.tomadoro/`:
//! - `config.yaml` - Main configuration file

use std::path::PathBuf;

use crate::error::TomadoroError;

/// Paths to tomadoro configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.tomadoro/`
    pub root: PathBuf,
    /// Config file: `~/.tomadoro/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TomadoroError> {
        let home = std::env::var("HOME").map_err(|_| {
            TomadoroError::Config("Could not determine home directory".to_string())
        })?;

        let root = PathBuf::from(home).join(".tomadoro");

        Ok(Self {
            config_file: root.join("config.yaml"),
            root,
        })
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), TomadoroError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                TomadoroError::Config(format!(
                    "Failed to create directory {:?}: {}",
                    self.root, e
                ))
            })?;
        }

        Ok(())
    }
}
