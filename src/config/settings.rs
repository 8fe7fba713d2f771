//! Configuration settings for tomadoro.
//!
//! Settings are loaded from `~/.tomadoro/config.yaml`. Durations are read
//! once at startup; there is no way to change them from inside the running
//! app.

use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::error::TomadoroError;
use crate::timer::Durations;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Session timer settings.
    pub timer: TimerConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Color output setting.
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Session timer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Work session length in minutes.
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u32,
    /// Break session length in minutes.
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
    /// Enable desktop notifications when a session ends.
    #[serde(default = "default_true")]
    pub notifications: bool,
}

impl TimerConfig {
    /// Session lengths in seconds, as the timer wants them.
    #[must_use]
    pub const fn durations(&self) -> Durations {
        Durations::from_minutes(self.work_minutes, self.break_minutes)
    }
}

// Default value functions for serde
const fn default_work_minutes() -> u32 {
    25
}

const fn default_break_minutes() -> u32 {
    5
}

const fn default_true() -> bool {
    true
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_minutes: default_work_minutes(),
            break_minutes: default_break_minutes(),
            notifications: default_true(),
        }
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
    pub fn load() -> Result<Self, TomadoroError> {
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
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, TomadoroError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            TomadoroError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            TomadoroError::Config(format!(
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
    pub fn save(&self) -> Result<(), TomadoroError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), TomadoroError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| TomadoroError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            TomadoroError::Config(format!(
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

        assert_eq!(config.general.color, ColorSetting::Auto);
        assert_eq!(config.timer.work_minutes, 25);
        assert_eq!(config.timer.break_minutes, 5);
        assert!(config.timer.notifications);
    }

    #[test]
    fn test_durations_from_timer_config() {
        let config = TimerConfig::default();
        let durations = config.durations();

        assert_eq!(durations.work_seconds, 1500);
        assert_eq!(durations.break_seconds, 300);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert_eq!(config.timer.work_minutes, 25);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut config = Config::default();
        config.timer.work_minutes = 50;
        config.timer.notifications = false;

        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded.timer.work_minutes, 50);
        assert!(!loaded.timer.notifications);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        // Write a partial config (only some fields)
        let partial_yaml = r"
timer:
  break_minutes: 10
";
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        // Custom value should be loaded
        assert_eq!(config.timer.break_minutes, 10);
        // Defaults should be used for missing fields
        assert_eq!(config.timer.work_minutes, 25);
        assert_eq!(config.general.color, ColorSetting::Auto);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "timer: [not, a, map]").unwrap();

        assert!(Config::load_from_path(&config_path).is_err());
    }
}
