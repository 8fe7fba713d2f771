//! Configuration management for tomadoro.
//!
//! This module handles loading and saving configuration from `~/.tomadoro/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, TimerConfig};
