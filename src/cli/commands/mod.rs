//! Command implementations for tomadoro.
//!
//! This module contains the implementation of all non-interactive CLI
//! commands. The interactive timer lives in [`crate::tui`].

mod about;
mod completions;
mod config;

pub use about::about;
pub use completions::completions;
pub use config::{config_init, config_show};
