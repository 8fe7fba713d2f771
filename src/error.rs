//! Error types for tomadoro.

use thiserror::Error;

/// Errors that can occur while running tomadoro.
#[derive(Error, Debug)]
pub enum TomadoroError {
    /// Configuration file or path problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal setup, drawing, or event polling failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON serialization failed.
    #[error("Failed to serialize output: {0}")]
    Parse(#[from] serde_json::Error),
}
