//! tomadoro - A two-screen Pomodoro timer for the terminal
//!
//! This crate provides a work/break countdown in a full-screen terminal UI,
//! plus a small non-interactive command surface (about page, configuration,
//! shell completions).

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod notify;
pub mod output;
pub mod timer;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::TomadoroError;
pub use timer::{SessionKind, SessionTimer};
