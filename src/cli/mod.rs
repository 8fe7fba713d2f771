//! Command-line interface for tomadoro.

pub mod args;
pub mod commands;
