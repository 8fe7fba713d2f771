//! The Pomodoro session timer.
//!
//! A work/break countdown driven by one-second ticks:
//! - `state` - the session state machine (work/break, remaining seconds, running flag)
//! - `ticker` - the scoped one-second tick source owned by the UI loop
//! - `format` - duration formatting helpers

pub mod format;
pub mod state;
pub mod ticker;

pub use format::{format_duration, format_mmss};
pub use state::{Durations, SessionEnd, SessionKind, SessionTimer};
pub use ticker::Ticker;
