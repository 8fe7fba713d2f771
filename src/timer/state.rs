//! The session timer state machine.
//!
//! Alternates between work and break sessions. The timer only moves when an
//! external driver feeds it one-second ticks; it never reads the clock itself.

use serde::{Deserialize, Serialize};

/// Kind of session currently on the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    /// A focused work interval.
    Work,
    /// A rest interval between work sessions.
    Break,
}

impl SessionKind {
    /// The session kind that follows this one. Work and break strictly
    /// alternate.
    #[must_use]
    pub const fn alternate(self) -> Self {
        match self {
            Self::Work => Self::Break,
            Self::Break => Self::Work,
        }
    }

    /// Label shown in the session pill.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Work => "Focus",
            Self::Break => "Break",
        }
    }

    /// Check if this is a break session.
    #[must_use]
    pub const fn is_break(self) -> bool {
        matches!(self, Self::Break)
    }
}

impl std::fmt::Display for SessionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Configured session lengths in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    /// Length of a work session.
    pub work_seconds: u32,
    /// Length of a break session.
    pub break_seconds: u32,
}

impl Durations {
    /// Default work session length: 25 minutes.
    pub const DEFAULT_WORK_SECONDS: u32 = 25 * 60;
    /// Default break session length: 5 minutes.
    pub const DEFAULT_BREAK_SECONDS: u32 = 5 * 60;

    /// Build durations from whole minutes. Zero-minute sessions are bumped to
    /// one minute so a session always has at least one tick of substance.
    #[must_use]
    pub const fn from_minutes(work_minutes: u32, break_minutes: u32) -> Self {
        let work = if work_minutes == 0 { 1 } else { work_minutes };
        let brk = if break_minutes == 0 { 1 } else { break_minutes };
        Self {
            work_seconds: work * 60,
            break_seconds: brk * 60,
        }
    }

    /// Length of the given session kind.
    #[must_use]
    pub const fn of(&self, kind: SessionKind) -> u32 {
        match kind {
            SessionKind::Work => self.work_seconds,
            SessionKind::Break => self.break_seconds,
        }
    }
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            work_seconds: Self::DEFAULT_WORK_SECONDS,
            break_seconds: Self::DEFAULT_BREAK_SECONDS,
        }
    }
}

/// Emitted by [`SessionTimer::tick`] exactly once when a session expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionEnd {
    /// The session that just finished.
    pub finished: SessionKind,
    /// The session now on the clock.
    pub next: SessionKind,
}

/// The work/break countdown state machine.
///
/// Starts paused on a full work session. `remaining_seconds` stays within
/// `[0, duration of the current kind]`: it is pinned to zero at the instant a
/// session expires and reset to the next session's full length within the same
/// tick, so a reader never sees a negative count and never misses the flip.
#[derive(Debug, Clone)]
pub struct SessionTimer {
    kind: SessionKind,
    remaining_seconds: u32,
    running: bool,
    durations: Durations,
}

impl SessionTimer {
    /// Create a paused timer holding a full work session.
    #[must_use]
    pub const fn new(durations: Durations) -> Self {
        Self {
            kind: SessionKind::Work,
            remaining_seconds: durations.work_seconds,
            running: false,
            durations,
        }
    }

    /// The session kind currently on the clock.
    #[must_use]
    pub const fn kind(&self) -> SessionKind {
        self.kind
    }

    /// Seconds left in the current session.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Check if the timer is counting down.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Full length of the current session.
    #[must_use]
    pub const fn duration_seconds(&self) -> u32 {
        self.durations.of(self.kind)
    }

    /// Start or pause the countdown. Touches nothing but the running flag.
    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    /// Advance the timer by one second.
    ///
    /// Does nothing while paused. When the session expires the counter is
    /// pinned to zero, the timer pauses, the kind flips to its alternate, and
    /// the counter is refilled - all within this call. Returns the expiry
    /// event exactly once so the caller can notify.
    pub fn tick(&mut self) -> Option<SessionEnd> {
        if !self.running {
            return None;
        }

        if self.remaining_seconds <= 1 {
            self.remaining_seconds = 0;
            self.running = false;
            let finished = self.kind;
            self.kind = finished.alternate();
            self.remaining_seconds = self.durations.of(self.kind);
            Some(SessionEnd {
                finished,
                next: self.kind,
            })
        } else {
            self.remaining_seconds -= 1;
            None
        }
    }

    /// Discard any in-progress session and return to a paused, full work
    /// session. Idempotent.
    pub fn reset(&mut self) {
        self.kind = SessionKind::Work;
        self.remaining_seconds = self.durations.work_seconds;
        self.running = false;
    }

    /// Fraction of the current session already elapsed (0.0 - 1.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        let total = self.duration_seconds();
        if total == 0 {
            return 1.0;
        }
        f64::from(total - self.remaining_seconds) / f64::from(total)
    }

    /// Remaining time as `MM:SS`.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        super::format::format_mmss(self.remaining_seconds)
    }
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::new(Durations::default())
    }
}
