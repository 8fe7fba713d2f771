//! Application state for the TUI.

use crate::config::Config;
use crate::notify::{DesktopNotifier, SessionNotifier, SilentNotifier};
use crate::timer::{SessionTimer, Ticker};

/// Which tab is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The countdown timer.
    Home,
    /// The about page.
    Explore,
}

impl Screen {
    /// The other tab.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Home => Self::Explore,
            Self::Explore => Self::Home,
        }
    }

    /// Tab title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Timer",
            Self::Explore => "Explore",
        }
    }
}

/// Application state.
///
/// Owns the session timer and its tick source. The ticker is armed exactly
/// while the timer runs and stopped on every exit path: pause, reset, session
/// expiry, and quit.
pub struct App {
    /// The session timer.
    pub timer: SessionTimer,
    /// The tick source driving the timer.
    pub ticker: Ticker,
    /// Current tab.
    pub screen: Screen,
    /// Status message to display.
    pub status: Option<String>,
    notifier: Box<dyn SessionNotifier>,
}

impl App {
    /// Create a new app instance from configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let notifier: Box<dyn SessionNotifier> = if config.timer.notifications {
            Box::new(DesktopNotifier)
        } else {
            Box::new(SilentNotifier)
        };

        Self::with_notifier(config, notifier)
    }

    /// Create an app with a specific notifier (used by tests).
    #[must_use]
    pub fn with_notifier(config: &Config, notifier: Box<dyn SessionNotifier>) -> Self {
        Self {
            timer: SessionTimer::new(config.timer.durations()),
            ticker: Ticker::new(),
            screen: Screen::Home,
            status: Some("Press ? for help".to_string()),
            notifier,
        }
    }

    /// Start or pause the countdown, keeping the ticker in lockstep.
    pub fn toggle_timer(&mut self) {
        self.timer.toggle_running();
        if self.timer.is_running() {
            self.ticker.start();
            self.status = None;
        } else {
            self.ticker.stop();
            self.status = Some("Paused".to_string());
        }
    }

    /// Reset to a fresh, paused work session.
    pub fn reset_timer(&mut self) {
        self.timer.reset();
        self.ticker.stop();
        self.status = Some("Reset".to_string());
    }

    /// Switch to the other tab.
    pub fn next_screen(&mut self) {
        self.screen = self.screen.next();
    }

    /// Show a specific tab.
    pub fn show_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    /// Stop the tick source. Called on quit so nothing outlives the screen.
    pub fn shutdown(&mut self) {
        self.ticker.stop();
    }

    /// Drain due ticks from the ticker and apply them to the timer.
    pub fn advance(&mut self) {
        for _ in 0..self.ticker.poll() {
            self.apply_tick();
        }
    }

    fn apply_tick(&mut self) {
        if let Some(end) = self.timer.tick() {
            self.ticker.stop();
            self.notifier.session_ended(end.finished);
            self.status = Some(format!(
                "{} finished - press space to start the {}",
                end.finished,
                end.next.display_name().to_lowercase()
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::SessionKind;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every notification it receives.
    struct RecordingNotifier {
        seen: Rc<RefCell<Vec<SessionKind>>>,
    }

    impl SessionNotifier for RecordingNotifier {
        fn session_ended(&self, finished: SessionKind) {
            self.seen.borrow_mut().push(finished);
        }
    }

    fn recording_app() -> (App, Rc<RefCell<Vec<SessionKind>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let notifier = RecordingNotifier { seen: Rc::clone(&seen) };
        let app = App::with_notifier(&Config::default(), Box::new(notifier));
        (app, seen)
    }

    #[test]
    fn test_toggle_arms_and_disarms_ticker() {
        let (mut app, _) = recording_app();
        assert!(!app.ticker.is_armed());

        app.toggle_timer();
        assert!(app.timer.is_running());
        assert!(app.ticker.is_armed());

        app.toggle_timer();
        assert!(!app.timer.is_running());
        assert!(!app.ticker.is_armed());
    }

    #[test]
    fn test_reset_disarms_ticker() {
        let (mut app, _) = recording_app();
        app.toggle_timer();

        app.reset_timer();
        assert!(!app.ticker.is_armed());
        assert_eq!(app.timer.remaining_seconds(), 25 * 60);
    }

    #[test]
    fn test_expiry_notifies_once_and_disarms() {
        let (mut app, seen) = recording_app();
        app.toggle_timer();

        for _ in 0..(25 * 60) {
            app.apply_tick();
        }

        assert_eq!(*seen.borrow(), vec![SessionKind::Work]);
        assert!(!app.ticker.is_armed());
        assert_eq!(app.timer.kind(), SessionKind::Break);
        assert_eq!(app.timer.remaining_seconds(), 5 * 60);

        // Further ticks while paused change nothing.
        app.apply_tick();
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(app.timer.remaining_seconds(), 5 * 60);
    }

    #[test]
    fn test_screen_switching() {
        let (mut app, _) = recording_app();
        assert_eq!(app.screen, Screen::Home);

        app.next_screen();
        assert_eq!(app.screen, Screen::Explore);

        app.show_screen(Screen::Home);
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn test_shutdown_stops_ticker() {
        let (mut app, _) = recording_app();
        app.toggle_timer();

        app.shutdown();
        assert!(!app.ticker.is_armed());
    }
}
