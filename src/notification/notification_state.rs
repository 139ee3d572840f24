use std::time::{Duration, Instant};

const INFO_DURATION: Duration = Duration::from_secs(3);
const WARNING_DURATION: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    shown_at: Instant,
    duration: Duration,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= self.duration
    }
}

/// Holds at most one notification; a new one replaces the old
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: &str) {
        self.show_with(message, NotificationKind::Info, INFO_DURATION);
    }

    pub fn show_warning(&mut self, message: &str) {
        self.show_with(message, NotificationKind::Warning, WARNING_DURATION);
    }

    pub fn show_with(&mut self, message: &str, kind: NotificationKind, duration: Duration) {
        self.current = Some(Notification {
            message: message.to_string(),
            kind,
            shown_at: Instant::now(),
            duration,
        });
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Drop the notification once it has expired; returns true if it was dropped
    pub fn clear_if_expired(&mut self, now: Instant) -> bool {
        if self.current.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.current = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_replaces_previous() {
        let mut state = NotificationState::new();
        state.show("Saved");
        state.show_warning("Config invalid");

        let current = state.current().unwrap();
        assert_eq!(current.message, "Config invalid");
        assert_eq!(current.kind, NotificationKind::Warning);
    }

    #[test]
    fn test_expiry() {
        let mut state = NotificationState::new();
        state.show_with("Saved", NotificationKind::Info, Duration::from_millis(100));
        let shown_at = Instant::now();

        assert!(!state.clear_if_expired(shown_at));
        assert!(state.current().is_some());

        assert!(state.clear_if_expired(shown_at + Duration::from_secs(1)));
        assert!(state.current().is_none());
    }

    #[test]
    fn test_clear() {
        let mut state = NotificationState::new();
        state.show("Saved");
        state.clear();
        assert!(state.current().is_none());
        assert!(!state.clear_if_expired(Instant::now()));
    }
}
