use chrono::{DateTime, Duration, Utc};
use tracing::debug;

pub const REMINDER_HEADING: &str = "Reminder";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub heading: String,
    pub message: String,
    /// Bumped on every `show`; a timer armed for an older generation must
    /// not hide a newer message.
    pub generation: u64,
    pub hide_at: DateTime<Utc>,
}

/// Single-slot banner: hidden, or visible with exactly one message.
#[derive(Debug, Clone)]
pub struct NotificationPresenter {
    current: Option<Notification>,
    generation: u64,
    duration: Duration,
}

pub fn reminder_message(title: &str) -> String {
    format!("Your task \"{title}\" is due soon!")
}

impl NotificationPresenter {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            generation: 0,
            duration,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Shows the reminder for `title`, replacing any visible message and
    /// restarting the auto-hide deadline.
    pub fn show(&mut self, title: &str, now: DateTime<Utc>) -> &Notification {
        self.generation += 1;
        let replaced = self.current.is_some();
        debug!(generation = self.generation, replaced, "showing reminder");
        self.current.insert(Notification {
            heading: REMINDER_HEADING.to_string(),
            message: reminder_message(title),
            generation: self.generation,
            hide_at: now + self.duration,
        })
    }

    pub fn dismiss(&mut self) {
        if self.current.take().is_some() {
            debug!(generation = self.generation, "dismissed reminder");
        }
    }

    /// Timer callback. Hides only if `generation` is still the one on screen.
    pub fn auto_hide(&mut self, generation: u64) -> bool {
        let current = self
            .current
            .as_ref()
            .is_some_and(|n| n.generation == generation);
        if !current {
            return false;
        }
        self.current = None;
        debug!(generation, "auto-hid reminder");
        true
    }

    /// Clock-driven variant of [`auto_hide`](Self::auto_hide).
    pub fn expire(&mut self, now: DateTime<Utc>) -> bool {
        let Some(generation) = self
            .current
            .as_ref()
            .filter(|n| now >= n.hide_at)
            .map(|n| n.generation)
        else {
            return false;
        };
        self.auto_hide(generation)
    }
}
