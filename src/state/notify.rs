//! User-visible outcome notifications (toasts).
//!
//! SYSTEM CONTEXT
//! ==============
//! One `Notifications` instance is created by the page and passed explicitly
//! to every operation that reports an outcome. Delivery is fire-and-forget;
//! the UI dismisses each toast after its `life_ms`.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use crate::config::DEFAULT_NOTIFICATION_LIFE_MS;

pub const NOTIFICATION_SUMMARY: &str = "Notification";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Failure,
}

impl Severity {
    /// Toast background color.
    pub fn color(self) -> &'static str {
        match self {
            Self::Success => "green",
            Self::Failure => "red",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Failure => "toast toast--failure",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
    pub life_ms: u32,
}

/// Queue of visible notifications.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notifications {
    items: Vec<Notification>,
    next_id: u64,
    life_ms: u32,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::with_life_ms(DEFAULT_NOTIFICATION_LIFE_MS)
    }
}

impl Notifications {
    pub fn with_life_ms(life_ms: u32) -> Self {
        Self { items: Vec::new(), next_id: 1, life_ms }
    }

    /// Show a notification; returns its id for later dismissal.
    pub fn push(&mut self, severity: Severity, detail: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            severity,
            summary: NOTIFICATION_SUMMARY.to_owned(),
            detail: detail.into(),
            life_ms: self.life_ms,
        });
        id
    }

    pub fn success(&mut self, detail: impl Into<String>) -> u64 {
        self.push(Severity::Success, detail)
    }

    pub fn failure(&mut self, detail: impl Into<String>) -> u64 {
        self.push(Severity::Failure, detail)
    }

    /// Remove a notification; `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    #[cfg(test)]
    pub fn latest(&self) -> Option<&Notification> {
        self.items.last()
    }

    pub fn life_ms(&self) -> u32 {
        self.life_ms
    }
}
