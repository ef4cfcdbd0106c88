//! Toast notifications.
//!
//! A toast lives for `visible_ms`, then plays a slide-out animation for
//! `exit_ms` and is removed. The queue only tracks state; timers belong to the
//! host.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }

    pub fn css_class(&self) -> String {
        format!("notification notification-{}", self.as_str())
    }

    pub fn background_color(&self) -> &'static str {
        match self {
            NotificationKind::Success => "#10b981",
            NotificationKind::Error => "#ef4444",
            NotificationKind::Info => "#0a2463",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    /// Slide-out animation is playing.
    pub leaving: bool,
}

impl Notification {
    pub fn animation(&self) -> &'static str {
        if self.leaving {
            "slideOut 0.3s ease-out"
        } else {
            "slideIn 0.3s ease-out"
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Stacking slot of a toast among those currently shown.
    pub fn position(&self, id: u64) -> Option<usize> {
        self.items.iter().position(|n| n.id == id)
    }

    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            message: message.into(),
            kind,
            leaving: false,
        });
        id
    }

    /// Start the exit animation. Returns `false` for unknown ids.
    pub fn begin_dismiss(&mut self, id: u64) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.leaving = true;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }
}
