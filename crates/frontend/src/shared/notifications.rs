//! Toast notifications.
//!
//! `NotificationService` is provided as context; any component can call
//! [`NotificationService::notify`]. `ToastHost` renders the queue.

use contracts::shared::config::NotificationConfig;
use contracts::shared::notifications::{Notification, NotificationKind, NotificationQueue};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const KEYFRAMES: &str = r#"
@keyframes slideIn {
    from { transform: translateX(400px); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}
@keyframes slideOut {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(400px); opacity: 0; }
}
"#;

#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<NotificationQueue>,
    timing: StoredValue<NotificationConfig>,
}

impl NotificationService {
    pub fn new(timing: NotificationConfig) -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::new()),
            timing: StoredValue::new(timing),
        }
    }

    /// Show a toast; it dismisses itself.
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) {
        let message = message.into();
        log::debug!("notification ({}): {}", kind.as_str(), message);

        let id = self.queue.try_update(|q| q.push(message, kind)).unwrap_or_default();
        let (visible_ms, exit_ms) = self.timing.with_value(|t| (t.visible_ms, t.exit_ms));
        let queue = self.queue;

        spawn_local(async move {
            TimeoutFuture::new(visible_ms).await;
            queue.update(|q| {
                q.begin_dismiss(id);
            });
            TimeoutFuture::new(exit_ms).await;
            queue.update(|q| {
                q.remove(id);
            });
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Error);
    }

    pub fn items(&self) -> Vec<Notification> {
        self.queue.with(|q| q.items().to_vec())
    }

    /// Current stacking slot of a toast; follows removals of earlier ones.
    pub fn position(&self, id: u64) -> usize {
        self.queue.with(|q| q.position(id)).unwrap_or(0)
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService context not found")
}

fn toast_style(notification: &Notification, offset_index: usize) -> String {
    format!(
        "position: fixed; top: {top}px; right: 20px; padding: 1rem 1.5rem; \
         background-color: {bg}; color: white; border-radius: 4px; \
         box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15); z-index: 2000; \
         animation: {animation}; animation-fill-mode: forwards; font-weight: 500; \
         max-width: 90vw; font-size: clamp(0.85rem, 1.2vw, 1rem);",
        top = 100 + offset_index * 70,
        bg = notification.kind.background_color(),
        animation = notification.animation(),
    )
}

/// Keyed by identity and phase only, so a toast keeps its element when an
/// earlier one leaves the stack.
fn toast_key(notification: &Notification) -> (u64, bool) {
    (notification.id, notification.leaving)
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <style data-notification="true">{KEYFRAMES}</style>
        <div class="notification-host">
            <For
                each=move || service.items()
                key=toast_key
                children={move |n: Notification| {
                    let class = n.kind.css_class();
                    let message = n.message.clone();
                    let id = n.id;
                    view! {
                        <div
                            class=class
                            role="alert"
                            aria-live="polite"
                            style=move || toast_style(&n, service.position(id))
                        >
                            {message}
                        </div>
                    }
                }}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(kind: NotificationKind, leaving: bool) -> Notification {
        Notification {
            id: 1,
            message: "Olá".to_string(),
            kind,
            leaving,
        }
    }

    #[test]
    fn test_toast_style_colour_and_animation() {
        let style = toast_style(&toast(NotificationKind::Error, false), 0);
        assert!(style.contains("background-color: #ef4444;"));
        assert!(style.contains("animation: slideIn 0.3s ease-out;"));
        assert!(style.contains("top: 100px;"));
    }

    #[test]
    fn test_toasts_stack_downwards() {
        let style = toast_style(&toast(NotificationKind::Success, true), 2);
        assert!(style.contains("top: 240px;"));
        assert!(style.contains("slideOut"));
    }

    #[test]
    fn test_toast_key_survives_earlier_removal() {
        let mut queue = NotificationQueue::new();
        let first = queue.push("a", NotificationKind::Success);
        let second = queue.push("b", NotificationKind::Error);
        let before = queue.items().iter().find(|n| n.id == second).map(toast_key);

        queue.remove(first);
        let after = queue.items().iter().find(|n| n.id == second).map(toast_key);
        assert_eq!(before, after);
        assert_eq!(queue.position(second), Some(0));
    }
}
