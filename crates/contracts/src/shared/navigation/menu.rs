//! Mobile navigation menu.

use crate::shared::input::keys::is_escape;
use crate::shared::viewport::Viewport;

/// Open/closed state of the hamburger menu. `aria-expanded` on the toggle
/// button mirrors [`is_open`](Self::is_open).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    /// Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns whether the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Escape closes the menu; any other key is ignored.
    pub fn handle_key(&mut self, key: &str) -> bool {
        is_escape(key) && self.close()
    }

    /// Growing past the mobile breakpoint closes the menu.
    pub fn handle_resize(&mut self, viewport: &Viewport) -> bool {
        !viewport.is_mobile() && self.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut menu = NavMenu::new();
        assert!(menu.toggle());
        assert_eq!(menu.aria_expanded(), "true");
        assert!(!menu.toggle());
        assert_eq!(menu.aria_expanded(), "false");
    }

    #[test]
    fn test_close_reports_previous_state() {
        let mut menu = NavMenu::new();
        assert!(!menu.close());
        menu.toggle();
        assert!(menu.close());
        assert!(!menu.is_open());
    }

    #[test]
    fn test_escape_closes() {
        let mut menu = NavMenu::new();
        menu.toggle();
        assert!(!menu.handle_key("Enter"));
        assert!(menu.is_open());
        assert!(menu.handle_key("Escape"));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_resize_closes_only_outside_mobile() {
        let mut menu = NavMenu::new();
        menu.toggle();
        assert!(!menu.handle_resize(&Viewport::new(500.0, 900.0)));
        assert!(menu.is_open());
        assert!(menu.handle_resize(&Viewport::new(900.0, 900.0)));
        assert!(!menu.is_open());
    }
}
