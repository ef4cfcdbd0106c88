//! Keyboard filtering for interactive elements.
//!
//! Values are matched against `KeyboardEvent.key`.

/// The two keys that activate a focused interactive element.
/// Arrow keys are deliberately not part of this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationKey {
    Enter,
    Space,
}

impl ActivationKey {
    /// Parse a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(ActivationKey::Enter),
            " " => Some(ActivationKey::Space),
            _ => None,
        }
    }
}

pub fn is_activation_key(key: &str) -> bool {
    ActivationKey::from_key(key).is_some()
}

pub fn is_escape(key: &str) -> bool {
    key == "Escape"
}
