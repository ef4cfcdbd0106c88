//! Input normalisation: keyboard keys and touch gestures.

pub mod keys;
pub mod swipe;

pub use keys::ActivationKey;
pub use swipe::{SwipeDirection, SwipeTracker, DEFAULT_SWIPE_THRESHOLD_PX};
