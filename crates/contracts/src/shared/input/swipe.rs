//! Horizontal swipe recognition from a `touchstart` / `touchend` pair.

use serde::{Deserialize, Serialize};

/// Minimum horizontal travel, in CSS pixels, for a touch to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    /// Finger moved right-to-left; advances to the next card.
    Left,
    /// Finger moved left-to-right; goes back to the previous card.
    Right,
}

/// Holds the start coordinate of the gesture in progress.
///
/// Only `screenX` matters: vertical travel is ignored, so a diagonal drag
/// still counts once its horizontal component passes the threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeTracker {
    threshold: f64,
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    pub fn touch_start(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Close the gesture. Returns `None` when the travel is within the
    /// threshold or when no `touch_start` preceded this call.
    pub fn touch_end(&mut self, x: f64) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        classify(start - x, self.threshold)
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD_PX)
    }
}

/// `diff` is `start_x - end_x`. The threshold itself is not a swipe.
pub fn classify(diff: f64, threshold: f64) -> Option<SwipeDirection> {
    if !diff.is_finite() || diff.abs() <= threshold {
        return None;
    }
    if diff > 0.0 {
        Some(SwipeDirection::Left)
    } else {
        Some(SwipeDirection::Right)
    }
}
