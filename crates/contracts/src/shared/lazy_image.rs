//! Deferred image loading and reveal-on-scroll, driven by viewport
//! intersection.

use serde::{Deserialize, Serialize};

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// `<img data-src=...>` waiting for its first intersection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LazyImage {
    pub data_src: Option<String>,
    pub src: Option<String>,
    pub loaded: bool,
}

impl LazyImage {
    pub fn new(data_src: Option<String>) -> Self {
        Self {
            data_src,
            src: None,
            loaded: false,
        }
    }

    /// Apply an intersection entry. Returns `true` once the image has been
    /// loaded, which is when the observer should stop watching it.
    pub fn on_intersect(&mut self, is_intersecting: bool) -> bool {
        if !is_intersecting || self.loaded {
            return false;
        }
        match self.data_src.as_ref().filter(|s| !s.is_empty()) {
            Some(src) => {
                self.src = Some(src.clone());
                self.loaded = true;
                true
            }
            None => false,
        }
    }
}

/// Hidden-until-visible state of a reveal element. Once shown it stays shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    pub visible: bool,
}

impl Reveal {
    pub const HIDDEN_STYLE: &'static str =
        "opacity: 0; transform: translateY(20px); transition: all 0.6s ease-out;";
    pub const VISIBLE_STYLE: &'static str =
        "opacity: 1; transform: translateY(0); transition: all 0.6s ease-out;";

    pub fn on_intersect(&mut self, is_intersecting: bool) {
        if is_intersecting {
            self.visible = true;
        }
    }

    pub fn style(&self) -> &'static str {
        if self.visible {
            Self::VISIBLE_STYLE
        } else {
            Self::HIDDEN_STYLE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loads_once_on_intersection() {
        let mut img = LazyImage::new(Some("/img/obra.jpg".to_string()));
        assert!(!img.on_intersect(false));
        assert_eq!(img.src, None);

        assert!(img.on_intersect(true));
        assert_eq!(img.src.as_deref(), Some("/img/obra.jpg"));
        assert!(img.loaded);

        assert!(!img.on_intersect(true), "second hit is ignored");
    }

    #[test]
    fn test_missing_data_src_keeps_observing() {
        let mut img = LazyImage::new(None);
        assert!(!img.on_intersect(true));
        let mut img = LazyImage::new(Some(String::new()));
        assert!(!img.on_intersect(true));
        assert!(!img.loaded);
    }

    #[test]
    fn test_reveal_is_sticky() {
        let mut reveal = Reveal::default();
        assert_eq!(reveal.style(), Reveal::HIDDEN_STYLE);
        reveal.on_intersect(true);
        reveal.on_intersect(false);
        assert!(reveal.visible);
        assert_eq!(reveal.style(), Reveal::VISIBLE_STYLE);
    }
}
