//! Scroll-driven effects: navbar shadow, current-section highlighting,
//! hero parallax and anchor smooth-scroll targets.

use crate::shared::config::ScrollConfig;

pub const NAVBAR_SHADOW: &str = "0 2px 10px rgba(10, 36, 99, 0.1)";

/// A `section[id]` and its document offset.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub offset_top: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, offset_top: f64) -> Self {
        Self {
            id: id.into(),
            offset_top,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollEffects {
    config: ScrollConfig,
}

impl ScrollEffects {
    pub fn new(config: ScrollConfig) -> Self {
        Self { config }
    }

    /// `box-shadow` value for the navbar.
    pub fn navbar_shadow(&self, scroll_y: f64) -> &'static str {
        if scroll_y > self.config.shadow_threshold_px {
            NAVBAR_SHADOW
        } else {
            "none"
        }
    }

    /// Id of the last section, in document order, whose top is within the
    /// activation offset of `scroll_y`.
    pub fn active_section<'a>(&self, sections: &'a [Section], scroll_y: f64) -> Option<&'a str> {
        sections
            .iter()
            .rev()
            .find(|s| scroll_y >= s.offset_top - self.config.active_section_offset_px)
            .map(|s| s.id.as_str())
    }

    pub fn parallax_offset(&self, scroll_y: f64) -> f64 {
        scroll_y * self.config.parallax_factor
    }

    pub fn parallax_transform(&self, scroll_y: f64) -> String {
        translate_y(self.parallax_offset(scroll_y))
    }

    /// Where to scroll for an in-page anchor. `None` means the click should
    /// keep its default behavior.
    pub fn smooth_scroll_target(&self, href: &str, offset_top: f64) -> Option<f64> {
        anchor_target(href)?;
        Some(offset_top - self.config.nav_offset_px)
    }
}

impl Default for ScrollEffects {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

/// CSS `transform` for a vertical shift.
pub fn translate_y(offset_px: f64) -> String {
    format!("translateY({offset_px}px)")
}

/// Fragment of an in-page anchor (`"#contato"` → `"contato"`). Bare `"#"` and
/// external links have none.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn nav_link_is_active(href: &str, current: Option<&str>) -> bool {
    match (anchor_target(href), current) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<Section> {
        vec![
            Section::new("inicio", 0.0),
            Section::new("servicos", 700.0),
            Section::new("portfolio", 1500.0),
            Section::new("contato", 2400.0),
        ]
    }

    #[test]
    fn test_navbar_shadow() {
        let fx = ScrollEffects::default();
        assert_eq!(fx.navbar_shadow(0.0), "none");
        assert_eq!(fx.navbar_shadow(50.0), "none");
        assert_eq!(fx.navbar_shadow(51.0), NAVBAR_SHADOW);
    }

    #[test]
    fn test_active_section() {
        let fx = ScrollEffects::default();
        let sections = sections();
        assert_eq!(fx.active_section(&sections, 0.0), Some("inicio"));
        assert_eq!(fx.active_section(&sections, 499.0), Some("inicio"));
        assert_eq!(fx.active_section(&sections, 500.0), Some("servicos"));
        assert_eq!(fx.active_section(&sections, 5000.0), Some("contato"));
        assert_eq!(fx.active_section(&[], 100.0), None);
    }

    #[test]
    fn test_active_section_before_first() {
        let fx = ScrollEffects::default();
        let sections = vec![Section::new("servicos", 800.0)];
        assert_eq!(fx.active_section(&sections, 100.0), None);
    }

    #[test]
    fn test_nav_link_matching() {
        assert!(nav_link_is_active("#servicos", Some("servicos")));
        assert!(!nav_link_is_active("#servicos", Some("contato")));
        assert!(!nav_link_is_active("#servicos", None));
        assert!(!nav_link_is_active("#", Some("")));
    }

    #[test]
    fn test_parallax() {
        let fx = ScrollEffects::default();
        assert!((fx.parallax_offset(100.0) - 30.0).abs() < 1e-9);
        assert_eq!(fx.parallax_transform(0.0), "translateY(0px)");
        assert_eq!(translate_y(12.5), "translateY(12.5px)");
    }

    #[test]
    fn test_smooth_scroll_target() {
        let fx = ScrollEffects::default();
        assert_eq!(fx.smooth_scroll_target("#contato", 2400.0), Some(2320.0));
        assert_eq!(fx.smooth_scroll_target("#", 0.0), None);
        assert_eq!(fx.smooth_scroll_target("https://example.com", 0.0), None);
    }
}
