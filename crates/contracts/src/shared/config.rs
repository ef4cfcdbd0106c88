//! Site configuration.
//!
//! The frontend embeds `site.toml` at build time. Every key is optional; a
//! missing key falls back to the value in [`DEFAULT_CONFIG`].

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct SiteConfig {
    pub contact: ContactConfig,
    pub services: ServicesConfig,
    pub scroll: ScrollConfig,
    pub notifications: NotificationConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ContactConfig {
    /// Recipient of the `mailto:` link.
    pub recipient: String,
    /// Delay between the success toast and opening the mail client.
    pub redirect_delay_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServicesConfig {
    pub swipe_threshold_px: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScrollConfig {
    /// Height of the fixed navbar; smooth-scroll stops this far above a section.
    pub nav_offset_px: f64,
    /// Navbar gets its shadow once the page scrolls past this.
    pub shadow_threshold_px: f64,
    /// A section counts as current this far before its top reaches the viewport.
    pub active_section_offset_px: f64,
    pub parallax_factor: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NotificationConfig {
    pub visible_ms: u32,
    pub exit_ms: u32,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[contact]
recipient = "metta.engenharias@gmail.com"
redirect_delay_ms = 1500

[services]
swipe_threshold_px = 50.0

[scroll]
nav_offset_px = 80.0
shadow_threshold_px = 50.0
active_section_offset_px = 200.0
parallax_factor = 0.3

[notifications]
visible_ms = 3000
exit_ms = 300
"#;

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient: "metta.engenharias@gmail.com".to_string(),
            redirect_delay_ms: 1500,
        }
    }
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_px: crate::shared::input::DEFAULT_SWIPE_THRESHOLD_PX,
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            nav_offset_px: 80.0,
            shadow_threshold_px: 50.0,
            active_section_offset_px: 200.0,
            parallax_factor: 0.3,
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            visible_ms: 3000,
            exit_ms: 300,
        }
    }
}

impl SiteConfig {
    fn validate(self) -> Result<Self, ConfigError> {
        if self.contact.recipient.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "contact.recipient",
                reason: "must not be empty".to_string(),
            });
        }
        if !(self.services.swipe_threshold_px.is_finite() && self.services.swipe_threshold_px >= 0.0) {
            return Err(ConfigError::Invalid {
                key: "services.swipe_threshold_px",
                reason: format!("expected a non-negative number, got {}", self.services.swipe_threshold_px),
            });
        }
        Ok(self)
    }
}

/// Parse and validate a TOML document.
pub fn parse_config(source: &str) -> Result<SiteConfig, ConfigError> {
    let config: SiteConfig = toml::from_str(source)?;
    config.validate()
}

/// Load configuration
///
/// Uses `source` when given, otherwise the embedded default.
pub fn load_config(source: Option<&str>) -> anyhow::Result<SiteConfig> {
    let config = parse_config(source.unwrap_or(DEFAULT_CONFIG))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.contact.recipient, "metta.engenharias@gmail.com");
        assert_eq!(config.services.swipe_threshold_px, 50.0);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_config(
            r#"
[contact]
recipient = "contato@montevi.com.br"
"#,
        )
        .unwrap();
        assert_eq!(config.contact.recipient, "contato@montevi.com.br");
        assert_eq!(config.contact.redirect_delay_ms, 1500);
        assert_eq!(config.scroll, ScrollConfig::default());
    }

    #[test]
    fn test_empty_source_is_default() {
        assert_eq!(parse_config("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            parse_config("[contact]\nrecipient = \"  \""),
            Err(ConfigError::Invalid { key: "contact.recipient", .. })
        ));
        assert!(matches!(
            parse_config("[services]\nswipe_threshold_px = -1.0"),
            Err(ConfigError::Invalid { .. })
        ));
        assert!(matches!(
            parse_config("[scroll]\nnav_offset_px = \"eighty\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
