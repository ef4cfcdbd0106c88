//! Responsive breakpoints.

use serde::{Deserialize, Serialize};

pub const MOBILE_MAX_WIDTH: f64 = 768.0;
pub const TABLET_MAX_WIDTH: f64 = 1024.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn device_class(&self) -> DeviceClass {
        if self.width < MOBILE_MAX_WIDTH {
            DeviceClass::Mobile
        } else if self.width < TABLET_MAX_WIDTH {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.device_class() == DeviceClass::Mobile
    }

    pub fn is_tablet(&self) -> bool {
        self.device_class() == DeviceClass::Tablet
    }

    pub fn is_desktop(&self) -> bool {
        self.device_class() == DeviceClass::Desktop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoints() {
        assert_eq!(Viewport::new(375.0, 800.0).device_class(), DeviceClass::Mobile);
        assert_eq!(Viewport::new(767.9, 800.0).device_class(), DeviceClass::Mobile);
        assert_eq!(Viewport::new(768.0, 800.0).device_class(), DeviceClass::Tablet);
        assert_eq!(Viewport::new(1023.0, 800.0).device_class(), DeviceClass::Tablet);
        assert_eq!(Viewport::new(1024.0, 800.0).device_class(), DeviceClass::Desktop);
    }

    #[test]
    fn test_exactly_one_class() {
        for width in [320.0, 768.0, 1440.0] {
            let v = Viewport::new(width, 900.0);
            let flags = [v.is_mobile(), v.is_tablet(), v.is_desktop()];
            assert_eq!(flags.iter().filter(|f| **f).count(), 1);
        }
    }
}
