//! Screen and device descriptor.
//!
//! Used by the download sheet to recommend a resolution variant that covers the
//! device's physical pixels.

/// Broad device class derived from the logical screen width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    Mobile,
    Tablet,
    Desktop,
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Mobile => "Mobile",
            Self::Tablet => "Tablet",
            Self::Desktop => "Desktop",
        };
        f.write_str(label)
    }
}

/// Logical screen size plus pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenInfo {
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f64,
    pub device_type: DeviceType,
}

impl ScreenInfo {
    /// Builds a descriptor, classifying the device by logical width.
    ///
    /// Non-positive or non-finite ratios are treated as `1.0`.
    #[must_use]
    pub fn new(width: u32, height: u32, pixel_ratio: f64) -> Self {
        let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };

        let device_type = if width <= 768 {
            DeviceType::Mobile
        } else if width <= 1024 {
            DeviceType::Tablet
        } else {
            DeviceType::Desktop
        };

        Self {
            width,
            height,
            pixel_ratio,
            device_type,
        }
    }

    /// Physical pixel dimensions, `round(logical * ratio)`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn physical_pixels(&self) -> (u32, u32) {
        let scale = |v: u32| (f64::from(v) * self.pixel_ratio).round() as u32;
        (scale(self.width), scale(self.height))
    }

    /// One-line description, e.g. `Desktop • 3840x2160 (2x DPI)`.
    #[must_use]
    pub fn describe(&self) -> String {
        let (w, h) = self.physical_pixels();
        format!("{} • {w}x{h} ({}x DPI)", self.device_type, self.pixel_ratio)
    }
}

impl Default for ScreenInfo {
    fn default() -> Self {
        Self::new(1920, 1080, 1.0)
    }
}
