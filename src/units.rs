//! Conversion between CSS pixels and device pixels.

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::geometry::Point;

/// Device pixel ratio: physical pixels per CSS pixel.
///
/// Always finite and positive. Layout runs in device pixels so repeated
/// reads of rendered geometry never round twice; values are turned back
/// into CSS pixels only for element styles and scroll offsets.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Dpr(f64);

impl Dpr {
    /// 1 device pixel per CSS pixel.
    pub const ONE: Self = Self(1.0);

    /// Create from a host-reported ratio. Returns `None` for zero,
    /// negative or non-finite values.
    pub fn new(ratio: f64) -> Option<Self> {
        (ratio.is_finite() && ratio > 0.0).then_some(Self(ratio))
    }

    /// Like [`new`](Self::new), falling back to 1 for unusable values.
    pub fn or_one(ratio: f64) -> Self {
        Self::new(ratio).unwrap_or_else(|| {
            tracing::warn!(ratio, "unusable device pixel ratio, assuming 1");
            Self::ONE
        })
    }

    /// The raw ratio.
    pub fn get(self) -> f64 {
        self.0
    }

    /// `round(css × dpr)`.
    pub fn to_device_pixels(self, css: f64) -> f64 {
        (css * self.0).round()
    }

    /// `device / dpr`.
    pub fn to_css_pixels(self, device: f64) -> f64 {
        device / self.0
    }

    /// Scale a CSS-pixel position to device pixels.
    ///
    /// Not rounded: scroll offsets and pointer positions are fractional, and
    /// rounding them here would shift a drag by up to half a device pixel.
    pub fn point_to_device(self, css: Point) -> Point {
        css * self.0
    }

    /// [`to_css_pixels`](Self::to_css_pixels) on both coordinates.
    pub fn point_to_css(self, device: Point) -> Point {
        Point::new(self.to_css_pixels(device.x), self.to_css_pixels(device.y))
    }

    /// CSS length string for a device-pixel value, e.g. `"250px"`.
    pub fn to_css_string(self, device: f64) -> String {
        format!("{}px", self.to_css_pixels(device))
    }
}

impl Default for Dpr {
    fn default() -> Self {
        Self::ONE
    }
}
