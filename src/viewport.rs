//! Window size model: full size, scrollbar thickness and usable size.

use serde::{Deserialize, Serialize};

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::geometry::{Extent, Point};
use crate::host::{Host, read_dpr};
use crate::image::Image;
use crate::units::Dpr;

/// Classic fixed scrollbar thickness in CSS pixels.
pub const CLASSIC_SCROLLBAR_CSS_PX: f64 = 17.0;

/// Where scrollbar thickness comes from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollbarMode {
    /// Ask the host to measure it with overflow forced to `scroll`.
    /// Tracks platform scrollbar styles, including zero-width overlays.
    #[default]
    Measured,
    /// Fixed thickness in CSS pixels.
    Fixed { width: f64, height: f64 },
}

impl ScrollbarMode {
    /// The classic 17 px constant on both axes.
    pub const fn classic() -> Self {
        Self::Fixed {
            width: CLASSIC_SCROLLBAR_CSS_PX,
            height: CLASSIC_SCROLLBAR_CSS_PX,
        }
    }
}

/// Window geometry in device pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    full: Extent,
    /// `width` = vertical scrollbar width, `height` = horizontal scrollbar height.
    scrollbar: Extent,
    dpr: Dpr,
}

impl Viewport {
    /// A viewport with known device-pixel size and scrollbar thickness.
    pub fn new(full: Extent, scrollbar: Extent, dpr: Dpr) -> Self {
        Self {
            full,
            scrollbar,
            dpr,
        }
    }

    /// Measure the window through `host`.
    pub fn measured(host: &impl Host, scrollbar: ScrollbarMode) -> Self {
        let mut viewport = Self::new(Extent::ZERO, Extent::ZERO, Dpr::ONE);
        viewport.measure(host, scrollbar);
        viewport
    }

    /// Re-read window size, DPR and scrollbar thickness from `host`.
    ///
    /// Must run before any fit computation that depends on window size.
    pub fn measure(&mut self, host: &impl Host, scrollbar: ScrollbarMode) {
        let dpr = read_dpr(host);
        let (css_w, css_h) = host.visual_viewport();
        let (bar_w, bar_h) = match scrollbar {
            ScrollbarMode::Measured => host.scrollbar_thickness(),
            ScrollbarMode::Fixed { width, height } => (width, height),
        };
        self.dpr = dpr;
        self.full = Extent::new(dpr.to_device_pixels(css_w), dpr.to_device_pixels(css_h));
        self.scrollbar = Extent::new(
            dpr.to_device_pixels(bar_w).max(0.0),
            dpr.to_device_pixels(bar_h).max(0.0),
        );
        tracing::debug!(
            width = self.full.width,
            height = self.full.height,
            scrollbar_w = self.scrollbar.width,
            scrollbar_h = self.scrollbar.height,
            dpr = dpr.get(),
            "viewport measured"
        );
    }

    /// Full window size in device pixels.
    pub fn full(&self) -> Extent {
        self.full
    }

    /// Full window width in device pixels.
    pub fn full_width(&self) -> f64 {
        self.full.width
    }

    /// Full window height in device pixels.
    pub fn full_height(&self) -> f64 {
        self.full.height
    }

    /// Scrollbar thickness in device pixels.
    pub fn scrollbar(&self) -> Extent {
        self.scrollbar
    }

    /// Ratio in effect at the last measurement.
    pub fn dpr(&self) -> Dpr {
        self.dpr
    }

    /// `full_width / full_height`.
    pub fn ratio(&self) -> f64 {
        self.full.width / self.full.height
    }

    /// A horizontal scrollbar is showing: the displayed image is wider than the window.
    pub fn overflows_horizontally(&self, image: &Image) -> bool {
        self.full.width < image.width().round()
    }

    /// A vertical scrollbar is showing: the displayed image is taller than the window.
    pub fn overflows_vertically(&self, image: &Image) -> bool {
        self.full.height < image.height().round()
    }

    /// Whether the displayed image overflows on either axis.
    pub fn overflows(&self, image: &Image) -> bool {
        self.overflows_horizontally(image) || self.overflows_vertically(image)
    }

    /// Width left over once a vertical scrollbar (if any) takes its share.
    pub fn usable_width(&self, image: &Image) -> f64 {
        if self.overflows_vertically(image) {
            self.full.width - self.scrollbar.width
        } else {
            self.full.width
        }
    }

    /// Height left over once a horizontal scrollbar (if any) takes its share.
    pub fn usable_height(&self, image: &Image) -> f64 {
        if self.overflows_horizontally(image) {
            self.full.height - self.scrollbar.height
        } else {
            self.full.height
        }
    }

    /// Both usable dimensions.
    pub fn usable(&self, image: &Image) -> Extent {
        Extent::new(self.usable_width(image), self.usable_height(image))
    }

    /// Largest scroll offset the document allows with the image as its only content.
    pub fn max_scroll(&self, image: &Image) -> Point {
        let usable = self.usable(image);
        Point::new(
            (image.x() + image.width() - usable.width).max(0.0),
            (image.y() + image.height() - usable.height).max(0.0),
        )
    }

    /// Clamp a scroll offset into `0..=max_scroll`.
    pub fn clamp_scroll(&self, image: &Image, scroll: Point) -> Point {
        let max = self.max_scroll(image);
        Point::new(scroll.x.max(0.0).min(max.x), scroll.y.max(0.0).min(max.y))
    }
}
