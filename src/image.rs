//! Displayed image model: natural size, orientation, size and position.
//!
//! The element is rotated by a CSS transform, which swaps the visual axes
//! without swapping the box's own `width`/`height` properties. Everything
//! here speaks in visual axes and redirects to the box axes internally.

use alloc::string::{String, ToString};

use crate::error::{Result, ViewerError};
use crate::geometry::{Extent, Point, Size};
use crate::host::{ElementStyle, ImageElement};
use crate::orientation::Orientation;
use crate::units::Dpr;

/// The image being viewed.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    natural: Size,
    orientation: Orientation,
    /// Last assigned size per CSS box axis (not per visual axis).
    element: Extent,
    position: Point,
}

impl Image {
    /// Model an image with the given intrinsic size.
    ///
    /// Zero-sized images are rejected: every fit computation divides by
    /// the natural dimensions.
    pub fn new(natural_width: u32, natural_height: u32) -> Result<Self> {
        let natural = Size::new(natural_width, natural_height);
        if natural.is_empty() {
            return Err(ViewerError::ZeroImageDimension {
                width: natural_width,
                height: natural_height,
            });
        }
        Ok(Self {
            natural,
            orientation: Orientation::IDENTITY,
            element: natural.to_extent(),
            position: Point::ORIGIN,
        })
    }

    /// Model the document's image element. Fails fast on anything else.
    pub fn from_element(element: &impl ImageElement) -> Result<Self> {
        let tag = element.tag_name();
        if !tag.eq_ignore_ascii_case("img") {
            return Err(ViewerError::NotAnImage {
                tag: tag.to_string(),
            });
        }
        let (w, h) = element.natural_size();
        Self::new(w, h)
    }

    /// Intrinsic size, independent of orientation.
    pub fn natural(&self) -> Size {
        self.natural
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Set the rotation in clockwise quarter turns (taken mod 4).
    pub fn set_orientation(&mut self, quarter_turns: i32) {
        self.orientation = Orientation::from_quarter_turns(quarter_turns);
    }

    pub(crate) fn set_orientation_to(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Whether the visual axes are swapped relative to the element's box.
    pub fn is_axis_swapped(&self) -> bool {
        self.orientation.swaps_axes()
    }

    /// Natural size with the current orientation applied.
    pub fn full(&self) -> Extent {
        self.orientation.transform_extent(self.natural.to_extent())
    }

    /// Visual width at 100 %: the quantity all fit decisions compare against.
    pub fn full_width(&self) -> f64 {
        self.full().width
    }

    /// Visual height at 100 %.
    pub fn full_height(&self) -> f64 {
        self.full().height
    }

    /// `full_width / full_height`.
    pub fn ratio(&self) -> f64 {
        self.full_width() / self.full_height()
    }

    /// Displayed visual width in device pixels.
    pub fn width(&self) -> f64 {
        if self.is_axis_swapped() {
            self.element.height
        } else {
            self.element.width
        }
    }

    /// Displayed visual height in device pixels.
    pub fn height(&self) -> f64 {
        if self.is_axis_swapped() {
            self.element.width
        } else {
            self.element.height
        }
    }

    /// Displayed visual size.
    pub fn size(&self) -> Extent {
        Extent::new(self.width(), self.height())
    }

    /// Set the displayed visual width. Negative values clamp to 0.
    pub fn set_width(&mut self, value: f64) {
        let value = value.max(0.0);
        if self.is_axis_swapped() {
            self.element.height = value;
        } else {
            self.element.width = value;
        }
    }

    /// Set the displayed visual height. Negative values clamp to 0.
    pub fn set_height(&mut self, value: f64) {
        let value = value.max(0.0);
        if self.is_axis_swapped() {
            self.element.width = value;
        } else {
            self.element.height = value;
        }
    }

    /// The element's own box size, before the rotation transform.
    pub fn element_box(&self) -> Extent {
        self.element
    }

    /// Left offset in device pixels.
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Top offset in device pixels.
    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Clamped to ≥ 0 so the image never detaches from the top-left anchor.
    pub fn set_x(&mut self, value: f64) {
        self.position.x = value.max(0.0);
    }

    /// Clamped to ≥ 0.
    pub fn set_y(&mut self, value: f64) {
        self.position.y = value.max(0.0);
    }

    /// Inline style carrying the current state, converted to CSS pixels.
    pub fn style(&self, dpr: Dpr) -> ElementStyle {
        ElementStyle {
            width: dpr.to_css_string(self.element.width),
            height: dpr.to_css_string(self.element.height),
            left: dpr.to_css_string(self.position.x),
            top: dpr.to_css_string(self.position.y),
            class: self.css_class(),
        }
    }

    fn css_class(&self) -> String {
        self.orientation.css_class().to_string()
    }
}
