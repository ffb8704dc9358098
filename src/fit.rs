//! Fitting strategies: fit, fill (cover), natural and the load-time initial mode.
//!
//! All decisions compare the orientation-adjusted natural size of the image
//! against the full viewport size, never against the currently displayed
//! (possibly already scaled) size.
//!
//! # Example
//!
//! ```
//! use fitview::{Dpr, Extent, FitEngine, FittingType, Image, Viewport};
//!
//! let viewport = Viewport::new(Extent::new(1000.0, 800.0), Extent::ZERO, Dpr::ONE);
//! let mut image = Image::new(2000, 1000).unwrap();
//! let mut engine = FitEngine::default();
//!
//! let placement = engine.apply_fitting(FittingType::Fit, &viewport, &mut image);
//! assert_eq!(placement.scale, 0.5);
//! assert_eq!(image.size(), Extent::new(1000.0, 500.0));
//! assert_eq!((image.x(), image.y()), (0.0, 150.0));
//! ```

use serde::{Deserialize, Serialize};

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::geometry::Extent;
use crate::image::Image;
use crate::viewport::Viewport;
use crate::zoom::{ZoomDirection, ZoomLadder};

/// How the image is sized against the window.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FittingType {
    /// Contain: the whole image is visible.
    Fit,
    /// Cover: the window is filled, the overflowing axis is panned.
    Fill,
    /// Natural size, scaled by the current zoom factor.
    Natural,
    /// Fit if the image is larger than the window, otherwise natural.
    /// Only used at load.
    #[default]
    Initial,
}

/// Comparison used by the fill predicates at the exact-fit boundary.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    /// `<`: an exact cover that equals a fit is not offered as fill.
    #[default]
    Strict,
    /// `<=`.
    Inclusive,
}

impl Boundary {
    fn less(self, a: f64, b: f64) -> bool {
        match self {
            Self::Strict => a < b,
            Self::Inclusive => a <= b,
        }
    }
}

/// Tie-break rules for the fill computation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FitRules {
    pub boundary: Boundary,
    /// Subtract the scrollbar that the overflowing axis will show from the
    /// pinned axis before comparing and scaling.
    pub reserve_scrollbar: bool,
}

impl Default for FitRules {
    fn default() -> Self {
        Self {
            boundary: Boundary::Strict,
            reserve_scrollbar: true,
        }
    }
}

impl FitRules {
    /// Space held back for scrollbars while filling.
    pub fn reserve(&self, viewport: &Viewport) -> Extent {
        if self.reserve_scrollbar {
            viewport.scrollbar()
        } else {
            Extent::ZERO
        }
    }

    /// Pinning height to the window makes the image wider than the window.
    pub fn fill_height_available(&self, viewport: &Viewport, image: &Image) -> bool {
        let reserve = self.reserve(viewport);
        let width = ((viewport.full_height() - reserve.height) * image.full_width()
            / image.full_height())
        .round();
        self.boundary.less(viewport.full_width(), width)
    }

    /// Pinning width to the window makes the image taller than the window.
    pub fn fill_width_available(&self, viewport: &Viewport, image: &Image) -> bool {
        let reserve = self.reserve(viewport);
        let height = ((viewport.full_width() - reserve.width) * image.full_height()
            / image.full_width())
        .round();
        self.boundary.less(viewport.full_height(), height)
    }

    /// Covering the window crops something, so fill differs from fit.
    pub fn fill_available(&self, viewport: &Viewport, image: &Image) -> bool {
        self.fill_width_available(viewport, image) || self.fill_height_available(viewport, image)
    }
}

/// The image is larger than the window on some axis, so fitting would shrink it.
pub fn fit_available(viewport: &Viewport, image: &Image) -> bool {
    viewport.full_width() < image.full_width() || viewport.full_height() < image.full_height()
}

/// Pinning height to the window keeps the width inside the window.
///
/// Picks the driving axis for [`FittingType::Fit`].
pub fn fit_height_available(viewport: &Viewport, image: &Image) -> bool {
    viewport.full_width()
        > (viewport.full_height() * image.full_width() / image.full_height()).round()
}

/// Outcome of one fit pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// The fitting actually applied after degrading unavailable modes.
    pub fitting: FittingType,
    /// Displayed size / natural size.
    pub scale: f64,
    /// Whether drag panning should be armed.
    pub pan: bool,
}

/// Applies fitting strategies to an [`Image`] inside a [`Viewport`].
#[derive(Clone, Debug)]
pub struct FitEngine {
    requested: FittingType,
    active: FittingType,
    zoom: f64,
    scale: f64,
    pan: bool,
    rules: FitRules,
    ladder: ZoomLadder,
}

impl Default for FitEngine {
    fn default() -> Self {
        Self::new(FitRules::default(), ZoomLadder::default())
    }
}

impl FitEngine {
    /// An engine that has not placed anything yet; the first request is Initial.
    pub fn new(rules: FitRules, ladder: ZoomLadder) -> Self {
        Self {
            requested: FittingType::Initial,
            active: FittingType::Natural,
            zoom: 1.0,
            scale: 1.0,
            pan: false,
            rules,
            ladder,
        }
    }

    /// The fitting last asked for.
    pub fn requested(&self) -> FittingType {
        self.requested
    }

    /// The fitting in effect after the last pass.
    pub fn active(&self) -> FittingType {
        self.active
    }

    /// Zoom factor used by [`FittingType::Natural`].
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Scale applied by the last pass.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Whether the last pass left the image pannable.
    pub fn pan_enabled(&self) -> bool {
        self.pan
    }

    /// Fill boundary and scrollbar reservation in use.
    pub fn rules(&self) -> FitRules {
        self.rules
    }

    /// Presets used by [`step_zoom`](Self::step_zoom) and [`set_zoom`](Self::set_zoom).
    pub fn ladder(&self) -> &ZoomLadder {
        &self.ladder
    }

    /// Select a fitting and apply it. Resets the zoom factor to 1.
    pub fn apply_fitting(
        &mut self,
        fitting: FittingType,
        viewport: &Viewport,
        image: &mut Image,
    ) -> Placement {
        self.requested = fitting;
        self.zoom = 1.0;
        self.update(viewport, image)
    }

    /// Re-evaluate the requested fitting against the current viewport and orientation.
    pub fn update(&mut self, viewport: &Viewport, image: &mut Image) -> Placement {
        let active = self.resolve(self.requested, viewport, image);
        let scale = self.scale_for(active, viewport, image);

        image.set_width(image.full_width() * scale);
        image.set_height(image.full_height() * scale);

        if active == FittingType::Fill {
            image.set_x(0.0);
            image.set_y(0.0);
        } else {
            let usable = viewport.usable(image);
            image.set_x((usable.width - image.width()) / 2.0);
            image.set_y((usable.height - image.height()) / 2.0);
        }

        let pan = match active {
            FittingType::Fill => true,
            FittingType::Fit => false,
            FittingType::Natural | FittingType::Initial => viewport.overflows(image),
        };

        self.active = active;
        self.scale = scale;
        self.pan = pan;

        tracing::debug!(
            requested = ?self.requested,
            active = ?active,
            scale,
            pan,
            "fitting applied"
        );

        Placement {
            fitting: active,
            scale,
            pan,
        }
    }

    /// Step to the next preset zoom factor from the current scale.
    ///
    /// Switches to [`FittingType::Natural`]. Returns `None` at either end of
    /// the ladder, leaving everything untouched.
    pub fn step_zoom(
        &mut self,
        direction: ZoomDirection,
        viewport: &Viewport,
        image: &mut Image,
    ) -> Option<Placement> {
        let next = match direction {
            ZoomDirection::In => self.ladder.next_above(self.scale),
            ZoomDirection::Out => self.ladder.next_below(self.scale),
        }?;
        self.requested = FittingType::Natural;
        self.zoom = next;
        Some(self.update(viewport, image))
    }

    /// Show the image at the preset zoom factor closest to `factor`.
    pub fn set_zoom(&mut self, factor: f64, viewport: &Viewport, image: &mut Image) -> Placement {
        self.requested = FittingType::Natural;
        self.zoom = self.ladder.nearest(factor);
        self.update(viewport, image)
    }

    /// Degrade unavailable modes to natural size and settle the initial mode.
    pub fn resolve(&self, fitting: FittingType, viewport: &Viewport, image: &Image) -> FittingType {
        match fitting {
            FittingType::Initial if fit_available(viewport, image) => FittingType::Fit,
            FittingType::Initial => FittingType::Natural,
            FittingType::Fit if !fit_available(viewport, image) => FittingType::Natural,
            FittingType::Fill if !self.rules.fill_available(viewport, image) => {
                FittingType::Natural
            }
            other => other,
        }
    }

    fn scale_for(&self, fitting: FittingType, viewport: &Viewport, image: &Image) -> f64 {
        match fitting {
            FittingType::Fit => {
                if fit_height_available(viewport, image) {
                    viewport.full_height() / image.full_height()
                } else {
                    viewport.full_width() / image.full_width()
                }
            }
            FittingType::Fill => {
                let reserve = self.rules.reserve(viewport);
                if self.rules.fill_height_available(viewport, image) {
                    (viewport.full_height() - reserve.height) / image.full_height()
                } else {
                    (viewport.full_width() - reserve.width) / image.full_width()
                }
            }
            FittingType::Natural | FittingType::Initial => self.zoom,
        }
    }
}
