//! Quarter-turn rotation and point-preserving re-projection.
//!
//! Rotating changes which physical axis is "width", so re-fitting alone
//! recenters on the box, not on the content the user was looking at.
//! [`PinnedPoint`] remembers the image point under a screen point before a
//! change and yields the scroll offset that puts it back afterwards.

use crate::fit::{FitEngine, Placement};
use crate::geometry::Point;
use crate::image::Image;
use crate::orientation::Orientation;
use crate::viewport::Viewport;

/// Direction of a rotation step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

/// Rotate the image a quarter turn and re-run the active fitting.
pub fn rotate(
    direction: RotationDirection,
    engine: &mut FitEngine,
    viewport: &Viewport,
    image: &mut Image,
) -> Placement {
    let current = image.orientation();
    let next = match direction {
        RotationDirection::Clockwise => current.rotate_clockwise(),
        RotationDirection::CounterClockwise => current.rotate_counter_clockwise(),
    };
    image.set_orientation_to(next);
    tracing::debug!(from = current.degrees(), to = next.degrees(), "rotated");
    engine.update(viewport, image)
}

/// Rotate clockwise by a quarter turn.
pub fn rotate_clockwise(engine: &mut FitEngine, viewport: &Viewport, image: &mut Image) -> Placement {
    rotate(RotationDirection::Clockwise, engine, viewport, image)
}

/// Rotate counter-clockwise by a quarter turn.
pub fn rotate_counter_clockwise(
    engine: &mut FitEngine,
    viewport: &Viewport,
    image: &mut Image,
) -> Placement {
    rotate(RotationDirection::CounterClockwise, engine, viewport, image)
}

/// Screen point whose image content must stay put across a change.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Anchor {
    /// Center of the usable viewport area.
    #[default]
    Center,
    /// A viewport-relative point in device pixels, e.g. the cursor.
    At(Point),
}

impl Anchor {
    /// Viewport-relative device-pixel position for the current layout.
    pub fn resolve(self, viewport: &Viewport, image: &Image) -> Point {
        match self {
            Self::Center => viewport.usable(image).half(),
            Self::At(p) => p,
        }
    }
}

/// An image point captured under an anchor, independent of scale and rotation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PinnedPoint {
    /// Offset from the image center in unscaled, oriented pixels.
    offset: Point,
    orientation: Orientation,
}

impl PinnedPoint {
    /// Capture the image point under `anchor` for the current layout.
    ///
    /// `scroll` and `anchor` are device pixels; `scale` is the applied fit scale.
    pub fn capture(image: &Image, scale: f64, scroll: Point, anchor: Point) -> Self {
        let content = (scroll + anchor - image.position()) / scale;
        Self {
            offset: content - image.full().half(),
            orientation: image.orientation(),
        }
    }

    /// The captured point expressed in the image's natural (unrotated) frame,
    /// as an offset from the image center.
    pub fn natural_offset(&self) -> Point {
        self.orientation.inverse().rotate_offset(self.offset)
    }

    /// Scroll offset that puts the captured point back under `anchor`.
    ///
    /// Not clamped: the result may lie outside the scrollable range.
    pub fn scroll_for(&self, image: &Image, scale: f64, anchor: Point) -> Point {
        let delta = self.orientation.delta_to(image.orientation());
        let content = delta.rotate_offset(self.offset) + image.full().half();
        image.position() + content * scale - anchor
    }
}

/// Run `change` while keeping the image point under `anchor` in place.
///
/// Returns the placement from `change` (if it made one) and the unclamped
/// scroll target.
pub fn preserve_point<F>(
    anchor: Anchor,
    scroll: Point,
    engine: &mut FitEngine,
    viewport: &Viewport,
    image: &mut Image,
    change: F,
) -> Option<(Placement, Point)>
where
    F: FnOnce(&mut FitEngine, &Viewport, &mut Image) -> Option<Placement>,
{
    let before = anchor.resolve(viewport, image);
    let pinned = PinnedPoint::capture(image, engine.scale(), scroll, before);
    let placement = change(&mut *engine, viewport, &mut *image)?;
    let after = anchor.resolve(viewport, image);
    Some((placement, pinned.scroll_for(image, engine.scale(), after)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::FittingType;
    use crate::geometry::Extent;
    use crate::units::Dpr;
    use approx::assert_abs_diff_eq;

    fn viewport() -> Viewport {
        Viewport::new(Extent::new(1000.0, 800.0), Extent::ZERO, Dpr::ONE)
    }

    #[test]
    fn rotation_refits_swapped_dimensions() {
        let vp = viewport();
        let mut img = Image::new(2000, 1000).unwrap();
        let mut engine = FitEngine::default();
        engine.apply_fitting(FittingType::Fit, &vp, &mut img);

        let p = rotate_clockwise(&mut engine, &vp, &mut img);
        assert_eq!(img.orientation().quarter_turns(), 1);
        assert_eq!((img.full_width(), img.full_height()), (1000.0, 2000.0));
        assert_eq!(p.fitting, FittingType::Fit);
        assert_eq!(p.scale, 0.4);
        assert_eq!(img.size(), Extent::new(400.0, 800.0));
        assert_eq!((img.x(), img.y()), (300.0, 0.0));
    }

    #[test]
    fn counter_clockwise_wraps() {
        let vp = viewport();
        let mut img = Image::new(10, 20).unwrap();
        let mut engine = FitEngine::default();
        rotate_counter_clockwise(&mut engine, &vp, &mut img);
        assert_eq!(img.orientation().quarter_turns(), 3);
        rotate_clockwise(&mut engine, &vp, &mut img);
        assert!(img.orientation().is_identity());
    }

    #[test]
    fn anchor_center_uses_usable_area() {
        let vp = Viewport::new(
            Extent::new(1000.0, 800.0),
            Extent::new(20.0, 20.0),
            Dpr::ONE,
        );
        let mut img = Image::new(500, 5000).unwrap();
        img.set_width(500.0);
        img.set_height(5000.0);
        assert_eq!(Anchor::Center.resolve(&vp, &img), Point::new(490.0, 400.0));
        let cursor = Point::new(3.0, 4.0);
        assert_eq!(Anchor::At(cursor).resolve(&vp, &img), cursor);
    }

    #[test]
    fn pinned_point_survives_a_quarter_turn() {
        let vp = viewport();
        let mut img = Image::new(3000, 2000).unwrap();
        let mut engine = FitEngine::default();
        engine.apply_fitting(FittingType::Natural, &vp, &mut img);

        let (placement, scroll) = preserve_point(
            Anchor::Center,
            Point::new(200.0, 100.0),
            &mut engine,
            &vp,
            &mut img,
            |engine, vp, img| Some(rotate_clockwise(engine, vp, img)),
        )
        .unwrap();
        assert_eq!(placement.fitting, FittingType::Natural);
        // Natural (700, 500) lands at (2000 - 500, 700) in the rotated frame.
        assert_abs_diff_eq!(scroll.x, 1000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(scroll.y, 300.0, epsilon = 1e-9);
    }

    #[test]
    fn pinned_point_survives_a_scale_change() {
        let vp = viewport();
        let mut img = Image::new(2000, 1000).unwrap();
        let mut engine = FitEngine::default();
        engine.apply_fitting(FittingType::Fit, &vp, &mut img);

        let cursor = Point::new(250.0, 400.0);
        let pinned = PinnedPoint::capture(&img, engine.scale(), Point::ORIGIN, cursor);
        // Quarter of the way across a 1000px-wide image at 0.5 → x = 500 natural.
        assert_abs_diff_eq!(pinned.natural_offset().x, -500.0, epsilon = 1e-9);

        engine.apply_fitting(FittingType::Natural, &vp, &mut img);
        let scroll = pinned.scroll_for(&img, engine.scale(), cursor);
        assert_abs_diff_eq!(scroll.x + cursor.x - img.x(), 500.0, epsilon = 1e-9);
    }

    #[test]
    fn failed_change_yields_nothing() {
        let vp = viewport();
        let mut img = Image::new(100, 100).unwrap();
        let mut engine = FitEngine::default();
        let result = preserve_point(
            Anchor::Center,
            Point::ORIGIN,
            &mut engine,
            &vp,
            &mut img,
            |_, _, _| None,
        );
        assert!(result.is_none());
    }
}
