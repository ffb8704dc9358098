//! Quarter-turn orientation (the cyclic group Z4) and exact offset rotation.

use core::fmt;

use crate::geometry::{Extent, Point};

/// Clockwise rotation of the displayed image in 90-degree steps.
///
/// Only the presentation rotates; pixel data is untouched. An external
/// stylesheet keys the actual CSS transform on [`css_class`](Self::css_class).
///
/// ```text
///     0: Identity    1: Rotate90    2: Rotate180   3: Rotate270
///     ┌───┐          ┌────┐         ┌───┐          ┌────┐
///     │ F │          │  F │         │   │          │ Ⅎ  │
///     │   │          └────┘         │ Ⅎ │          └────┘
///     └───┘                         └───┘
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Orientation {
    turns: u8,
}

impl Orientation {
    /// No rotation.
    pub const IDENTITY: Self = Self { turns: 0 };
    /// 90° clockwise.
    pub const ROTATE_90: Self = Self { turns: 1 };
    /// 180°.
    pub const ROTATE_180: Self = Self { turns: 2 };
    /// 270° clockwise (90° counter-clockwise).
    pub const ROTATE_270: Self = Self { turns: 3 };

    /// All 4 elements, indexed by quarter turns.
    pub const ALL: [Self; 4] = [
        Self::IDENTITY,
        Self::ROTATE_90,
        Self::ROTATE_180,
        Self::ROTATE_270,
    ];

    /// Create from any number of clockwise quarter turns (negative = counter-clockwise).
    pub fn from_quarter_turns(turns: i32) -> Self {
        Self {
            turns: turns.rem_euclid(4) as u8,
        }
    }

    /// Clockwise quarter turns, always in `0..4`.
    pub fn quarter_turns(self) -> u8 {
        self.turns
    }

    /// Rotation angle in degrees.
    pub fn degrees(self) -> u16 {
        u16::from(self.turns) * 90
    }

    /// Whether this is the identity rotation.
    pub fn is_identity(self) -> bool {
        self.turns == 0
    }

    /// Whether this orientation swaps width and height.
    pub fn swaps_axes(self) -> bool {
        self.turns % 2 == 1
    }

    /// One more quarter turn clockwise.
    #[must_use]
    pub fn rotate_clockwise(self) -> Self {
        self.compose(Self::ROTATE_90)
    }

    /// One quarter turn counter-clockwise.
    #[must_use]
    pub fn rotate_counter_clockwise(self) -> Self {
        self.compose(Self::ROTATE_270)
    }

    /// Apply `self` first, then `other`.
    pub fn compose(self, other: Self) -> Self {
        Self {
            turns: (self.turns + other.turns) & 3,
        }
    }

    /// The inverse rotation: `self.compose(self.inverse()) == IDENTITY`.
    pub fn inverse(self) -> Self {
        Self {
            turns: (4 - self.turns) & 3,
        }
    }

    /// The rotation that takes `self` to `target`.
    pub fn delta_to(self, target: Self) -> Self {
        self.inverse().compose(target)
    }

    /// Display extent of a box with this orientation.
    pub fn transform_extent(self, extent: Extent) -> Extent {
        if self.swaps_axes() {
            extent.transposed()
        } else {
            extent
        }
    }

    /// Rotate an offset from the image center clockwise by this orientation.
    ///
    /// Screen coordinates grow downwards, so a quarter turn maps
    /// `(x, y)` to `(-y, x)`. Exact for every input: no trigonometry.
    pub fn rotate_offset(self, p: Point) -> Point {
        match self.turns {
            0 => p,
            1 => Point::new(-p.y, p.x),
            2 => Point::new(-p.x, -p.y),
            3 => Point::new(p.y, -p.x),
            _ => unreachable!(),
        }
    }

    /// Class name the viewer stylesheet uses to select the rotation transform.
    pub fn css_class(self) -> CssClass {
        CssClass(self)
    }
}

/// Displays as `orientation-{0..3}`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CssClass(Orientation);

impl fmt::Display for CssClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "orientation-{}", self.0.turns)
    }
}
