//! Plain geometry value types shared by the viewport, image and fit modules.
//!
//! Integral sizes describe intrinsic image pixels. Everything that has been
//! scaled, centered or scrolled is fractional device pixels.

/// Width × height dimensions in whole pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether either side is zero.
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Fractional view of this size.
    pub fn to_extent(self) -> Extent {
        Extent::new(self.width as f64, self.height as f64)
    }
}

/// Width × height in fractional device pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    /// Zero-sized extent.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new extent.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Same extent with the axes exchanged.
    pub const fn transposed(self) -> Self {
        Self::new(self.height, self.width)
    }

    /// Half of each side; the center of a box anchored at the origin.
    pub fn half(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A point or offset in fractional pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl core::ops::Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl core::ops::Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl core::ops::Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl core::ops::Div<f64> for Point {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_is_empty_when_either_side_is_zero() {
        assert!(Size::new(0, 10).is_empty());
        assert!(Size::new(10, 0).is_empty());
        assert!(!Size::new(1, 1).is_empty());
    }

    #[test]
    fn extent_half_is_center() {
        assert_eq!(Extent::new(300.0, 120.0).half(), Point::new(150.0, 60.0));
    }

    #[test]
    fn point_arithmetic() {
        let p = Point::new(10.0, 4.0);
        assert_eq!(p + Point::new(1.0, 1.0), Point::new(11.0, 5.0));
        assert_eq!(p - Point::new(10.0, 4.0), Point::ORIGIN);
        assert_eq!(p * 0.5, Point::new(5.0, 2.0));
        assert_eq!(p / 2.0, Point::new(5.0, 2.0));
    }
}
