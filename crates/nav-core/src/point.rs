//! Planar position/velocity vector.
//!
//! `Point` uses `f64` throughout: environments are metre-scale (a 1 m box is
//! the canonical arena) and the motion model integrates many small steps, so
//! single precision would accumulate visible drift over long runs.
//!
//! One type serves both 1D and 2D environments.  In a 1D environment only
//! `x` is meaningful and `y` stays `0.0`; the owning `Environment` knows the
//! dimensionality and the per-axis helpers take it into account.

/// A position or velocity in environment coordinates (metres, metres/second).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length of the vector.
    #[inline]
    pub fn norm(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Straight-line distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other - self).norm()
    }

    #[inline]
    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// The vector rotated anticlockwise by `angle` radians.
    pub fn rotated(self, angle: f64) -> Point {
        let (sin, cos) = angle.sin_cos();
        Point {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    /// The vector scaled to unit length.  Returns `None` when the norm is
    /// too small to normalise meaningfully.
    pub fn normalized(self) -> Option<Point> {
        let n = self.norm();
        if n < 1e-12 {
            return None;
        }
        Some(Point::new(self.x / n, self.y / n))
    }

    /// A unit vector at `angle` radians from the positive x axis.
    #[inline]
    pub fn from_angle(angle: f64) -> Point {
        Point::new(angle.cos(), angle.sin())
    }
}

impl std::ops::Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f64> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}
