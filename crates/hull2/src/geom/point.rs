use nalgebra::Vector2;
use std::fmt;
use std::ops::Sub;

/// A point (or displacement) in the plane.
///
/// Equality compares coordinates exactly; there is no epsilon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    v: Vector2<f64>,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            v: Vector2::new(x, y),
        }
    }

    #[inline]
    pub fn origin() -> Self {
        Self { v: Vector2::zeros() }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.v.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.v.y
    }

    /// Coordinates as a column vector.
    #[inline]
    pub fn as_vector(&self) -> Vector2<f64> {
        self.v
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(&self, other: Point) -> f64 {
        (other.v - self.v).norm()
    }

    /// Lexicographic "less than" on (x, y); used for the leftmost-lowest pick.
    #[inline]
    pub(crate) fn lex_lt(&self, other: &Point) -> bool {
        self.x() < other.x() || (self.x() == other.x() && self.y() < other.y())
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self { v }
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Self::Output {
        Point { v: self.v - rhs.v }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}
