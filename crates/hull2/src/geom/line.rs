use nalgebra::Vector2;
use std::fmt;
use std::ops::Sub;

use super::Point;

/// Directed segment `start → end`.
///
/// The direction matters for `is_point_on_left_of_line` and `cos_angle`; the
/// slope/intercept form describes the infinite line through both points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    start: Point,
    end: Point,
}

impl Line {
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Same segment traversed `end → start`.
    #[inline]
    pub fn reversed(&self) -> Line {
        Line::new(self.end, self.start)
    }

    /// Displacement `end − start`.
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.end.as_vector() - self.start.as_vector()
    }

    /// Rise over run. `±∞` for vertical lines, NaN when `start == end`.
    #[inline]
    pub fn slope(&self) -> f64 {
        (self.end.y() - self.start.y()) / (self.end.x() - self.start.x())
    }

    /// Intersection with the y-axis (`b` in `y = m x + b`).
    #[inline]
    pub fn intercept(&self) -> f64 {
        self.end.y() - self.slope() * self.end.x()
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.start.x() == self.end.x()
    }

    /// Signed parallelogram area of `(end − start, p − start)`.
    ///
    /// Positive iff `p` is strictly counter-clockwise of the directed line.
    #[inline]
    pub fn cross(&self, p: Point) -> f64 {
        let d = self.direction();
        let w = p.as_vector() - self.start.as_vector();
        d.x * w.y - d.y * w.x
    }

    /// True iff `p` lies strictly left of `start → end`; points on the line are not left.
    #[inline]
    pub fn is_point_on_left_of_line(&self, p: Point) -> bool {
        self.cross(p) > 0.0
    }

    /// Perpendicular distance from `p` to the infinite line through both endpoints.
    ///
    /// Uses `|m·x − y + b| / sqrt(1 + m²)`; vertical lines fall back to the
    /// horizontal offset `|p.x − start.x|`. The result is unsigned; combine with
    /// `is_point_on_left_of_line` for the side.
    pub fn distance_from_point(&self, p: Point) -> f64 {
        if self.is_vertical() {
            return (p.x() - self.start.x()).abs();
        }
        let m = self.slope();
        let b = self.intercept();
        (m * p.x() - p.y() + b).abs() / (1.0 + m * m).sqrt()
    }

    /// Cosine of the angle between the two directions (dot-turn).
    ///
    /// 1 for a straight continuation, −1 for a full reversal. NaN if either
    /// segment has zero length.
    #[inline]
    pub fn cos_angle(&self, other: &Line) -> f64 {
        self.direction().dot(&other.direction()) / (self.length() * other.length())
    }
}

impl Sub for Line {
    type Output = Line;
    /// Endpoint-wise difference: `(start − other.start) → (end − other.end)`.
    #[inline]
    fn sub(self, rhs: Line) -> Self::Output {
        Line::new(self.start - rhs.start, self.end - rhs.end)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.start, self.end)
    }
}
