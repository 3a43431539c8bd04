use crate::geom::{Line, Point};

use super::gift::leftmost_lowest;
use super::{update_best, HullError};

/// Quickhull.
///
/// The leftmost-lowest and rightmost-highest points split the set along the
/// directed line between them; each side is then reduced by `find_hull`.
///
/// Output order: `[leftest, rightest, ..upper side.., ..lower side..]`, with no
/// deduplication beyond collapsing a single distinct point to one vertex.
/// Collinear boundary points are not reported.
pub fn quick_hull(points: &[Point]) -> Result<Vec<Point>, HullError> {
    let leftest = leftmost_lowest(points)
        .ok_or_else(|| HullError::invalid("quickhull needs at least one point"))?;
    let rightest = rightmost_highest(points).unwrap_or(leftest);
    if leftest == rightest {
        return Ok(vec![leftest]);
    }

    let base = Line::new(leftest, rightest);
    let (left_points, right_points): (Vec<Point>, Vec<Point>) = points
        .iter()
        .copied()
        .filter(|&p| p != leftest && p != rightest)
        .partition(|&p| base.is_point_on_left_of_line(p));

    let left_hull = find_hull(&left_points, base);
    let right_hull = find_hull(&right_points, base.reversed());

    let mut hull = Vec::with_capacity(2 + left_hull.len() + right_hull.len());
    hull.push(leftest);
    hull.push(rightest);
    hull.extend(left_hull);
    hull.extend(right_hull);
    Ok(hull)
}

/// Hull vertices strictly left of `base`, found by recursive farthest-point splits.
///
/// Points on `base` or to its right are ignored, as are the endpoints of
/// `base` themselves. Each level consumes its farthest point and drops every
/// point inside the triangle `(base.start, farthest, base.end)`, so the
/// recursion depth is bounded by `points.len()`.
pub fn find_hull(points: &[Point], base: Line) -> Vec<Point> {
    if points.is_empty() {
        return Vec::new();
    }
    let outside: Vec<Point> = points
        .iter()
        .copied()
        .filter(|&p| p != base.start() && p != base.end())
        .filter(|&p| base.is_point_on_left_of_line(p))
        .collect();

    let mut best: Option<(Point, f64)> = None;
    for &p in &outside {
        update_best(&mut best, p, base.distance_from_point(p));
    }
    let Some((farthest, _)) = best else {
        return Vec::new();
    };

    let first = Line::new(base.start(), farthest);
    let second = Line::new(farthest, base.end());
    let beyond: Vec<Point> = outside
        .into_iter()
        .filter(|&p| p != farthest)
        .filter(|&p| first.is_point_on_left_of_line(p) || second.is_point_on_left_of_line(p))
        .collect();

    let mut hull = vec![farthest];
    hull.extend(find_hull(&beyond, first));
    hull.extend(find_hull(&beyond, second));
    hull
}

/// Lexicographic maximum on (x, y); first occurrence wins.
fn rightmost_highest(points: &[Point]) -> Option<Point> {
    let (&first, rest) = points.split_first()?;
    Some(
        rest.iter()
            .fold(first, |best, &p| if best.lex_lt(&p) { p } else { best }),
    )
}
