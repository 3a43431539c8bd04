use crate::geom::{Line, Point};

use super::HullError;

/// Gift-wrapping (Jarvis march) hull.
///
/// Starts at the leftmost-lowest point, takes the steepest rise as the first
/// edge, then repeatedly appends the candidate whose edge continues the
/// previous edge most straightly (largest `cos_angle`). Stops when the walk
/// returns to the start; the start is not repeated at the end.
///
/// Equal scores go to the candidate farther from the current vertex, so points
/// strictly inside a collinear run are skipped and fully collinear input yields
/// its two extremes regardless of input order.
///
/// Errors
/// - `InvalidInput` for an empty slice.
/// - `DegenerateInput` if the walk reaches a vertex it already emitted, or
///   finds no scorable continuation (non-finite coordinates).
pub fn gift_wrapping(points: &[Point]) -> Result<Vec<Point>, HullError> {
    let start = leftmost_lowest(points)
        .ok_or_else(|| HullError::invalid("gift wrapping needs at least one point"))?;

    let Some(mut current) = steepest_from(points, start) else {
        // every point coincides with `start`
        return Ok(vec![start]);
    };
    let mut previous = start;
    let mut hull = vec![start];

    while current != start {
        if hull.contains(&current) {
            return Err(HullError::degenerate(format!(
                "gift wrapping revisited {current} after {} vertices",
                hull.len()
            )));
        }
        hull.push(current);
        let incoming = Line::new(previous, current);
        let mut best = None;
        for &p in points {
            if p == current {
                continue;
            }
            let turn = incoming.cos_angle(&Line::new(current, p));
            update_farthest(&mut best, current, p, turn);
        }
        let Some((next, _)) = best else {
            return Err(HullError::degenerate("no continuation from current hull vertex"));
        };
        previous = current;
        current = next;
    }

    Ok(hull)
}

/// Lexicographic minimum on (x, y); first occurrence wins.
pub(crate) fn leftmost_lowest(points: &[Point]) -> Option<Point> {
    let (&first, rest) = points.split_first()?;
    Some(
        rest.iter()
            .fold(first, |best, &p| if p.lex_lt(&best) { p } else { best }),
    )
}

/// First wrap target: maximizes `(p.y − start.y) / |p.x − start.x|` over `p ≠ start`.
///
/// Points straight above `start` score `+∞` and win.
fn steepest_from(points: &[Point], start: Point) -> Option<Point> {
    let mut best = None;
    for &p in points {
        if p == start {
            continue;
        }
        let rise = (p.y() - start.y()) / (p.x() - start.x()).abs();
        update_farthest(&mut best, start, p, rise);
    }
    best.map(|(p, _)| p)
}

/// Running maximum of `score`; equal scores prefer the candidate farther from
/// `from`, then the first seen. NaN scores are skipped.
#[inline]
fn update_farthest(best: &mut Option<(Point, f64)>, from: Point, candidate: Point, score: f64) {
    if score.is_nan() {
        return;
    }
    let wins = match best {
        None => true,
        Some((held, s)) => {
            score > *s || (score == *s && from.distance_to(candidate) > from.distance_to(*held))
        }
    };
    if wins {
        *best = Some((candidate, score));
    }
}
