use crate::geom::{Line, Point};

/// Boundary edges of the polygon spanned by an unordered hull vertex set.
///
/// A directed pair `p1 → p2` is an edge iff every other vertex lies strictly
/// left of it, or lies on its supporting line outside the closed segment
/// `[p1, p2]`. The second clause keeps collinear boundary vertices: the edge
/// through them is split at each one instead of being dropped.
///
/// Duplicate vertices are collapsed first. For a hull with area there is one
/// edge leaving each vertex, counter-clockwise, and the edges are returned
/// chained into a cycle starting with the first edge found. A fully collinear
/// hull accepts every gap in both directions; the cycle then starts at one end,
/// runs to the other and comes back. Edges the chain cannot reach are appended in
/// discovery order. O(h³) in the hull size.
pub fn get_convex_hull_lines(hull: &[Point]) -> Vec<Line> {
    let vertices = distinct(hull);
    let mut edges = Vec::with_capacity(vertices.len());
    for &p1 in &vertices {
        for &p2 in &vertices {
            if p1 == p2 {
                continue;
            }
            let line = Line::new(p1, p2);
            if vertices
                .iter()
                .all(|&q| q == p1 || q == p2 || supports(&line, q))
            {
                edges.push(line);
            }
        }
    }
    chain(edges)
}

/// Boundary cycle by angular sort around the vertex centroid, O(h log h).
///
/// Counter-clockwise for any hull with non-zero area. One vertex yields no
/// edges, two yield the pair of opposite edges.
pub fn hull_lines_by_angle(hull: &[Point]) -> Vec<Line> {
    let mut vertices = distinct(hull);
    if vertices.len() < 2 {
        return Vec::new();
    }
    let n = vertices.len() as f64;
    let (sx, sy) = vertices
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x(), sy + p.y()));
    let centroid = Point::new(sx / n, sy / n);
    vertices.sort_by(|a, b| {
        let aa = (a.y() - centroid.y()).atan2(a.x() - centroid.x());
        let bb = (b.y() - centroid.y()).atan2(b.x() - centroid.x());
        aa.total_cmp(&bb)
    });
    (0..vertices.len())
        .map(|k| Line::new(vertices[k], vertices[(k + 1) % vertices.len()]))
        .collect()
}

fn distinct(points: &[Point]) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::with_capacity(points.len());
    for &p in points {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}

/// `q` does not prevent `line` from being a counter-clockwise boundary edge.
fn supports(line: &Line, q: Point) -> bool {
    let c = line.cross(q);
    if c > 0.0 {
        return true;
    }
    if c < 0.0 {
        return false;
    }
    let d = line.direction();
    let t = d.dot(&(q - line.start()).as_vector()) / d.norm_squared();
    !(0.0..=1.0).contains(&t)
}

/// Follows edges end-to-start, preferring a continuation that does not
/// immediately double back. Starts at the first edge leaving a vertex of
/// out-degree one, which is the first edge unless the hull is collinear.
fn chain(mut edges: Vec<Line>) -> Vec<Line> {
    if edges.is_empty() {
        return edges;
    }
    let out_degree = |v: Point| edges.iter().filter(|e| e.start() == v).count();
    let k = edges
        .iter()
        .position(|e| out_degree(e.start()) == 1)
        .unwrap_or(0);
    let first = edges.remove(k);
    let origin = first.start();
    let mut last = first;
    let mut ordered = Vec::with_capacity(edges.len() + 1);
    ordered.push(first);
    while last.end() != origin {
        let tail = last.end();
        let onward = edges
            .iter()
            .position(|e| e.start() == tail && e.end() != last.start())
            .or_else(|| edges.iter().position(|e| e.start() == tail));
        let Some(i) = onward else {
            break;
        };
        last = edges.remove(i);
        ordered.push(last);
    }
    ordered.extend(edges);
    ordered
}
