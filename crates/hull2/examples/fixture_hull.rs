//! Print both hulls and the boundary of a small fixed point set.
//!
//! Usage:
//!   cargo run -p hull2 --example fixture_hull

use hull2::prelude::*;

fn main() -> Result<(), HullError> {
    let points: Vec<Point> = [
        (0.0, 0.0),
        (-1.0, -1.0),
        (0.0, 4.0),
        (3.0, 2.0),
        (5.0, 6.0),
        (0.0, 1.5),
    ]
    .into_iter()
    .map(Point::from)
    .collect();

    for algo in HullAlgorithm::ALL {
        let hull = algo.compute(&points)?;
        println!("Points on the convex hull ({algo}):");
        for p in &hull {
            println!("{p}");
        }
        println!("Boundary:");
        for edge in get_convex_hull_lines(&hull) {
            println!("  {edge}");
        }
    }
    Ok(())
}
