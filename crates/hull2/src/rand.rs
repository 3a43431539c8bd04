//! Seeded random point clouds.
//!
//! Points are drawn independently and uniformly from an axis-aligned box. The
//! same `(cfg, seed)` always yields the same cloud, so experiments and images
//! can be replayed from their logged seed.

use crate::geom::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Axis-aligned sampling box `[min.x, max.x) × [min.y, max.y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: Point,
    pub max: Point,
}

impl Bounds2 {
    #[inline]
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// The unit square `[0, 1)²`.
    #[inline]
    pub fn unit() -> Self {
        Self::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0))
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x() - self.min.x()
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y() - self.min.y()
    }

    /// Tight bounds of a non-empty point set.
    pub fn enclosing(points: &[Point]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;
        let (mut lo, mut hi) = (first.as_vector(), first.as_vector());
        for p in rest {
            lo = lo.inf(&p.as_vector());
            hi = hi.sup(&p.as_vector());
        }
        Some(Self::new(lo.into(), hi.into()))
    }
}

impl Default for Bounds2 {
    fn default() -> Self {
        Self::unit()
    }
}

/// Point cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct PointCloudCfg {
    pub count: usize,
    pub bounds: Bounds2,
}

impl Default for PointCloudCfg {
    fn default() -> Self {
        Self {
            count: 20,
            bounds: Bounds2::unit(),
        }
    }
}

/// Draw `cfg.count` uniform points inside `cfg.bounds`.
pub fn draw_points(cfg: PointCloudCfg, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    draw_points_with(&mut rng, cfg)
}

/// Same as `draw_points`, continuing an existing RNG stream.
pub fn draw_points_with<R: Rng>(rng: &mut R, cfg: PointCloudCfg) -> Vec<Point> {
    let Bounds2 { min, .. } = cfg.bounds;
    let (w, h) = (cfg.bounds.width(), cfg.bounds.height());
    (0..cfg.count)
        .map(|_| Point::new(min.x() + w * rng.gen::<f64>(), min.y() + h * rng.gen::<f64>()))
        .collect()
}
