//! Planar convex hulls and their raster rendering.
//!
//! Layout
//! - `geom`: `Point` and directed `Line` value types with the orientation,
//!   distance and dot-turn predicates the hull builders need.
//! - `hull`: gift wrapping, Quickhull, and boundary-edge extraction.
//! - `rand`: seeded uniform point clouds.
//! - `render`: raster canvas (markers + edge strokes) and a 24-bit BMP encoder.
//!
//! Conventions
//! - "Left of" is the counter-clockwise side of a directed line (x right, y up).
//! - Hull builders return vertex sets without a guaranteed order; use
//!   `hull::get_convex_hull_lines` to recover the boundary cycle.

pub mod geom;
pub mod hull;
pub mod rand;
pub mod render;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{Line, Point};
pub use hull::{
    get_convex_hull_lines, gift_wrapping, hull_lines_by_angle, quick_hull, HullAlgorithm,
    HullError, UnknownAlgorithm,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{Line, Point};
    pub use crate::hull::{
        get_convex_hull_lines, gift_wrapping, hull_lines_by_angle, quick_hull, HullAlgorithm,
        HullError, UnknownAlgorithm,
    };
    pub use crate::rand::{draw_points, Bounds2, PointCloudCfg};
    pub use crate::render::{bmp::write_bmp, Canvas, Pixel, RenderCfg, Viewport};
}
