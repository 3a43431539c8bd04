//! Planar geometry primitives.
//!
//! - `Point`: immutable coordinate pair with exact equality.
//! - `Line`: directed segment `start → end` with slope/intercept form, the strict
//!   left-of predicate, perpendicular distance, and the dot-turn cosine.
//!
//! Both are `Copy` value types built once through their constructors; every
//! derived quantity is a pure function of the stored coordinates.

mod line;
mod point;

pub use line::Line;
pub use point::Point;

#[cfg(test)]
mod tests;
