//! Raster rendering of point sets and hull edges.
//!
//! - `RenderCfg`: canvas size and stroke widths (defaults: 512×512, padding 2,
//!   point half-width 2, line half-width 1).
//! - `Viewport`: maps world coordinates into the padded drawing area.
//! - `Canvas`: pixel grid with row 0 at the bottom (y grows upward), so world
//!   orientation is preserved and rows map 1:1 onto bottom-up BMP rows.
//!
//! Drawing never panics on out-of-range geometry. Lines are clipped to the
//! canvas before rasterizing and non-finite positions are skipped. Later strokes
//! overwrite earlier ones.

pub mod bmp;

use crate::geom::{Line, Point};
use crate::rand::Bounds2;

/// Canvas configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderCfg {
    pub width: usize,
    pub height: usize,
    /// Empty border kept clear of marker centers.
    pub padding: usize,
    /// Half-width of the square drawn for each point.
    pub point_thickness: usize,
    /// Half-width of the square brush used for edges.
    pub line_thickness: usize,
}

impl Default for RenderCfg {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            padding: 2,
            point_thickness: 2,
            line_thickness: 1,
        }
    }
}

impl RenderCfg {
    /// Pixels reserved on each side before the drawable span starts.
    #[inline]
    fn inset(&self) -> usize {
        self.padding + self.point_thickness
    }
}

/// Pixel classes; colors are assigned by the encoder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pixel {
    #[default]
    Background,
    Marker,
    Edge,
}

impl Pixel {
    /// RGB color: white background, black markers, red edges.
    #[inline]
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Pixel::Background => [0xFF, 0xFF, 0xFF],
            Pixel::Marker => [0x00, 0x00, 0x00],
            Pixel::Edge => [0xFF, 0x00, 0x00],
        }
    }
}

/// World-to-pixel mapping over a bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub bounds: Bounds2,
}

impl Viewport {
    /// Unit square viewport: coordinate `c ∈ [0,1]` maps to
    /// `floor(c · (len − 2·inset)) + inset`.
    pub fn unit() -> Self {
        Self {
            bounds: Bounds2::unit(),
        }
    }

    /// Tight viewport around `points`; falls back to the unit square when empty.
    pub fn fit(points: &[Point]) -> Self {
        Self {
            bounds: Bounds2::enclosing(points).unwrap_or_default(),
        }
    }

    /// Normalized position of `p` in the viewport, `[0,1]²` for points inside.
    ///
    /// A zero-extent axis maps everything to its middle.
    fn normalize(&self, p: Point) -> (f64, f64) {
        let b = &self.bounds;
        let u = if b.width() > 0.0 {
            (p.x() - b.min.x()) / b.width()
        } else {
            0.5
        };
        let v = if b.height() > 0.0 {
            (p.y() - b.min.y()) / b.height()
        } else {
            0.5
        };
        (u, v)
    }
}

/// Raster image of markers and edges.
#[derive(Clone, Debug)]
pub struct Canvas {
    cfg: RenderCfg,
    viewport: Viewport,
    pixels: Vec<Pixel>,
}

impl Canvas {
    pub fn new(cfg: RenderCfg, viewport: Viewport) -> Self {
        Self {
            cfg,
            viewport,
            pixels: vec![Pixel::Background; cfg.width * cfg.height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.cfg.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.cfg.height
    }

    #[inline]
    pub fn cfg(&self) -> &RenderCfg {
        &self.cfg
    }

    /// Pixel at column `x`, row `y` (row 0 at the bottom).
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Pixel> {
        if x < self.cfg.width && y < self.cfg.height {
            Some(self.pixels[y * self.cfg.width + x])
        } else {
            None
        }
    }

    /// Bottom-up row slice.
    #[inline]
    pub(crate) fn row(&self, y: usize) -> &[Pixel] {
        &self.pixels[y * self.cfg.width..(y + 1) * self.cfg.width]
    }

    pub fn count(&self, kind: Pixel) -> usize {
        self.pixels.iter().filter(|&&p| p == kind).count()
    }

    /// Pixel coordinates of a world point (may lie outside the canvas).
    ///
    /// Far-away points saturate at `±2³¹`; NaN maps to 0.
    pub fn to_pixel(&self, p: Point) -> (i64, i64) {
        let (x, y) = self.pixel_f(p);
        (saturate(x), saturate(y))
    }

    /// Unclamped pixel position; integral whenever finite.
    fn pixel_f(&self, p: Point) -> (f64, f64) {
        let (u, v) = self.viewport.normalize(p);
        let inset = self.cfg.inset() as f64;
        let span = |len: usize| (len as f64 - 2.0 * inset).max(0.0);
        (
            (u * span(self.cfg.width)).floor() + inset,
            (v * span(self.cfg.height)).floor() + inset,
        )
    }

    /// Square marker of half-width `point_thickness` centered on `p`.
    ///
    /// Non-finite positions draw nothing.
    pub fn draw_point(&mut self, p: Point) {
        let (x, y) = self.pixel_f(p);
        if !(x.is_finite() && y.is_finite()) {
            return;
        }
        self.stamp(saturate(x), saturate(y), self.cfg.point_thickness as i64, Pixel::Marker);
    }

    /// Stroke from `line.start()` to `line.end()`.
    ///
    /// Samples one brush stamp per pixel along the major axis, so steep and
    /// vertical lines are as dense as shallow ones. The segment is first clipped
    /// to the canvas grown by the brush radius, so the work is bounded by the
    /// canvas size however far the endpoints lie.
    pub fn draw_line(&mut self, line: Line) {
        let a = self.pixel_f(line.start());
        let b = self.pixel_f(line.end());
        if ![a.0, a.1, b.0, b.1].iter().all(|c| c.is_finite()) {
            return;
        }
        let r = self.cfg.line_thickness as i64;
        let reach = r as f64 + 1.0;
        let lo = (-reach, -reach);
        let hi = (
            self.cfg.width as f64 + reach,
            self.cfg.height as f64 + reach,
        );
        let Some((t0, t1)) = clip_segment(a, b, lo, hi) else {
            return;
        };
        let at = |t: f64| {
            (
                (a.0 + t * (b.0 - a.0)).round() as i64,
                (a.1 + t * (b.1 - a.1)).round() as i64,
            )
        };
        let (x0, y0) = at(t0);
        let (x1, y1) = at(t1);
        let (dx, dy) = (x1 - x0, y1 - y0);
        let steps = dx.abs().max(dy.abs());
        if steps == 0 {
            self.stamp(x0, y0, r, Pixel::Edge);
            return;
        }
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let x = x0 + (t * dx as f64).round() as i64;
            let y = y0 + (t * dy as f64).round() as i64;
            self.stamp(x, y, r, Pixel::Edge);
        }
    }

    pub fn draw_points(&mut self, points: &[Point]) {
        for &p in points {
            self.draw_point(p);
        }
    }

    pub fn draw_lines(&mut self, lines: &[Line]) {
        for &l in lines {
            self.draw_line(l);
        }
    }

    fn stamp(&mut self, cx: i64, cy: i64, r: i64, kind: Pixel) {
        for y in (cy - r)..=(cy + r) {
            for x in (cx - r)..=(cx + r) {
                self.set(x, y, kind);
            }
        }
    }

    #[inline]
    fn set(&mut self, x: i64, y: i64, kind: Pixel) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.cfg.width && y < self.cfg.height {
            self.pixels[y * self.cfg.width + x] = kind;
        }
    }
}

const PIXEL_LIMIT: f64 = 2_147_483_648.0;

#[inline]
fn saturate(v: f64) -> i64 {
    v.clamp(-PIXEL_LIMIT, PIXEL_LIMIT) as i64
}

/// Liang–Barsky: parameter range `[t0, t1] ⊆ [0, 1]` of segment `a → b`
/// inside the box `lo..=hi`, or `None` when it misses the box.
fn clip_segment(a: (f64, f64), b: (f64, f64), lo: (f64, f64), hi: (f64, f64)) -> Option<(f64, f64)> {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    for (p, q) in [
        (-dx, a.0 - lo.0),
        (dx, hi.0 - a.0),
        (-dy, a.1 - lo.1),
        (dy, hi.1 - a.1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            if t > t1 {
                return None;
            }
            t0 = t0.max(t);
        } else {
            if t < t0 {
                return None;
            }
            t1 = t1.min(t);
        }
    }
    Some((t0, t1))
}
