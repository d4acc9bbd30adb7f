//! Axonometric projection and quadrant placement.
//!
//! Polygon vertices go through three steps before rasterization:
//!
//! 1. [`project`]: drop one axis according to the [`ProjectionPlane`].
//! 2. [`normalize`]: rescale the projected bounding box to `[0, 1] x [0, 1]`.
//! 3. [`map_to_quadrant`]: stretch the normalized box over the plane's screen quadrant.
//!
//! The screen is split into quadrants so that the three views of a scene can be shown
//! side by side:
//!
//! ```text
//! +---------+---------+
//! |   XY    |   XZ    |
//! +---------+---------+
//! |   YZ    |         |
//! +---------+---------+
//! ```

use crate::geometry::{Point, ScreenSize, Vertex};

/// Plane a polygon is projected onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum ProjectionPlane {
    /// Front view: keeps (x, y), drops z. Top-left quadrant.
    #[default]
    Xy,
    /// Top view: keeps (x, z), drops y. Top-right quadrant.
    Xz,
    /// Side view: keeps (y, z), drops x. Bottom-left quadrant.
    Yz,
}

impl ProjectionPlane {
    /// All planes, in quadrant order.
    pub const ALL: [Self; 3] = [Self::Xy, Self::Xz, Self::Yz];

    /// Project a single vertex onto this plane, keeping its color.
    #[must_use]
    pub const fn project_vertex(self, v: &Vertex) -> Point {
        match self {
            Self::Xy => Point::new(v.x, v.y, v.color),
            Self::Xz => Point::new(v.x, v.z, v.color),
            Self::Yz => Point::new(v.y, v.z, v.color),
        }
    }

    /// Screen region this plane is drawn into.
    ///
    /// Upper bounds stop one pixel short of `W/2`, `W`, `H/2` and `H` so mapped points
    /// never land past the buffer.
    ///
    /// A screen dimension of 1 pixel halves to 0, so the left or top quadrants come out
    /// inverted (`max < min`) and contain no pixel. No clamping is applied: a point whose
    /// normalized coordinate on that axis is 1 maps to -1, and the edges through it are
    /// reported as out of range when drawn.
    #[must_use]
    pub fn quadrant(self, size: ScreenSize) -> Quadrant {
        let w = i32::try_from(size.width).unwrap_or(i32::MAX);
        let h = i32::try_from(size.height).unwrap_or(i32::MAX);
        let (half_w, half_h) = (w / 2, h / 2);

        match self {
            Self::Xy => Quadrant::new(0, 0, half_w - 1, half_h - 1),
            Self::Xz => Quadrant::new(half_w, 0, w - 1, half_h - 1),
            Self::Yz => Quadrant::new(0, half_h, half_w - 1, h - 1),
        }
    }

    /// Short lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Xy => "xy",
            Self::Xz => "xz",
            Self::Yz => "yz",
        }
    }
}

/// Inclusive screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quadrant {
    /// Smallest x coordinate.
    pub min_x: i32,
    /// Smallest y coordinate.
    pub min_y: i32,
    /// Largest x coordinate.
    pub max_x: i32,
    /// Largest y coordinate.
    pub max_y: i32,
}

impl Quadrant {
    /// Create a quadrant from inclusive bounds.
    #[must_use]
    pub const fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// Whether `(x, y)` lies inside the inclusive bounds.
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Map a normalized coordinate pair into the quadrant, truncating toward zero.
    #[must_use]
    pub fn map(&self, norm_x: f32, norm_y: f32) -> (i32, i32) {
        let x = self.min_x as f32 + norm_x * (self.max_x - self.min_x) as f32;
        let y = self.min_y as f32 + norm_y * (self.max_y - self.min_y) as f32;
        (x as i32, y as i32)
    }
}

/// Project vertices onto `plane`, preserving order and count.
#[must_use]
pub fn project(vertices: &[Vertex], plane: ProjectionPlane) -> Vec<Point> {
    vertices.iter().map(|v| plane.project_vertex(v)).collect()
}

/// Normalize points into their own bounding box.
///
/// Returns `(norm_x, norm_y)`, each in `[0, 1]` and index-aligned with `points`. An axis
/// on which every point has the same coordinate normalizes to 0 for every point.
#[must_use]
pub fn normalize(points: &[Point]) -> (Vec<f32>, Vec<f32>) {
    let Some(first) = points.first() else {
        return (Vec::new(), Vec::new());
    };

    let (min_x, max_x, min_y, max_y) = points.iter().fold(
        (first.x, first.x, first.y, first.y),
        |(min_x, max_x, min_y, max_y), p| {
            (min_x.min(p.x), max_x.max(p.x), min_y.min(p.y), max_y.max(p.y))
        },
    );

    let norm_x = points.iter().map(|p| unit(p.x, min_x, max_x)).collect();
    let norm_y = points.iter().map(|p| unit(p.y, min_y, max_y)).collect();
    (norm_x, norm_y)
}

/// Position of `v` within `[min, max]` as a fraction; 0 for a collapsed range.
#[inline]
fn unit(v: i32, min: i32, max: i32) -> f32 {
    if max == min {
        return 0.0;
    }
    // i32 differences can exceed i32, so do the arithmetic in f64.
    ((f64::from(v) - f64::from(min)) / (f64::from(max) - f64::from(min))) as f32
}

/// Normalize points and place them in the screen quadrant belonging to `plane`.
#[must_use]
pub fn map_to_quadrant(points: &[Point], plane: ProjectionPlane, size: ScreenSize) -> Vec<Point> {
    let quad = plane.quadrant(size);
    let (norm_x, norm_y) = normalize(points);

    points
        .iter()
        .zip(norm_x.into_iter().zip(norm_y))
        .map(|(p, (nx, ny))| {
            let (x, y) = quad.map(nx, ny);
            Point::new(x, y, p.color)
        })
        .collect()
}

/// Run the whole chain: project, normalize, map to quadrant.
#[must_use]
pub fn place_polygon(vertices: &[Vertex], plane: ProjectionPlane, size: ScreenSize) -> Vec<Point> {
    map_to_quadrant(&project(vertices, plane), plane, size)
}
