//! Geometric primitives for rasterization.
//!
//! Integer-positioned points, lines and polygons. These are plain values owned by the
//! scene model and handed to the rasterizer read-only for the duration of a draw call.

use crate::color::Rgb;

/// Screen dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
pub struct ScreenSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ScreenSize {
    /// Create a new screen size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of `f32` channels a buffer of this size holds (3 per pixel), or `None` if
    /// that count does not fit in `usize`.
    #[must_use]
    pub fn channel_count(self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)?.checked_mul(3)
    }
}

/// A 2D point with integer coordinates and a color.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
    /// Color of this point.
    pub color: Rgb,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32, color: Rgb) -> Self {
        Self { x, y, color }
    }

    /// Create a white point.
    #[must_use]
    pub const fn at(x: i32, y: i32) -> Self {
        Self::new(x, y, Rgb::WHITE)
    }

    /// Position as an `(x, y)` pair.
    #[must_use]
    pub const fn position(self) -> (i32, i32) {
        (self.x, self.y)
    }
}

/// A 3D vertex with integer coordinates and a color.
///
/// Polygon vertices carry all three axes so any projection plane can drop one of them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
    /// Z coordinate.
    pub z: i32,
    /// Color of this vertex.
    pub color: Rgb,
}

impl Vertex {
    /// Create a new vertex.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32, color: Rgb) -> Self {
        Self { x, y, z, color }
    }

    /// Create a white vertex.
    #[must_use]
    pub const fn at(x: i32, y: i32, z: i32) -> Self {
        Self::new(x, y, z, Rgb::WHITE)
    }
}

/// A line segment between two points.
///
/// Direction only matters for stepping bookkeeping, not for the rasterized pixel set.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a white line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::at(x0, y0), Point::at(x1, y1))
    }
}

/// An ordered loop of vertices with a selection flag.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    vertices: Vec<Vertex>,
    selected: bool,
}

impl Polygon {
    /// Create an unselected polygon.
    #[must_use]
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self { vertices, selected: false }
    }

    /// Set the selected (highlighted) flag.
    #[must_use]
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// The polygon's vertices in order.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Whether the polygon is drawn in the highlight color.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the polygon has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
