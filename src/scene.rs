//! Scene model boundary.
//!
//! The rasterizer does not own scene contents. Each frame it asks a [`SceneSource`] for a
//! snapshot of the standalone lines and polygons to draw. [`Scene`] is a plain in-memory
//! source for callers that do not have their own object model.

use crate::geometry::{Line, Polygon};

/// Supplier of the primitives drawn in a frame.
pub trait SceneSource {
    /// Snapshot of the standalone lines, in draw order.
    fn lines(&self) -> Vec<Line>;

    /// Snapshot of the polygons, in draw order.
    fn polygons(&self) -> Vec<Polygon>;

    /// Clip the frame's snapshot before it is drawn.
    ///
    /// Called once per frame after the snapshot is taken. The default keeps everything.
    fn clip(&self, _lines: &mut Vec<Line>, _polygons: &mut Vec<Polygon>) {}
}

/// In-memory scene.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    lines: Vec<Line>,
    polygons: Vec<Polygon>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a standalone line.
    #[must_use]
    pub fn line(mut self, line: Line) -> Self {
        self.lines.push(line);
        self
    }

    /// Add a polygon.
    #[must_use]
    pub fn polygon(mut self, polygon: Polygon) -> Self {
        self.polygons.push(polygon);
        self
    }

    /// Append a standalone line in place.
    pub fn push_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Append a polygon in place.
    pub fn push_polygon(&mut self, polygon: Polygon) {
        self.polygons.push(polygon);
    }

    /// Remove every primitive.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.polygons.clear();
    }

    /// Returns true if the scene has no primitives.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.polygons.is_empty()
    }
}

impl SceneSource for Scene {
    fn lines(&self) -> Vec<Line> {
        self.lines.clone()
    }

    fn polygons(&self) -> Vec<Polygon> {
        self.polygons.clone()
    }
}
