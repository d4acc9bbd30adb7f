//! Frame composition.
//!
//! [`Compositor`] is the rendering context: it owns the pixel buffer and the highlight
//! color and runs one frame at a time. A frame clears the buffer, takes a snapshot of the
//! scene, draws every polygon through the projection chain, then draws the standalone
//! lines.
//!
//! Failures are isolated per primitive. A polygon edge or line that leaves the buffer is
//! logged and recorded in the [`FrameReport`], and the rest of the frame is still drawn.

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::framebuffer::PixelBuffer;
use crate::geometry::{Line, Point, Polygon, ScreenSize};
use crate::output::Display;
use crate::projection::{place_polygon, ProjectionPlane};
use crate::render::{draw_line, Drawable, LineAlgorithm};
use crate::scene::SceneSource;
use log::{debug, warn};

/// Which primitive of a frame failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// Edge `edge` of polygon `polygon` (both indices into the frame snapshot).
    PolygonEdge {
        /// Polygon index.
        polygon: usize,
        /// Edge index within the polygon.
        edge: usize,
    },
    /// A whole polygon that could not be drawn at all.
    Polygon(usize),
    /// Standalone line index.
    Line(usize),
}

/// A primitive that was skipped, and why.
#[derive(Debug)]
pub struct PrimitiveFailure {
    /// The failing primitive.
    pub primitive: Primitive,
    /// The error it raised.
    pub error: Error,
}

/// Outcome of drawing one frame.
#[derive(Debug, Default)]
pub struct FrameReport {
    /// Polygons in the snapshot.
    pub polygons: usize,
    /// Standalone lines in the snapshot.
    pub lines: usize,
    /// Pixels written.
    pub pixels: usize,
    /// Primitives that failed; the rest of the frame was still drawn.
    pub failures: Vec<PrimitiveFailure>,
}

impl FrameReport {
    /// Returns true if every primitive was drawn.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Derive the closed edge loop of a vertex list.
///
/// Edges are `(v[i-1], v[i])` for `i = 1..n` followed by the closing edge
/// `(v[n-1], v[0])`, so `n` vertices give `n` edges. An empty list gives no edges.
#[must_use]
pub fn vertices_to_edges(vertices: &[Point]) -> Vec<Line> {
    let (Some(&first), Some(&last)) = (vertices.first(), vertices.last()) else {
        return Vec::new();
    };

    vertices
        .windows(2)
        .map(|pair| Line::new(pair[0], pair[1]))
        .chain(std::iter::once(Line::new(last, first)))
        .collect()
}

/// Rendering context owning the pixel buffer.
#[derive(Debug, Clone)]
pub struct Compositor {
    buffer: PixelBuffer,
    highlight: Rgb,
    line_algorithm: LineAlgorithm,
}

impl Compositor {
    /// Establish the screen size and allocate the buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn init_window(width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            buffer: PixelBuffer::new(width, height)?,
            highlight: Rgb::YELLOW,
            line_algorithm: LineAlgorithm::Dda,
        })
    }

    /// Set the color used for selected polygons.
    #[must_use]
    pub fn with_highlight(mut self, highlight: Rgb) -> Self {
        self.highlight = highlight;
        self
    }

    /// Set the algorithm used for standalone scene lines (DDA unless changed).
    #[must_use]
    pub fn with_line_algorithm(mut self, algorithm: LineAlgorithm) -> Self {
        self.line_algorithm = algorithm;
        self
    }

    /// Recorded screen size.
    #[must_use]
    pub const fn size(&self) -> ScreenSize {
        self.buffer.size()
    }

    /// Record a new screen size without reallocating. See [`PixelBuffer::set_size`].
    pub fn set_size(&mut self, size: ScreenSize) {
        self.buffer.set_size(size);
    }

    /// Read-only access to the buffer.
    #[must_use]
    pub const fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Zero the buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Write a single point.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the point is outside the buffer.
    pub fn draw_point(&mut self, point: Point) -> Result<()> {
        point.draw(&mut self.buffer)
    }

    /// Rasterize a line with the given algorithm, optionally in the highlight color.
    ///
    /// Returns the number of pixels written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] at the first pixel outside the buffer.
    pub fn draw_line(&mut self, line: &Line, algorithm: LineAlgorithm, highlight: bool) -> Result<usize> {
        let color = highlight.then_some(self.highlight);
        draw_line(&mut self.buffer, line, algorithm, color)
    }

    /// Draw a polygon's outline on `plane`.
    ///
    /// The vertices are projected, normalized and placed in the plane's quadrant. Two
    /// vertices draw a single line; more draw the closed edge loop. Every edge uses DDA and
    /// the polygon's selection flag. Edges are drawn independently: failures are returned
    /// as `(edge index, error)` pairs after all edges have been attempted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegeneratePolygon`] for fewer than two vertices.
    pub fn draw_polygon(
        &mut self,
        polygon: &Polygon,
        plane: ProjectionPlane,
    ) -> Result<(usize, Vec<(usize, Error)>)> {
        if polygon.len() < 2 {
            return Err(Error::DegeneratePolygon(polygon.len()));
        }

        let placed = place_polygon(polygon.vertices(), plane, self.size());
        let edges = if placed.len() == 2 {
            vec![Line::new(placed[0], placed[1])]
        } else {
            vertices_to_edges(&placed)
        };

        let mut pixels = 0;
        let mut failures = Vec::new();
        for (i, edge) in edges.iter().enumerate() {
            match self.draw_line(edge, LineAlgorithm::Dda, polygon.is_selected()) {
                Ok(n) => pixels += n,
                Err(e) => failures.push((i, e)),
            }
        }

        Ok((pixels, failures))
    }

    /// Draw a full frame from `scene` on `plane`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] without drawing if the recorded screen size no
    /// longer matches the buffer. Per-primitive failures are reported in the
    /// [`FrameReport`] instead.
    pub fn draw_scene(&mut self, scene: &dyn SceneSource, plane: ProjectionPlane) -> Result<FrameReport> {
        self.draw_views(scene, &[plane])
    }

    /// Draw several planes into one frame, e.g. all three quadrant views.
    ///
    /// The buffer is cleared once, polygons are drawn for every plane in order, and
    /// standalone lines are drawn once at the end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] without drawing if the recorded screen size no
    /// longer matches the buffer.
    pub fn draw_views(&mut self, scene: &dyn SceneSource, planes: &[ProjectionPlane]) -> Result<FrameReport> {
        self.buffer.check_consistent()?;
        self.buffer.clear();

        let mut lines = scene.lines();
        let mut polygons = scene.polygons();
        scene.clip(&mut lines, &mut polygons);

        let mut report =
            FrameReport { polygons: polygons.len(), lines: lines.len(), ..FrameReport::default() };
        for &plane in planes {
            self.draw_polygons(&polygons, plane, &mut report);
        }
        self.draw_lines(&lines, &mut report);

        debug!(
            "frame: {} polygons x {} planes, {} lines, {} pixels, {} failures",
            report.polygons,
            planes.len(),
            report.lines,
            report.pixels,
            report.failures.len()
        );
        Ok(report)
    }

    fn draw_polygons(&mut self, polygons: &[Polygon], plane: ProjectionPlane, report: &mut FrameReport) {
        for (index, polygon) in polygons.iter().enumerate() {
            match self.draw_polygon(polygon, plane) {
                Ok((pixels, failures)) => {
                    report.pixels += pixels;
                    for (edge, error) in failures {
                        warn!("polygon {index} edge {edge} on {} skipped: {error}", plane.name());
                        report
                            .failures
                            .push(PrimitiveFailure { primitive: Primitive::PolygonEdge { polygon: index, edge }, error });
                    }
                }
                Err(error) => {
                    warn!("polygon {index} skipped: {error}");
                    report.failures.push(PrimitiveFailure { primitive: Primitive::Polygon(index), error });
                }
            }
        }
    }

    fn draw_lines(&mut self, lines: &[Line], report: &mut FrameReport) {
        for (index, line) in lines.iter().enumerate() {
            match self.draw_line(line, self.line_algorithm, false) {
                Ok(pixels) => report.pixels += pixels,
                Err(error) => {
                    warn!("line {index} skipped: {error}");
                    report.failures.push(PrimitiveFailure { primitive: Primitive::Line(index), error });
                }
            }
        }
    }

    /// Hand the finished frame to a display.
    ///
    /// # Errors
    ///
    /// Propagates the display's error.
    pub fn present(&self, display: &mut dyn Display) -> Result<()> {
        display.present(&self.buffer)
    }
}
