//! Incremental line rasterization.
//!
//! Two stepping strategies produce the integer pixel sequence of a line:
//!
//! - **DDA** steps along the major axis with floating-point increments and rounds the
//!   accumulator with `floor(v + 0.5)` at every step.
//! - **Bresenham** stays in integer arithmetic, deciding minor-axis steps from an error
//!   accumulator. It is the reference the DDA output is checked against.
//!
//! Both visit every major-axis coordinate exactly once, so no pixel is emitted twice and
//! both endpoints are always included. For horizontal, vertical and 45° lines the two
//! sequences are identical; for other slopes they may disagree by one minor-axis pixel
//! where the ideal line passes exactly halfway between two pixels.

use crate::color::Rgb;
use crate::error::Result;
use crate::framebuffer::PixelBuffer;
use crate::geometry::{Line, Point};

/// Line rasterization strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum LineAlgorithm {
    /// Digital Differential Analyzer (floating-point increments).
    #[default]
    Dda,
    /// Bresenham's integer error-accumulator algorithm.
    Bresenham,
}

impl LineAlgorithm {
    /// Pixel sequence of `line` under this algorithm, from start to end.
    ///
    /// ```
    /// use trueno_raster::geometry::Line;
    /// use trueno_raster::render::LineAlgorithm;
    ///
    /// let pixels: Vec<_> = LineAlgorithm::Dda.pixels(&Line::from_coords(0, 0, 4, 0)).collect();
    /// assert_eq!(pixels, vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
    /// ```
    #[must_use]
    pub fn pixels(self, line: &Line) -> LinePixels {
        match self {
            Self::Dda => LinePixels::Dda(DdaPixels::new(line.start, line.end)),
            Self::Bresenham => LinePixels::Bresenham(BresenhamPixels::new(line.start, line.end)),
        }
    }

    /// Short lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dda => "dda",
            Self::Bresenham => "bresenham",
        }
    }
}

/// Number of major-axis steps between two points: `max(|dx|, |dy|)`.
#[inline]
fn major_steps(start: Point, end: Point) -> u64 {
    let dx = i64::from(end.x) - i64::from(start.x);
    let dy = i64::from(end.y) - i64::from(start.y);
    dx.unsigned_abs().max(dy.unsigned_abs())
}

/// DDA pixel iterator.
#[derive(Debug, Clone)]
pub struct DdaPixels {
    x: f64,
    y: f64,
    inc_x: f64,
    inc_y: f64,
    remaining: u64,
}

impl DdaPixels {
    /// Start stepping from `start` towards `end`.
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        let steps = major_steps(start, end);
        let (inc_x, inc_y) = if steps == 0 {
            (0.0, 0.0)
        } else {
            let dx = f64::from(end.x) - f64::from(start.x);
            let dy = f64::from(end.y) - f64::from(start.y);
            (dx / steps as f64, dy / steps as f64)
        };

        Self { x: f64::from(start.x), y: f64::from(start.y), inc_x, inc_y, remaining: steps + 1 }
    }
}

impl Iterator for DdaPixels {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let pixel = ((self.x + 0.5).floor() as i32, (self.y + 0.5).floor() as i32);
        self.x += self.inc_x;
        self.y += self.inc_y;
        Some(pixel)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

impl ExactSizeIterator for DdaPixels {}

/// Bresenham pixel iterator, valid in all eight octants.
///
/// Steep lines (`|dy| > |dx|`) swap the roles of the axes so the error term always
/// tracks the minor axis. Each axis keeps its own `+1`/`-1` step direction.
#[derive(Debug, Clone)]
pub struct BresenhamPixels {
    x: i64,
    y: i64,
    step_x: i64,
    step_y: i64,
    steep: bool,
    d_major: i64,
    d_minor: i64,
    err: i64,
    remaining: u64,
}

impl BresenhamPixels {
    /// Start stepping from `start` towards `end`.
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        let dx = i64::from(end.x) - i64::from(start.x);
        let dy = i64::from(end.y) - i64::from(start.y);
        let steep = dy.abs() > dx.abs();
        let (d_major, d_minor) = if steep { (dy.abs(), dx.abs()) } else { (dx.abs(), dy.abs()) };

        Self {
            x: i64::from(start.x),
            y: i64::from(start.y),
            step_x: if dx < 0 { -1 } else { 1 },
            step_y: if dy < 0 { -1 } else { 1 },
            steep,
            d_major,
            d_minor,
            err: 2 * d_minor - d_major,
            remaining: d_major.unsigned_abs() + 1,
        }
    }

    #[inline]
    fn advance(&mut self) {
        if self.err >= 0 {
            if self.steep {
                self.x += self.step_x;
            } else {
                self.y += self.step_y;
            }
            self.err -= 2 * self.d_major;
        }
        self.err += 2 * self.d_minor;

        if self.steep {
            self.y += self.step_y;
        } else {
            self.x += self.step_x;
        }
    }
}

impl Iterator for BresenhamPixels {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        // Every coordinate lies between the endpoints, which are i32.
        let pixel = (self.x as i32, self.y as i32);
        if self.remaining > 0 {
            self.advance();
        }
        Some(pixel)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

impl ExactSizeIterator for BresenhamPixels {}

/// Pixel iterator for whichever [`LineAlgorithm`] was selected.
#[derive(Debug, Clone)]
pub enum LinePixels {
    /// DDA stepping.
    Dda(DdaPixels),
    /// Bresenham stepping.
    Bresenham(BresenhamPixels),
}

impl Iterator for LinePixels {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Dda(it) => it.next(),
            Self::Bresenham(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Dda(it) => it.size_hint(),
            Self::Bresenham(it) => it.size_hint(),
        }
    }
}

impl ExactSizeIterator for LinePixels {}

/// Rasterize a line into the buffer.
///
/// Each pixel is colored by interpolating from the start color to the end color along
/// the major axis, or with `highlight` when one is given. Returns the number of pixels
/// written.
///
/// # Errors
///
/// Stops at the first pixel that falls outside the buffer and returns
/// [`Error::OutOfRange`](crate::Error::OutOfRange); pixels before it stay written.
pub fn draw_line(
    buffer: &mut PixelBuffer,
    line: &Line,
    algorithm: LineAlgorithm,
    highlight: Option<Rgb>,
) -> Result<usize> {
    let pixels = algorithm.pixels(line);
    let last = pixels.len().saturating_sub(1);

    let mut written = 0;
    for (i, (x, y)) in pixels.enumerate() {
        let color = match highlight {
            Some(color) => color,
            None if last == 0 => line.start.color,
            None => line.start.color.lerp(line.end.color, i as f32 / last as f32),
        };
        buffer.set_pixel(x, y, color)?;
        written += 1;
    }

    Ok(written)
}
