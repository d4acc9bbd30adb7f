//! Rasterization of primitives into a [`PixelBuffer`].
//!
//! # Algorithms
//!
//! - **DDA**: floating-point incremental line drawing along the major axis
//! - **Bresenham's Line**: integer-only incremental line drawing, the correctness reference
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod line;

pub use line::{draw_line, BresenhamPixels, DdaPixels, LineAlgorithm, LinePixels};

use crate::error::Result;
use crate::framebuffer::PixelBuffer;
use crate::geometry::{Line, Point};

/// Trait for primitives that can rasterize themselves.
pub trait Drawable {
    /// Draw this primitive into a pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if a pixel falls outside
    /// the buffer.
    fn draw(&self, buffer: &mut PixelBuffer) -> Result<()>;
}

impl Drawable for Point {
    fn draw(&self, buffer: &mut PixelBuffer) -> Result<()> {
        buffer.set_pixel(self.x, self.y, self.color)
    }
}

impl Drawable for Line {
    fn draw(&self, buffer: &mut PixelBuffer) -> Result<()> {
        draw_line(buffer, self, LineAlgorithm::Dda, None).map(|_| ())
    }
}
