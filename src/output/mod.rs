//! Presentation of finished frames.
//!
//! A [`Display`] receives the pixel buffer once per frame after drawing has finished.
//! The buffer's raw contents are row-major, `width * height * 3` `f32` channels in R,G,B
//! order and are not clamped; each display decides how to quantize them.

mod png_encoder;
mod terminal;

pub use png_encoder::{PngEncoder, PngFile, ToneMap};
pub use terminal::{TerminalEncoder, TerminalMode};

use crate::error::Result;
use crate::framebuffer::PixelBuffer;

/// Consumer of finished frames.
pub trait Display {
    /// Present a finished frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame could not be delivered.
    fn present(&mut self, buffer: &PixelBuffer) -> Result<()>;
}

/// Keeps a copy of the last presented frame's channels.
///
/// Useful as a stand-in display when the frame is consumed by the caller.
#[derive(Debug, Clone, Default)]
pub struct FrameCapture {
    channels: Vec<f32>,
    frames: usize,
}

impl FrameCapture {
    /// Create an empty capture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Channels of the most recent frame.
    #[must_use]
    pub fn channels(&self) -> &[f32] {
        &self.channels
    }

    /// Number of frames presented so far.
    #[must_use]
    pub const fn frames(&self) -> usize {
        self.frames
    }
}

impl Display for FrameCapture {
    fn present(&mut self, buffer: &PixelBuffer) -> Result<()> {
        self.channels.clear();
        self.channels.extend_from_slice(buffer.channels());
        self.frames += 1;
        Ok(())
    }
}
