//! Floating-point RGB pixel buffer.
//!
//! The buffer is a single contiguous allocation of `width * height * 3` `f32` channels in
//! row-major order with the origin at (0, 0). It is allocated once, zeroed at the start of
//! every frame, and only replaced by an explicit [`PixelBuffer::reinit`].
//!
//! The recorded screen size and the allocation are tracked separately:
//! [`PixelBuffer::set_size`] updates the recorded dimensions without touching the
//! allocation. Every pixel write is bounds-checked against the allocation itself.

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::geometry::ScreenSize;
use batuta_common::display::WithDimensions;
use log::debug;
use trueno::Vector;

/// Channels per pixel (R, G, B).
pub const CHANNELS: usize = 3;

/// Owned RGB framebuffer with bounds-checked pixel writes.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    /// Recorded width in pixels.
    width: u32,
    /// Recorded height in pixels.
    height: u32,
    /// RGB channels in row-major order, 3 per pixel.
    channels: Vec<f32>,
}

impl PixelBuffer {
    /// Allocate a zeroed buffer for the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_raster::framebuffer::PixelBuffer;
    ///
    /// let buffer = PixelBuffer::new(800, 600).unwrap();
    /// assert_eq!(buffer.len(), 800 * 600 * 3);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let Some(count) = ScreenSize::new(width, height).channel_count() else {
            return Err(Error::InvalidDimensions { width, height });
        };
        debug!("allocating {width}x{height} pixel buffer ({count} channels)");

        Ok(Self { width, height, channels: vec![0.0; count] })
    }

    /// Replace the allocation with a fresh zeroed buffer of the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero; the current buffer is kept.
    pub fn reinit(&mut self, width: u32, height: u32) -> Result<()> {
        *self = Self::new(width, height)?;
        Ok(())
    }

    /// Recorded screen size.
    #[must_use]
    pub const fn size(&self) -> ScreenSize {
        ScreenSize::new(self.width, self.height)
    }

    /// Update the recorded dimensions without reallocating.
    ///
    /// Pixel indices are computed from the recorded width, so a size that disagrees with
    /// the allocation shifts where pixels land. See [`PixelBuffer::check_consistent`].
    pub fn set_size(&mut self, size: ScreenSize) {
        debug!(
            "recording screen size {}x{} over a {}-channel buffer",
            size.width,
            size.height,
            self.channels.len()
        );
        self.width = size.width;
        self.height = size.height;
    }

    /// Recorded width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Recorded height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Allocated length in channels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Returns true if the allocation is empty. Never true for a constructed buffer.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Raw channel data for presentation: row-major, R,G,B per pixel, unclamped.
    #[must_use]
    pub fn channels(&self) -> &[f32] {
        &self.channels
    }

    /// Whether the recorded size still describes the allocation.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.size().channel_count() == Some(self.channels.len())
    }

    /// Check that the recorded size still describes the allocation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] after a `set_size` that disagrees with the buffer.
    pub fn check_consistent(&self) -> Result<()> {
        if self.is_consistent() {
            return Ok(());
        }
        Err(Error::SizeMismatch {
            width: self.width,
            height: self.height,
            expected: self.size().channel_count(),
            actual: self.channels.len(),
        })
    }

    /// Set every channel to 0.0.
    pub fn clear(&mut self) {
        self.channels.fill(0.0);
    }

    /// Channel index of pixel (x, y): `(x + width * y) * 3`.
    ///
    /// Computed in checked `i64` arithmetic; `None` means the index overflowed and the
    /// pixel is out of range whatever the allocation.
    #[inline]
    #[must_use]
    pub fn channel_index(&self, x: i32, y: i32) -> Option<i64> {
        i64::from(self.width)
            .checked_mul(i64::from(y))?
            .checked_add(i64::from(x))?
            .checked_mul(CHANNELS as i64)
    }

    /// Returns the start of the pixel's channels if all three lie inside the allocation.
    #[inline]
    fn checked_index(&self, x: i32, y: i32) -> Option<usize> {
        let index = usize::try_from(self.channel_index(x, y)?).ok()?;
        (index.checked_add(2)? < self.channels.len()).then_some(index)
    }

    /// Write a pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] and leaves the buffer untouched if the pixel's channel
    /// index falls outside the allocation or cannot be computed without overflow.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) -> Result<()> {
        let Some(idx) = self.checked_index(x, y) else {
            return Err(Error::OutOfRange {
                x,
                y,
                index: self.channel_index(x, y),
                len: self.channels.len(),
            });
        };

        self.channels[idx..idx + CHANNELS].copy_from_slice(&color.to_array());
        Ok(())
    }

    /// Read a pixel, or `None` if its channel index is out of range.
    #[must_use]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        let idx = self.checked_index(x, y)?;
        Some(Rgb::new(self.channels[idx], self.channels[idx + 1], self.channels[idx + 2]))
    }

    /// Iterate over every pixel as `(x, y, color)` using the recorded width.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Rgb)> + '_ {
        let width = self.width.max(1);
        self.channels.chunks_exact(CHANNELS).enumerate().map(move |(i, c)| {
            let i = i as u32;
            (i % width, i / width, Rgb::new(c[0], c[1], c[2]))
        })
    }

    /// Statistics over every channel using trueno's SIMD reductions.
    ///
    /// Returns (min, max, mean).
    #[must_use]
    pub fn channel_stats(&self) -> (f32, f32, f32) {
        let vec = Vector::from_vec(self.channels.clone());

        let min = vec.min().unwrap_or(0.0);
        let max = vec.max().unwrap_or(0.0);
        let mean = vec.mean().unwrap_or(0.0);

        (min, max, mean)
    }

    /// Pack the buffer into 8-bit RGB, scaling by `1 / scale` and clamping.
    ///
    /// A `scale` of 1.0 is a plain clamp of `[0, 1]` to `[0, 255]`.
    #[must_use]
    pub fn to_rgb8(&self, scale: f32) -> Vec<u8> {
        let inv = if scale > 0.0 { 1.0 / scale } else { 1.0 };
        self.channels.iter().map(|&v| ((v * inv).clamp(0.0, 1.0) * 255.0).round() as u8).collect()
    }
}

impl WithDimensions for PixelBuffer {
    fn set_dimensions(&mut self, width: u32, height: u32) {
        self.set_size(ScreenSize::new(width, height));
    }
}
