//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate.

use super::Display;
use crate::error::Result;
use crate::framebuffer::PixelBuffer;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// How floating-point channels are squeezed into 8 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum ToneMap {
    /// Clamp each channel to `[0, 1]`.
    #[default]
    Clamp,
    /// Divide by the brightest channel in the frame (if above 1.0), then clamp.
    Normalize,
}

/// PNG encoder for pixel buffer output.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngEncoder {
    tone_map: ToneMap,
}

impl PngEncoder {
    /// Create an encoder that clamps channels.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tone mapping.
    #[must_use]
    pub fn tone_map(mut self, tone_map: ToneMap) -> Self {
        self.tone_map = tone_map;
        self
    }

    fn rgb8(&self, buffer: &PixelBuffer) -> Vec<u8> {
        let scale = match self.tone_map {
            ToneMap::Clamp => 1.0,
            ToneMap::Normalize => {
                let (_, max, _) = buffer.channel_stats();
                max.max(1.0)
            }
        };
        buffer.to_rgb8(scale)
    }

    fn encode<W: Write>(&self, buffer: &PixelBuffer, w: W) -> Result<()> {
        let mut encoder = png::Encoder::new(w, buffer.width(), buffer.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.rgb8(buffer))?;
        Ok(())
    }

    /// Write a pixel buffer to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails, including when the
    /// recorded size no longer matches the allocation.
    pub fn write_to_file<P: AsRef<Path>>(&self, buffer: &PixelBuffer, path: P) -> Result<()> {
        buffer.check_consistent()?;
        let path = path.as_ref();
        debug!("writing {}x{} frame to {}", buffer.width(), buffer.height(), path.display());

        let file = File::create(path)?;
        self.encode(buffer, BufWriter::new(file))
    }

    /// Encode a pixel buffer to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(&self, buffer: &PixelBuffer) -> Result<Vec<u8>> {
        buffer.check_consistent()?;
        let mut bytes = Vec::new();
        self.encode(buffer, &mut bytes)?;
        Ok(bytes)
    }
}

/// Display collaborator that writes each presented frame to a PNG file.
#[derive(Debug, Clone)]
pub struct PngFile {
    path: PathBuf,
    encoder: PngEncoder,
}

impl PngFile {
    /// Present frames to `path`, overwriting it each time.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, encoder: PngEncoder) -> Self {
        Self { path: path.into(), encoder }
    }

    /// Target path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Display for PngFile {
    fn present(&mut self, buffer: &PixelBuffer) -> Result<()> {
        self.encoder.write_to_file(buffer, &self.path)
    }
}
