//! Terminal output encoder (ASCII/Unicode/ANSI).
//!
//! Renders pixel buffers to terminal-compatible text output.
//! Supports multiple rendering modes:
//! - ASCII: Uses characters like ` .:-=+*#%@` for grayscale
//! - Unicode: Uses half-block characters for 2x vertical resolution
//! - ANSI: Adds 24-bit color codes for full color output
//!
//! Sampling is nearest-neighbour, so thin lines may drop out when downscaling.

use super::Display;
use crate::color::Rgb;
use crate::error::Result;
use crate::framebuffer::PixelBuffer;
use std::fmt::Write as FmtWrite;
use std::io::Write as IoWrite;

/// Terminal rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum TerminalMode {
    /// ASCII grayscale characters (widest compatibility)
    #[default]
    Ascii,
    /// Unicode half-block characters (2x vertical resolution)
    UnicodeHalfBlock,
    /// Full cells with ANSI 24-bit background color
    AnsiTrueColor,
}

/// Terminal encoder configuration.
#[derive(Debug, Clone, Default)]
pub struct TerminalEncoder {
    mode: TerminalMode,
    width: Option<u32>,
    height: Option<u32>,
}

impl TerminalEncoder {
    /// ASCII grayscale ramp from dark to light (10 levels).
    const ASCII_RAMP: &'static [char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

    /// Create a new terminal encoder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rendering mode.
    #[must_use]
    pub fn mode(mut self, mode: TerminalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the target width in characters.
    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the target height in lines.
    #[must_use]
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Render a pixel buffer to a string.
    #[must_use]
    pub fn render(&self, buffer: &PixelBuffer) -> String {
        match self.mode {
            TerminalMode::Ascii => self.render_ascii(buffer),
            TerminalMode::UnicodeHalfBlock => self.render_half_block(buffer),
            TerminalMode::AnsiTrueColor => self.render_ansi(buffer),
        }
    }

    fn render_ascii(&self, buffer: &PixelBuffer) -> String {
        let (w, h) = self.compute_dimensions(buffer, 2.0);
        let mut output = String::with_capacity((w + 1) as usize * h as usize);

        for y in 0..h {
            for x in 0..w {
                let luma = self.sample_color(buffer, x, y, w, h).luminance();
                output.push(Self::ASCII_RAMP[Self::luma_to_index(luma)]);
            }
            output.push('\n');
        }

        output
    }

    fn render_half_block(&self, buffer: &PixelBuffer) -> String {
        let (w, h) = self.compute_dimensions(buffer, 1.0);
        // Round up to even height for half-blocks
        let h = (h + 1) & !1;
        let mut output = String::with_capacity((w * 40 + 5) as usize * (h / 2) as usize);

        for y in (0..h).step_by(2) {
            for x in 0..w {
                let top = self.sample(buffer, x, y, w, h);
                let bottom = self.sample(buffer, x, y + 1, w, h);
                let _ = write!(
                    output,
                    "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m▀",
                    top.0, top.1, top.2, bottom.0, bottom.1, bottom.2
                );
            }
            output.push_str("\x1b[0m\n");
        }

        output
    }

    fn render_ansi(&self, buffer: &PixelBuffer) -> String {
        let (w, h) = self.compute_dimensions(buffer, 2.0);
        let mut output = String::with_capacity((w * 20 + 5) as usize * h as usize);

        for y in 0..h {
            for x in 0..w {
                let (r, g, b) = self.sample(buffer, x, y, w, h);
                let _ = write!(output, "\x1b[48;2;{r};{g};{b}m ");
            }
            output.push_str("\x1b[0m\n");
        }

        output
    }

    /// Compute target dimensions preserving aspect ratio.
    /// `char_aspect` is the approximate height/width ratio of a character cell.
    fn compute_dimensions(&self, buffer: &PixelBuffer, char_aspect: f32) -> (u32, u32) {
        let aspect = buffer.width() as f32 / buffer.height().max(1) as f32;

        match (self.width, self.height) {
            (Some(w), Some(h)) => (w.max(1), h.max(1)),
            (Some(w), None) => {
                let h = (w as f32 / aspect / char_aspect).round() as u32;
                (w.max(1), h.max(1))
            }
            (None, Some(h)) => {
                let w = (h as f32 * aspect * char_aspect).round() as u32;
                (w.max(1), h.max(1))
            }
            (None, None) => {
                let w = 80u32.min(buffer.width()).max(1);
                let h = (w as f32 / aspect / char_aspect).round() as u32;
                (w, h.max(1))
            }
        }
    }

    /// Nearest-neighbour sample of the cell at (x, y) in a `w` x `h` grid.
    fn sample(&self, buffer: &PixelBuffer, x: u32, y: u32, w: u32, h: u32) -> (u8, u8, u8) {
        let [r, g, b] = self.sample_color(buffer, x, y, w, h).to_rgb8();
        (r, g, b)
    }

    /// Same cell as [`Self::sample`], with channels clamped to `[0, 1]`.
    fn sample_color(&self, buffer: &PixelBuffer, x: u32, y: u32, w: u32, h: u32) -> Rgb {
        let sx = (u64::from(x) * u64::from(buffer.width()) / u64::from(w)) as i32;
        let sy = (u64::from(y) * u64::from(buffer.height()) / u64::from(h)) as i32;

        buffer
            .get_pixel(sx, sy)
            .map_or(Rgb::BLACK, |c| Rgb::from_array(c.to_array().map(|v| v.clamp(0.0, 1.0))))
    }

    /// Convert luminance (0.0-1.0) to ASCII ramp index.
    fn luma_to_index(luma: f32) -> usize {
        let idx = (luma * (Self::ASCII_RAMP.len() - 1) as f32).round() as usize;
        idx.min(Self::ASCII_RAMP.len() - 1)
    }
}

impl Display for TerminalEncoder {
    fn present(&mut self, buffer: &PixelBuffer) -> Result<()> {
        let frame = self.render(buffer);
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(frame.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(width: u32, height: u32, color: Rgb) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(width, height).unwrap();
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                buffer.set_pixel(x, y, color).unwrap();
            }
        }
        buffer
    }

    #[test]
    fn test_ascii_render_white() {
        let buffer = filled(10, 10, Rgb::WHITE);
        let output = TerminalEncoder::new().width(5).render(&buffer);

        assert!(output.contains('@'));
        assert!(!output.contains(' '));
    }

    #[test]
    fn test_ascii_clamps_before_luminance() {
        let bright = TerminalEncoder::new().width(5).render(&filled(10, 10, Rgb::gray(4.0)));
        let white = TerminalEncoder::new().width(5).render(&filled(10, 10, Rgb::WHITE));
        let negative = TerminalEncoder::new().width(5).render(&filled(10, 10, Rgb::gray(-2.0)));

        assert_eq!(bright, white);
        assert!(negative.chars().filter(|&c| c != '\n').all(|c| c == ' '));
    }

    #[test]
    fn test_ascii_render_cleared() {
        let buffer = PixelBuffer::new(10, 10).unwrap();
        let output = TerminalEncoder::new().width(5).render(&buffer);

        assert!(output.chars().filter(|&c| c != '\n').all(|c| c == ' '));
    }

    #[test]
    fn test_half_block_contains_ansi() {
        let buffer = filled(10, 10, Rgb::RED);
        let output = TerminalEncoder::new().mode(TerminalMode::UnicodeHalfBlock).width(5).render(&buffer);

        assert!(output.contains("\x1b[38;2;255;0;0m"));
        assert!(output.contains('▀'));
        assert!(output.contains("\x1b[0m"));
    }

    #[test]
    fn test_ansi_true_color() {
        let buffer = filled(10, 10, Rgb::BLUE);
        let output = TerminalEncoder::new().mode(TerminalMode::AnsiTrueColor).width(5).render(&buffer);

        assert!(output.contains("48;2;0;0;255"));
    }

    #[test]
    fn test_custom_dimensions() {
        let buffer = PixelBuffer::new(100, 100).unwrap();
        let output = TerminalEncoder::new().width(20).height(10).render(&buffer);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0].len(), 20);
    }

    #[test]
    fn test_default_width_capped_at_80() {
        let buffer = PixelBuffer::new(1000, 100).unwrap();
        let output = TerminalEncoder::new().render(&buffer);
        let first_line = output.lines().next().expect("output should have a line");

        assert!(first_line.len() <= 80);
    }

    #[test]
    fn test_full_resolution_shows_single_pixel() {
        let mut buffer = PixelBuffer::new(4, 4).unwrap();
        buffer.set_pixel(2, 1, Rgb::WHITE).unwrap();

        let output = TerminalEncoder::new().width(4).height(4).render(&buffer);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[1], "  @ ");
        assert_eq!(lines[0], "    ");
    }
}
