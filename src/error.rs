//! Error types for trueno-raster operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-raster operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A pixel write landed outside the pixel buffer.
    #[error(
        "Point ({x}, {y}) outside of pixel buffer range (channel index {at}, buffer length {len})",
        at = .index.map_or_else(|| String::from("overflows i64"), |i| i.to_string())
    )]
    OutOfRange {
        /// X coordinate of the rejected pixel.
        x: i32,
        /// Y coordinate of the rejected pixel.
        y: i32,
        /// Computed channel index, `None` if the computation overflowed.
        index: Option<i64>,
        /// Buffer length in channels.
        len: usize,
    },

    /// Invalid dimensions for a pixel buffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Recorded screen size no longer matches the allocated buffer.
    #[error(
        "Screen size {width}x{height} needs {needs} channels but the buffer holds {actual}",
        needs = .expected.map_or_else(|| String::from("more than usize::MAX"), |n| n.to_string())
    )]
    SizeMismatch {
        /// Recorded width.
        width: u32,
        /// Recorded height.
        height: u32,
        /// Channel count implied by the recorded size, `None` if it overflows `usize`.
        expected: Option<usize>,
        /// Channel count actually allocated.
        actual: usize,
    },

    /// Polygon with too few vertices to rasterize.
    #[error("Polygon needs at least 2 vertices, got {0}")]
    DegeneratePolygon(usize),

    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),
}

impl Error {
    /// Returns true for bounds-check failures raised by pixel writes.
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}
