//! # Trueno-Raster
//!
//! Software rasterizer core: turns lines and polygons into pixels in an owned
//! floating-point RGB framebuffer.
//!
//! Polygons are given as 3D integer vertices and drawn as axonometric views: each
//! [`ProjectionPlane`](projection::ProjectionPlane) drops one axis, the projected outline
//! is normalized to its bounding box and stretched over one quadrant of the screen, and
//! the edges are rasterized with an incremental line algorithm.
//!
//! ## Features
//!
//! - **DDA and Bresenham** line rasterization with identical output on axis-aligned and
//!   diagonal lines
//! - **Quadrant views**: XY, XZ and YZ projections side by side in one frame
//! - **Bounds-checked writes** with per-primitive failure isolation
//! - **Outputs**: PNG and terminal (ASCII/Unicode/ANSI)
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_raster::prelude::*;
//!
//! let scene = Scene::new().polygon(Polygon::new(vec![
//!     Vertex::at(0, 0, 0),
//!     Vertex::at(10, 0, 5),
//!     Vertex::at(10, 10, 10),
//! ]));
//!
//! let mut compositor = Compositor::init_window(64, 64)?;
//! let report = compositor.draw_scene(&scene, ProjectionPlane::Xy)?;
//! assert!(report.is_clean());
//! # Ok::<(), trueno_raster::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `config`: YAML configuration via serde (enabled by default)

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color type for the floating-point buffer.
pub mod color;

/// Floating-point RGB pixel buffer.
pub mod framebuffer;

/// Geometric primitives (points, vertices, lines, polygons).
pub mod geometry;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Line rasterization algorithms.
pub mod render;

/// Axonometric projection and quadrant placement.
pub mod projection;

/// Scene model boundary.
pub mod scene;

/// Frame composition and the rendering context.
pub mod compositor;

/// Display collaborators (PNG, terminal).
pub mod output;

// ============================================================================
// Configuration
// ============================================================================

/// YAML configuration.
#[cfg(feature = "config")]
#[cfg_attr(docsrs, doc(cfg(feature = "config")))]
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgb;
    pub use crate::compositor::{vertices_to_edges, Compositor, FrameReport, Primitive};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::PixelBuffer;
    pub use crate::geometry::{Line, Point, Polygon, ScreenSize, Vertex};
    pub use crate::output::{Display, FrameCapture, PngEncoder, PngFile, TerminalEncoder, TerminalMode, ToneMap};
    pub use crate::projection::{map_to_quadrant, normalize, project, ProjectionPlane, Quadrant};
    pub use crate::render::{draw_line, Drawable, LineAlgorithm};
    pub use crate::scene::{Scene, SceneSource};
    pub use batuta_common::display::WithDimensions;
}
