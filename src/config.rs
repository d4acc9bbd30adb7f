//! YAML configuration for the rasterizer.
//!
//! Every field has a default, so an empty document is a valid configuration.

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::geometry::ScreenSize;
use crate::output::{TerminalMode, ToneMap};
use crate::projection::ProjectionPlane;
use crate::render::LineAlgorithm;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Screen and drawing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Screen width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Screen height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Projection plane(s) drawn each frame.
    #[serde(default = "default_planes")]
    pub planes: Vec<ProjectionPlane>,

    /// Algorithm used for standalone scene lines.
    #[serde(default)]
    pub line_algorithm: LineAlgorithm,

    /// Color of selected polygons.
    #[serde(default = "default_highlight")]
    pub highlight: Rgb,
}

fn default_width() -> u32 {
    500
}
fn default_height() -> u32 {
    500
}
fn default_planes() -> Vec<ProjectionPlane> {
    ProjectionPlane::ALL.to_vec()
}
fn default_highlight() -> Rgb {
    Rgb::YELLOW
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            planes: default_planes(),
            line_algorithm: LineAlgorithm::default(),
            highlight: default_highlight(),
        }
    }
}

impl RenderConfig {
    /// Screen size described by `width` and `height`.
    #[must_use]
    pub const fn screen_size(&self) -> ScreenSize {
        ScreenSize::new(self.width, self.height)
    }
}

/// Where finished frames go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum OutputConfig {
    /// Write a PNG file.
    Png {
        /// Output path.
        path: PathBuf,
        /// Channel tone mapping.
        #[serde(default)]
        tone_map: ToneMap,
    },
    /// Print to the terminal.
    Terminal {
        /// Rendering mode.
        #[serde(default)]
        mode: TerminalMode,
        /// Width in characters.
        #[serde(default)]
        columns: Option<u32>,
    },
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::Terminal { mode: TerminalMode::default(), columns: None }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RasterConfig {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Screen and drawing settings.
    #[serde(default)]
    pub render: RenderConfig,

    /// Presentation target.
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            render: RenderConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl RasterConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse { line, message: e.to_string() }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Default location: `<config dir>/trueno-raster/config.yaml`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("trueno-raster").join("config.yaml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = RasterConfig::new();

        assert_eq!(config.version, 1);
        assert_eq!(config.render.screen_size(), ScreenSize::new(500, 500));
        assert_eq!(config.render.planes, ProjectionPlane::ALL.to_vec());
        assert_eq!(config.render.line_algorithm, LineAlgorithm::Dda);
        assert_eq!(config.render.highlight, Rgb::YELLOW);
    }

    #[test]
    fn test_config_parse_empty_document() {
        let config = RasterConfig::parse("{}").unwrap();
        assert_eq!(config.render.width, 500);
    }

    #[test]
    fn test_config_parse_full() {
        let yaml = r#"
version: 1
render:
  width: 640
  height: 480
  planes: [xz]
  line_algorithm: bresenham
  highlight: { r: 1.0, g: 0.0, b: 1.0 }
output:
  kind: png
  path: frame.png
  tone_map: normalize
"#;

        let config = RasterConfig::parse(yaml).unwrap();

        assert_eq!(config.render.screen_size(), ScreenSize::new(640, 480));
        assert_eq!(config.render.planes, vec![ProjectionPlane::Xz]);
        assert_eq!(config.render.line_algorithm, LineAlgorithm::Bresenham);
        assert_eq!(config.render.highlight, Rgb::new(1.0, 0.0, 1.0));
        assert_eq!(
            config.output,
            OutputConfig::Png { path: PathBuf::from("frame.png"), tone_map: ToneMap::Normalize }
        );
    }

    #[test]
    fn test_config_parse_terminal_output() {
        let yaml = "output:\n  kind: terminal\n  mode: ansi_true_color\n  columns: 60\n";
        let config = RasterConfig::parse(yaml).unwrap();

        assert_eq!(
            config.output,
            OutputConfig::Terminal { mode: TerminalMode::AnsiTrueColor, columns: Some(60) }
        );
    }

    #[test]
    fn test_config_parse_error_includes_line() {
        let yaml = r#"
version: 1
render:
  width: not_a_number
"#;

        let err = RasterConfig::parse(yaml).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { line: 4, .. }), "got {err}");
    }

    #[test]
    fn test_config_load_or_default() {
        let config = RasterConfig::load_or_default("/nonexistent/path");
        assert_eq!(config.version, 1);
    }

    #[test]
    fn test_config_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "render:\n  width: 64\n  height: 32\n").unwrap();

        let config = RasterConfig::load(&path).unwrap();
        assert_eq!(config.render.screen_size(), ScreenSize::new(64, 32));
    }
}
