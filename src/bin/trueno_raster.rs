//! trueno-raster - render a sample scene in the three axonometric views.
//!
//! Usage: `trueno-raster [config.yaml] [--width N] [--height N]`. Without a config path
//! the configuration is read from `<config dir>/trueno-raster/config.yaml`, falling back
//! to defaults.

use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};
use trueno_raster::config::{OutputConfig, RasterConfig};
use trueno_raster::prelude::*;

/// Render a sample cube in the XY, XZ and YZ quadrant views.
#[derive(Parser, Debug)]
#[command(name = "trueno-raster")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Software line and polygon rasterizer", long_about = None)]
struct Cli {
    /// Config file path; a missing file is an error
    config: Option<PathBuf>,

    /// Override the configured screen width
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    width: Option<u32>,

    /// Override the configured screen height
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    height: Option<u32>,
}

/// A unit cube's six faces, scaled, plus a diagonal strut and two loose lines.
fn sample_scene(size: ScreenSize) -> Scene {
    let s = 100;
    let corner = |x: i32, y: i32, z: i32| {
        let color = Rgb::new(x as f32, y as f32, z as f32).lerp(Rgb::WHITE, 0.25);
        Vertex::new(x * s, y * s, z * s, color)
    };
    let face = |a: [i32; 3], b: [i32; 3], c: [i32; 3], d: [i32; 3]| {
        Polygon::new(vec![
            corner(a[0], a[1], a[2]),
            corner(b[0], b[1], b[2]),
            corner(c[0], c[1], c[2]),
            corner(d[0], d[1], d[2]),
        ])
    };

    let (w, h) = (size.width as i32, size.height as i32);
    let divider = Rgb::gray(0.35);

    Scene::new()
        .polygon(face([0, 0, 0], [1, 0, 0], [1, 1, 0], [0, 1, 0]))
        .polygon(face([0, 0, 1], [1, 0, 1], [1, 1, 1], [0, 1, 1]))
        .polygon(face([0, 0, 0], [0, 1, 0], [0, 1, 1], [0, 0, 1]).selected(true))
        .polygon(face([1, 0, 0], [1, 1, 0], [1, 1, 1], [1, 0, 1]))
        .polygon(Polygon::new(vec![corner(0, 0, 0), corner(1, 1, 1)]))
        .line(Line::new(Point::new(w / 2, 0, divider), Point::new(w / 2, h - 1, divider)))
        .line(Line::new(Point::new(0, h / 2, divider), Point::new(w - 1, h / 2, divider)))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => RasterConfig::load(path)?,
        None => RasterConfig::default_path().map(|p| RasterConfig::load_or_default(p)).unwrap_or_default(),
    };
    if let Some(width) = cli.width {
        config.render.width = width;
    }
    if let Some(height) = cli.height {
        config.render.height = height;
    }

    let render = &config.render;
    let mut compositor = Compositor::init_window(render.width, render.height)?
        .with_highlight(render.highlight)
        .with_line_algorithm(render.line_algorithm);

    let scene = sample_scene(compositor.size());
    let report = compositor.draw_views(&scene, &render.planes)?;
    info!(
        "drew {} polygons on {} planes and {} lines ({} pixels)",
        report.polygons,
        render.planes.len(),
        report.lines,
        report.pixels
    );
    for failure in &report.failures {
        warn!("{:?}: {}", failure.primitive, failure.error);
    }

    let mut display: Box<dyn Display> = match &config.output {
        OutputConfig::Png { path, tone_map } => {
            Box::new(PngFile::new(path.clone(), PngEncoder::new().tone_map(*tone_map)))
        }
        OutputConfig::Terminal { mode, columns } => {
            let encoder = TerminalEncoder::new().mode(*mode);
            Box::new(match columns {
                Some(c) => encoder.width(*c),
                None => encoder,
            })
        }
    };
    compositor.present(display.as_mut())?;

    Ok(())
}
