//! Frame composition tests: projection chain, quadrant placement, failure isolation.
//!
//! Run: cargo test --test compositor_test

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use trueno_raster::prelude::*;

struct FixedScene {
    lines: Vec<Line>,
    polygons: Vec<Polygon>,
}

impl SceneSource for FixedScene {
    fn lines(&self) -> Vec<Line> {
        self.lines.clone()
    }

    fn polygons(&self) -> Vec<Polygon> {
        self.polygons.clone()
    }
}

/// Scene source whose clipping hook drops every standalone line.
struct NoLines(Scene);

impl SceneSource for NoLines {
    fn lines(&self) -> Vec<Line> {
        self.0.lines()
    }

    fn polygons(&self) -> Vec<Polygon> {
        self.0.polygons()
    }

    fn clip(&self, lines: &mut Vec<Line>, _polygons: &mut Vec<Polygon>) {
        lines.clear();
    }
}

fn lit(buffer: &PixelBuffer) -> Vec<(u32, u32)> {
    buffer.pixels().filter(|(_, _, c)| *c != Rgb::BLACK).map(|(x, y, _)| (x, y)).collect()
}

fn square() -> Polygon {
    Polygon::new(vec![
        Vertex::at(0, 0, 0),
        Vertex::at(10, 0, 10),
        Vertex::at(10, 10, 10),
        Vertex::at(0, 10, 0),
    ])
}

#[test]
fn clear_zeroes_every_channel() {
    let mut compositor = Compositor::init_window(16, 16).unwrap();
    compositor.draw_scene(&Scene::new().polygon(square()), ProjectionPlane::Xy).unwrap();
    assert!(!lit(compositor.buffer()).is_empty());

    compositor.clear();
    assert!(compositor.buffer().channels().iter().all(|&c| c == 0.0));
}

#[test]
fn each_plane_stays_in_its_quadrant() {
    let size = ScreenSize::new(40, 30);
    let scene = Scene::new().polygon(square());

    for plane in ProjectionPlane::ALL {
        let mut compositor = Compositor::init_window(size.width, size.height).unwrap();
        let report = compositor.draw_scene(&scene, plane).unwrap();
        assert!(report.is_clean());

        let quad = plane.quadrant(size);
        let pixels = lit(compositor.buffer());
        assert!(!pixels.is_empty());
        for (x, y) in pixels {
            assert!(quad.contains(x as i32, y as i32), "{plane:?} drew ({x}, {y}) outside {quad:?}");
        }
    }
}

#[test]
fn square_outline_fills_quadrant_border() {
    let mut compositor = Compositor::init_window(20, 20).unwrap();
    compositor.draw_scene(&Scene::new().polygon(square()), ProjectionPlane::Xy).unwrap();

    // Quadrant is [0, 9] x [0, 9]; the outline is its border.
    let pixels = lit(compositor.buffer());
    assert_eq!(pixels.len(), 36);
    assert!(pixels.iter().all(|&(x, y)| x == 0 || x == 9 || y == 0 || y == 9));
}

#[test]
fn polygons_draw_before_lines() {
    let mut compositor = Compositor::init_window(20, 20).unwrap();
    let scene = FixedScene {
        lines: vec![Line::new(Point::new(0, 0, Rgb::RED), Point::new(9, 0, Rgb::RED))],
        polygons: vec![square()],
    };

    compositor.draw_scene(&scene, ProjectionPlane::Xy).unwrap();

    // The line overwrites the polygon's top edge.
    assert_eq!(compositor.buffer().get_pixel(5, 0), Some(Rgb::RED));
    assert_eq!(compositor.buffer().get_pixel(0, 5), Some(Rgb::WHITE));
}

#[test]
fn clip_hook_is_applied() {
    let mut compositor = Compositor::init_window(20, 20).unwrap();
    let scene = NoLines(Scene::new().line(Line::from_coords(15, 15, 19, 19)));

    let report = compositor.draw_scene(&scene, ProjectionPlane::Xy).unwrap();

    assert_eq!(report.lines, 0);
    assert!(lit(compositor.buffer()).is_empty());
}

#[test]
fn failing_primitives_do_not_blank_the_frame() {
    let mut compositor = Compositor::init_window(20, 20).unwrap();
    let scene = Scene::new()
        .polygon(Polygon::new(vec![Vertex::at(3, 3, 3)]))
        .polygon(square())
        .line(Line::from_coords(5, 18, 5, 25))
        .line(Line::from_coords(12, 12, 18, 12));

    let report = compositor.draw_scene(&scene, ProjectionPlane::Xy).unwrap();

    let failed: Vec<Primitive> = report.failures.iter().map(|f| f.primitive).collect();
    assert_eq!(failed, vec![Primitive::Polygon(0), Primitive::Line(0)]);
    assert!(report.failures[1].error.is_out_of_range());

    assert_eq!(compositor.buffer().get_pixel(9, 9), Some(Rgb::WHITE));
    assert_eq!(compositor.buffer().get_pixel(18, 12), Some(Rgb::WHITE));
}

#[test]
fn draw_point_out_of_range_leaves_buffer_unmodified() {
    let mut compositor = Compositor::init_window(10, 10).unwrap();
    compositor.draw_point(Point::new(2, 2, Rgb::BLUE)).unwrap();
    let before = compositor.buffer().channels().to_vec();

    for (x, y) in [(-1, -1), (0, 10), (9, 10), (-10, 0)] {
        let err = compositor.draw_point(Point::at(x, y)).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { .. }));
    }

    assert_eq!(compositor.buffer().channels(), before.as_slice());
}

#[test]
fn set_size_without_reinit_is_rejected_at_frame_start() {
    let mut compositor = Compositor::init_window(10, 10).unwrap();
    compositor.set_size(ScreenSize::new(10, 12));

    assert!(compositor.draw_scene(&Scene::new(), ProjectionPlane::Xy).is_err());

    compositor.set_size(ScreenSize::new(10, 10));
    assert!(compositor.draw_scene(&Scene::new(), ProjectionPlane::Xy).is_ok());
}

#[test]
fn overflowing_recorded_size_returns_errors() {
    let mut compositor = Compositor::init_window(4, 4).unwrap();

    compositor.set_size(ScreenSize::new(u32::MAX, 1));
    let err = compositor.draw_point(Point::at(i32::MAX, i32::MAX)).unwrap_err();
    assert!(matches!(err, Error::OutOfRange { index: None, .. }));

    compositor.set_size(ScreenSize::new(u32::MAX, u32::MAX));
    let err = compositor.draw_scene(&Scene::new(), ProjectionPlane::Xy).unwrap_err();
    assert!(matches!(err, Error::SizeMismatch { expected: None, .. }));
}

#[test]
fn single_pixel_screen_reports_every_edge() {
    let mut compositor = Compositor::init_window(1, 1).unwrap();

    let report = compositor.draw_scene(&Scene::new().polygon(square()), ProjectionPlane::Xy).unwrap();

    let edges: Vec<Primitive> = report.failures.iter().map(|f| f.primitive).collect();
    assert_eq!(edges, (0..4).map(|edge| Primitive::PolygonEdge { polygon: 0, edge }).collect::<Vec<_>>());
    assert!(report.failures.iter().all(|f| f.error.is_out_of_range()));
}

#[test]
fn all_views_in_one_frame() {
    let size = ScreenSize::new(40, 40);
    let mut compositor = Compositor::init_window(size.width, size.height).unwrap();

    let report = compositor.draw_views(&Scene::new().polygon(square()), &ProjectionPlane::ALL).unwrap();
    assert!(report.is_clean());

    for plane in ProjectionPlane::ALL {
        let quad = plane.quadrant(size);
        assert_eq!(compositor.buffer().get_pixel(quad.min_x, quad.min_y), Some(Rgb::WHITE));
    }
    // Bottom-right quadrant has no view.
    assert_eq!(compositor.buffer().get_pixel(30, 30), Some(Rgb::BLACK));
}

#[test]
fn edges_close_the_loop() {
    let pts: Vec<Point> = (0..5).map(|i| Point::at(i, i * i)).collect();
    let edges = vertices_to_edges(&pts);

    assert_eq!(edges.len(), 5);
    assert_eq!(edges[4].start, pts[4]);
    assert_eq!(edges[4].end, pts[0]);
    for i in 1..5 {
        assert_eq!(edges[i - 1], Line::new(pts[i - 1], pts[i]));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_quadrant_mapping_in_bounds(
        coords in prop::collection::vec((-10_000i32..10_000, -10_000i32..10_000), 1..12),
        width in 2u32..1200,
        height in 2u32..1200,
        plane_idx in 0usize..3,
    ) {
        let plane = ProjectionPlane::ALL[plane_idx];
        let size = ScreenSize::new(width, height);
        let points: Vec<Point> = coords.iter().map(|&(x, y)| Point::at(x, y)).collect();

        let quad = plane.quadrant(size);
        for p in map_to_quadrant(&points, plane, size) {
            prop_assert!(quad.contains(p.x, p.y), "{:?} outside {:?}", p, quad);
        }
    }

    #[test]
    fn prop_normalize_in_unit_range(
        coords in prop::collection::vec((any::<i32>(), any::<i32>()), 1..16),
    ) {
        let points: Vec<Point> = coords.iter().map(|&(x, y)| Point::at(x, y)).collect();
        let (nx, ny) = normalize(&points);

        prop_assert_eq!(nx.len(), points.len());
        for v in nx.into_iter().chain(ny) {
            prop_assert!(v.is_finite() && (0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn prop_shared_axis_normalizes_to_zero(x in any::<i32>(), ys in prop::collection::vec(any::<i32>(), 1..10)) {
        let points: Vec<Point> = ys.iter().map(|&y| Point::at(x, y)).collect();
        let (nx, _) = normalize(&points);
        prop_assert!(nx.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn prop_scene_frames_are_clean(
        polys in prop::collection::vec(
            prop::collection::vec((-50i32..50, -50i32..50, -50i32..50), 2..7),
            0..5,
        ),
        width in 2u32..200,
        height in 2u32..200,
        plane_idx in 0usize..3,
    ) {
        let mut scene = Scene::new();
        for verts in polys {
            scene.push_polygon(Polygon::new(verts.into_iter().map(|(x, y, z)| Vertex::at(x, y, z)).collect()));
        }

        let mut compositor = Compositor::init_window(width, height).unwrap();
        let report = compositor.draw_scene(&scene, ProjectionPlane::ALL[plane_idx]).unwrap();
        prop_assert!(report.is_clean());
    }
}
