//! End-to-end behaviour through the public API.

use std::fmt::Write as _;

use glam::{DVec2, dvec2};
use insta::assert_snapshot;
use miette::Diagnostic;
use tilestroke::geometry::{split_and_fold, split_at_tile_boundaries};
use tilestroke::{
    ConfigError, DrawingState, Path, PatternConfig, PatternPipeline, RenderedTile, SmoothFactor,
    StrokeStyle, StrokeWidth, TileDimensions, TileRenderer, tile_paths,
};

fn hairline(points: &[(f64, f64)]) -> Path {
    let style = StrokeStyle {
        stroke_width: StrokeWidth::ZERO,
        smooth_factor: SmoothFactor::OFF,
        ..StrokeStyle::default()
    };
    Path::new(points.iter().map(|&(x, y)| dvec2(x, y)).collect(), style)
}

fn num(v: f64) -> String {
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 { "0".to_string() } else { r.to_string() }
}

fn point(p: DVec2) -> String {
    format!("({}, {})", num(p.x), num(p.y))
}

fn line(path: &Path) -> String {
    let tag = if path.intersects_grid { "cross" } else { "path " };
    let points: Vec<String> = path.points.iter().map(|&p| point(p)).collect();
    format!("{tag} {}", points.join(" "))
}

fn dump(paths: &[Path]) -> String {
    paths.iter().map(line).collect::<Vec<_>>().join("\n")
}

fn dump_tile(tile: &RenderedTile) -> String {
    format!(
        "tile {}x{}\n{}",
        num(tile.dimensions.width),
        num(tile.dimensions.height),
        dump(&tile.paths)
    )
}

/// Writes one line per draw call.
#[derive(Default)]
struct TextRenderer(String);

impl TileRenderer for TextRenderer {
    fn draw_path(&mut self, path: &Path, offset: DVec2) {
        let _ = writeln!(self.0, "{} {}", point(offset), line(path));
    }
}

const TILE: TileDimensions = TileDimensions {
    width: 100.0,
    height: 100.0,
};

// ==================== splitting ====================

#[test]
fn crossing_segment_is_isolated() {
    let path = hairline(&[(20.0, 0.0), (10.0, 0.0), (-10.0, 0.0), (-20.0, 0.0)]);
    assert_snapshot!(dump(&split_at_tile_boundaries(&path, TILE)), @r"
    path  (20, 0) (10, 0)
    cross (10, 0) (-10, 0)
    path  (-10, 0) (-20, 0)
    ");
}

#[test]
fn pieces_fold_by_their_first_point() {
    let path = hairline(&[(20.0, 0.0), (10.0, 0.0), (-10.0, 0.0), (-20.0, 0.0)]);
    assert_snapshot!(dump(&split_and_fold(&[path], TILE)), @r"
    path  (20, 0) (10, 0)
    cross (10, 0) (-10, 0)
    path  (90, 0) (80, 0)
    ");
}

// ==================== full pipeline ====================

#[test]
fn p2_pipeline_adds_the_half_turn() {
    let config = PatternConfig::builder().group_key("p2").build().unwrap();
    let tile = tile_paths(&[hairline(&[(30.0, 40.0), (70.0, 40.0), (70.0, 60.0)])], &config, false);
    assert_snapshot!(dump_tile(&tile), @r"
    tile 100x100
    path  (30, 40) (70, 40) (70, 60)
    path  (70, 60) (30, 60) (30, 40)
    ");
}

#[test]
fn p4_copies_cross_every_edge() {
    let config = PatternConfig::builder().group_key("P4").build().unwrap();
    let tile = tile_paths(&[hairline(&[(90.0, 50.0), (110.0, 50.0)])], &config, false);
    assert_snapshot!(dump_tile(&tile), @r"
    tile 100x100
    path  (90, 50)
    cross (90, 50) (110, 50)
    path  (10, 50)
    path  (50, 90)
    cross (50, 90) (50, 110)
    path  (50, 10)
    path  (10, 50)
    cross (10, 50) (-10, 50)
    path  (90, 50)
    path  (50, 10)
    cross (50, 10) (50, -10)
    path  (50, 90)
    ");
    // 8 in-tile pieces once each, 4 crossing pieces nine times each
    assert_eq!(tile.placements().count(), 8 + 4 * 9);
}

#[test]
fn crossing_pieces_are_drawn_at_every_neighbour() {
    let tile = tile_paths(
        &[hairline(&[(90.0, 50.0), (110.0, 50.0)])],
        &PatternConfig::default(),
        false,
    );
    let mut renderer = TextRenderer::default();
    tile.render(&mut renderer);
    assert_snapshot!(renderer.0.trim_end(), @r"
    (0, 0) path  (90, 50)
    (0, 0) cross (90, 50) (110, 50)
    (100, 0) cross (90, 50) (110, 50)
    (-100, 0) cross (90, 50) (110, 50)
    (0, 100) cross (90, 50) (110, 50)
    (0, -100) cross (90, 50) (110, 50)
    (100, 100) cross (90, 50) (110, 50)
    (100, -100) cross (90, 50) (110, 50)
    (-100, 100) cross (90, 50) (110, 50)
    (-100, -100) cross (90, 50) (110, 50)
    (0, 0) path  (10, 50)
    ");
}

#[test]
fn hexagonal_groups_use_the_tall_tile() {
    for key in ["p3", "p6"] {
        let config = PatternConfig::builder()
            .group_key(key)
            .tile_size(10.0)
            .build()
            .unwrap();
        let dims = PatternPipeline::new(config).dimensions();
        assert!((dims.width - 10.0 * 3f64.sqrt()).abs() < 1e-12);
        assert_eq!(dims.height, 30.0);
    }
}

#[test]
fn path_count_scales_with_the_group() {
    let stroke = hairline(&[(10.0, 10.0), (12.0, 11.0)]);
    let cases = [("p1", 1), ("p2", 2), ("p3", 6), ("p4", 4), ("p6", 12)];
    for (key, copies) in cases {
        let config = PatternConfig::builder()
            .group_key(key)
            .tile_size(1000.0)
            .build()
            .unwrap();
        let pipeline = PatternPipeline::new(config);
        let tile = pipeline.run(std::slice::from_ref(&stroke), false);
        let inside = tile.paths.iter().filter(|p| !p.intersects_grid).count();
        assert!(inside >= copies, "{key}: {inside} < {copies}");
        assert_eq!(pipeline.transformer().copy_count() + 1, copies, "{key}");
    }
}

// ==================== drawing session ====================

#[test]
fn live_stroke_is_not_simplified_by_default() {
    let pipeline = PatternPipeline::new(PatternConfig::default());
    let mut state = DrawingState::new()
        .with_smooth_factor(SmoothFactor::OFF)
        .with_stroke_width(StrokeWidth::ZERO)
        .press(dvec2(10.0, 10.0));
    for i in 1..=20 {
        state = state.drag(dvec2(10.0 + i as f64 * 2.0, 10.0));
    }

    let live = state.render(&pipeline);
    assert_eq!(live.paths.len(), 1);
    assert_eq!(live.paths[0].len(), 21);

    let finished = state.release().render(&pipeline);
    assert_eq!(finished.paths[0].points, vec![dvec2(10.0, 10.0), dvec2(50.0, 10.0)]);
}

#[test]
fn undo_restores_the_previous_tile() {
    let pipeline = PatternPipeline::new(PatternConfig::builder().group_key("p2").build().unwrap());
    let one = DrawingState::new()
        .with_stroke_width(StrokeWidth::ZERO)
        .press(dvec2(20.0, 20.0))
        .drag(dvec2(30.0, 20.0))
        .release();
    let two = one.clone().press(dvec2(60.0, 70.0)).drag(dvec2(61.0, 75.0)).release();

    assert_eq!(two.clone().undo().render(&pipeline), one.render(&pipeline));
    assert_eq!(two.clone().undo().redo().render(&pipeline), two.render(&pipeline));
}

// ==================== configuration errors ====================

#[test]
fn unknown_group_has_a_diagnostic() {
    let err = PatternConfig::builder().group_key("pmm").build().unwrap_err();
    assert!(matches!(err, ConfigError::UnknownGroup { .. }));
    assert_eq!(
        err.code().map(|c| c.to_string()).as_deref(),
        Some("tilestroke::config::unknown_group")
    );
    assert_eq!(
        err.help().map(|h| h.to_string()).as_deref(),
        Some("known groups: p1, p2, p3, p4, p6")
    );
}

#[test]
fn invalid_numbers_are_rejected_with_their_value() {
    let err = PatternConfig::builder().tile_size(f64::NAN).build().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTileSize { value, .. } if value.is_nan()));

    let err = PatternConfig::builder().zoom(0.0).build().unwrap_err();
    assert_eq!(err.to_string(), "invalid zoom level: 0");
}
