//! The full redraw pipeline: conditioning → symmetry expansion → splitting.
//!
//! Every redraw recomputes the whole path list. Stages run strictly in order
//! and each consumes the previous stage's complete output.

use glam::DVec2;

use crate::defaults;
use crate::errors::ConfigError;
use crate::geometry::split::split_and_fold;
use crate::geometry::{Group, TileDimensions, Transformer, WallpaperGroup};
use crate::log::debug;
use crate::path::Path;
use crate::stroke::Conditioner;
use crate::types::{TileSize, ZoomLevel};

/// Validated settings for one pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternConfig {
    pub tile_size: TileSize,
    pub zoom: ZoomLevel,
    pub group: Group,
    /// Simplify the stroke still being drawn, not only finished ones
    pub simplify_in_progress: bool,
    /// Skip the radial-distance pre-pass when simplifying
    pub high_quality_simplify: bool,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            tile_size: defaults::TILE_SIZE,
            zoom: ZoomLevel::ONE,
            group: Group::default(),
            simplify_in_progress: false,
            high_quality_simplify: false,
        }
    }
}

impl PatternConfig {
    pub fn builder() -> PatternConfigBuilder {
        PatternConfigBuilder::default()
    }

    pub fn tile_dimensions(&self) -> TileDimensions {
        self.group.tile_dimensions(self.tile_size)
    }
}

/// Collects raw settings and validates them all in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct PatternConfigBuilder {
    tile_size: Option<f64>,
    zoom: Option<f64>,
    group_key: Option<String>,
    simplify_in_progress: Option<bool>,
    high_quality_simplify: Option<bool>,
}

impl PatternConfigBuilder {
    pub fn tile_size(mut self, tile_size: f64) -> Self {
        self.tile_size = Some(tile_size);
        self
    }

    pub fn zoom(mut self, zoom: f64) -> Self {
        self.zoom = Some(zoom);
        self
    }

    pub fn group_key(mut self, key: impl Into<String>) -> Self {
        self.group_key = Some(key.into());
        self
    }

    pub fn simplify_in_progress(mut self, enabled: bool) -> Self {
        self.simplify_in_progress = Some(enabled);
        self
    }

    pub fn high_quality_simplify(mut self, enabled: bool) -> Self {
        self.high_quality_simplify = Some(enabled);
        self
    }

    pub fn build(self) -> Result<PatternConfig, ConfigError> {
        let defaults = PatternConfig::default();

        let tile_size = match self.tile_size {
            Some(value) => TileSize::try_new(value)
                .map_err(|reason| ConfigError::InvalidTileSize { value, reason })?,
            None => defaults.tile_size,
        };
        let zoom = match self.zoom {
            Some(value) => {
                ZoomLevel::try_new(value).map_err(|reason| ConfigError::InvalidZoom { value, reason })?
            }
            None => defaults.zoom,
        };
        let group = match self.group_key.as_deref() {
            Some(key) => Group::from_key(key)?,
            None => defaults.group,
        };

        Ok(PatternConfig {
            tile_size,
            zoom,
            group,
            simplify_in_progress: self
                .simplify_in_progress
                .unwrap_or(defaults.simplify_in_progress),
            high_quality_simplify: self
                .high_quality_simplify
                .unwrap_or(defaults.high_quality_simplify),
        })
    }
}

/// A pipeline bound to one configuration.
///
/// The repeat unit and the symmetry matrices depend only on the group and
/// tile size, so they are built once here and reused for every redraw.
#[derive(Debug, Clone)]
pub struct PatternPipeline {
    config: PatternConfig,
    dimensions: TileDimensions,
    transformer: Transformer,
    conditioner: Conditioner,
}

impl PatternPipeline {
    pub fn new(config: PatternConfig) -> Self {
        let dimensions = config.tile_dimensions();
        let transformer = config.group.create_transformer(dimensions);
        Self {
            config,
            dimensions,
            transformer,
            conditioner: Self::conditioner_for(&config),
        }
    }

    fn conditioner_for(config: &PatternConfig) -> Conditioner {
        Conditioner {
            high_quality: config.high_quality_simplify,
            simplify_in_progress: config.simplify_in_progress,
            ..Conditioner::new(config.zoom)
        }
    }

    pub fn config(&self) -> &PatternConfig {
        &self.config
    }

    pub fn dimensions(&self) -> TileDimensions {
        self.dimensions
    }

    pub fn transformer(&self) -> &Transformer {
        &self.transformer
    }

    /// Same pipeline at a different zoom. Only the simplification tolerance
    /// changes; the transformer is kept.
    pub fn with_zoom(&self, zoom: ZoomLevel) -> Self {
        let config = PatternConfig { zoom, ..self.config };
        Self {
            config,
            dimensions: self.dimensions,
            transformer: self.transformer.clone(),
            conditioner: Self::conditioner_for(&config),
        }
    }

    /// Turn the current path list into one tile's worth of renderable paths.
    ///
    /// When `in_progress` is set, the last path is the stroke still under the
    /// pointer.
    pub fn run(&self, paths: &[Path], in_progress: bool) -> RenderedTile {
        let conditioned = self.conditioner.condition_all(paths, in_progress);
        let expanded = self.transformer.apply(&conditioned);
        let tiled = split_and_fold(&expanded, self.dimensions);

        debug!(
            group = %self.config.group,
            width = self.dimensions.width,
            height = self.dimensions.height,
            input = paths.len(),
            expanded = expanded.len(),
            output = tiled.len(),
            "pattern pipeline run"
        );

        RenderedTile {
            dimensions: self.dimensions,
            paths: tiled,
        }
    }
}

/// Output of one pipeline run, ready to go into a repeating-pattern primitive
/// of size `dimensions`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTile {
    pub dimensions: TileDimensions,
    pub paths: Vec<Path>,
}

/// One draw call: a path and where to put it relative to the tile origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement<'a> {
    pub path: &'a Path,
    pub offset: DVec2,
}

/// Receives the draw calls for one tile.
pub trait TileRenderer {
    fn begin_tile(&mut self, _dimensions: TileDimensions) {}

    fn draw_path(&mut self, path: &Path, offset: DVec2);

    fn end_tile(&mut self) {}
}

impl RenderedTile {
    /// Every draw call for this tile. Paths inside the tile are placed once at
    /// the origin; crossing paths are placed at the tile and its eight
    /// neighbours so the part poking into another repeat is drawn too.
    pub fn placements(&self) -> impl Iterator<Item = Placement<'_>> {
        let offsets = self.dimensions.neighbour_offsets();
        self.paths.iter().flat_map(move |path| {
            let count = if path.intersects_grid { offsets.len() } else { 1 };
            (0..count).map(move |i| Placement {
                path,
                offset: offsets[i],
            })
        })
    }

    pub fn render<R: TileRenderer + ?Sized>(&self, renderer: &mut R) {
        renderer.begin_tile(self.dimensions);
        for placement in self.placements() {
            renderer.draw_path(placement.path, placement.offset);
        }
        renderer.end_tile();
    }

    pub fn crossing_count(&self) -> usize {
        self.paths.iter().filter(|p| p.intersects_grid).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::StrokeStyle;
    use crate::types::StrokeWidth;
    use glam::dvec2;

    fn hairline(points: &[(f64, f64)]) -> Path {
        let style = StrokeStyle {
            stroke_width: StrokeWidth::ZERO,
            ..StrokeStyle::default()
        };
        Path::new(points.iter().map(|&(x, y)| dvec2(x, y)).collect(), style)
    }

    #[derive(Default)]
    struct Recorder {
        tiles: Vec<TileDimensions>,
        calls: Vec<(usize, DVec2)>,
        finished: bool,
    }

    impl TileRenderer for Recorder {
        fn begin_tile(&mut self, dimensions: TileDimensions) {
            self.tiles.push(dimensions);
        }

        fn draw_path(&mut self, path: &Path, offset: DVec2) {
            self.calls.push((path.len(), offset));
        }

        fn end_tile(&mut self) {
            self.finished = true;
        }
    }

    #[test]
    fn builder_defaults_match_default_config() {
        assert_eq!(PatternConfig::builder().build(), Ok(PatternConfig::default()));
    }

    #[test]
    fn builder_validates_inputs() {
        assert!(matches!(
            PatternConfig::builder().tile_size(0.0).build(),
            Err(ConfigError::InvalidTileSize { .. })
        ));
        assert!(matches!(
            PatternConfig::builder().zoom(-2.0).build(),
            Err(ConfigError::InvalidZoom { .. })
        ));
        assert!(matches!(
            PatternConfig::builder().group_key("cmm").build(),
            Err(ConfigError::UnknownGroup { .. })
        ));
    }

    #[test]
    fn builder_resolves_group_key() {
        let config = PatternConfig::builder()
            .group_key("p3")
            .tile_size(50.0)
            .build()
            .unwrap();
        assert_eq!(config.group.key(), "p3");
        assert_eq!(config.tile_dimensions().height, 150.0);
    }

    #[test]
    fn crossing_paths_are_placed_nine_times() {
        let pipeline = PatternPipeline::new(PatternConfig::default());
        let tile = pipeline.run(&[hairline(&[(20.0, 50.0), (-20.0, 50.0)])], false);

        assert_eq!(tile.crossing_count(), 1);
        let placements: Vec<_> = tile.placements().collect();
        // [start], crossing x9, [end]
        assert_eq!(placements.len(), 11);

        let mut recorder = Recorder::default();
        tile.render(&mut recorder);
        assert_eq!(recorder.tiles, vec![TileDimensions::square(100.0)]);
        assert_eq!(recorder.calls.len(), 11);
        assert!(recorder.finished);
    }

    #[test]
    fn p2_run_doubles_and_folds() {
        let config = PatternConfig::builder().group_key("p2").build().unwrap();
        let pipeline = PatternPipeline::new(config);
        let tile = pipeline.run(&[hairline(&[(10.0, 10.0), (20.0, 20.0)])], false);

        assert_eq!(tile.paths.len(), 2);
        assert_eq!(tile.paths[0].points, vec![dvec2(10.0, 10.0), dvec2(20.0, 20.0)]);
        let rotated = &tile.paths[1].points;
        assert!(rotated[0].abs_diff_eq(dvec2(90.0, 90.0), 1e-9));
        assert!(rotated[1].abs_diff_eq(dvec2(80.0, 80.0), 1e-9));
    }

    #[test]
    fn every_untagged_output_lies_in_the_tile() {
        let config = PatternConfig::builder()
            .group_key("p3")
            .tile_size(40.0)
            .build()
            .unwrap();
        let pipeline = PatternPipeline::new(config);
        let stroke = hairline(&[(5.0, 5.0), (30.0, 12.0), (64.0, 70.0), (90.0, 130.0)]);
        let tile = pipeline.run(&[stroke], false);
        let dims = tile.dimensions;
        let eps = 1e-9;

        for path in tile.paths.iter().filter(|p| !p.intersects_grid) {
            for p in &path.points {
                assert!(p.x >= -eps && p.x <= dims.width + eps, "{p} outside tile");
                assert!(p.y >= -eps && p.y <= dims.height + eps, "{p} outside tile");
            }
        }
    }

    #[test]
    fn zoom_change_keeps_transformer() {
        let config = PatternConfig::builder().group_key("p4").build().unwrap();
        let pipeline = PatternPipeline::new(config);
        let zoomed = pipeline.with_zoom(ZoomLevel::try_new(8.0).unwrap());
        assert_eq!(zoomed.transformer(), pipeline.transformer());
        assert_eq!(zoomed.config().zoom.raw(), 8.0);
    }
}
