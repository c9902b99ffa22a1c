//! Geometry for drawing seamlessly repeating patterns.
//!
//! Freehand strokes are smoothed and simplified, expanded into their
//! wallpaper-group copies, then cut at tile edges and folded into one repeat
//! unit. The result can be handed to any renderer that can tile a rectangle.
//!
//! ```
//! use glam::dvec2;
//! use tilestroke::{DrawingState, PatternConfig, PatternPipeline};
//!
//! let config = PatternConfig::builder().group_key("p3").build()?;
//! let pipeline = PatternPipeline::new(config);
//!
//! let state = DrawingState::new()
//!     .press(dvec2(10.0, 10.0))
//!     .drag(dvec2(40.0, 25.0))
//!     .release();
//!
//! let tile = state.render(&pipeline);
//! assert_eq!(tile.dimensions, pipeline.dimensions());
//! # Ok::<(), tilestroke::ConfigError>(())
//! ```

pub mod defaults;
pub mod errors;
pub mod geometry;
pub mod log;
pub mod path;
pub mod pipeline;
pub mod state;
pub mod stroke;
pub mod types;

pub use errors::ConfigError;
pub use geometry::{Affine, Group, TileDimensions, Transformer, WallpaperGroup};
pub use path::{Path, StrokeStyle};
pub use pipeline::{
    PatternConfig, PatternConfigBuilder, PatternPipeline, Placement, RenderedTile, TileRenderer,
};
pub use state::{Action, DrawingState};
pub use stroke::Conditioner;
pub use types::{Color, NumericError, Point, SmoothFactor, StrokeWidth, TileSize, ZoomLevel};

/// Run `paths` through a one-off pipeline built from `config`.
///
/// Prefer a long-lived [`PatternPipeline`] when redrawing repeatedly; it
/// builds the symmetry matrices once.
pub fn tile_paths(paths: &[Path], config: &PatternConfig, in_progress: bool) -> RenderedTile {
    PatternPipeline::new(*config).run(paths, in_progress)
}
