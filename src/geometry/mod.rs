//! Tileable pattern geometry
//!
//! This module is organized into submodules:
//! - `affine`: 2D affine transform value type
//! - `tile`: tile dimensions and the page ↔ tile coordinate mapping
//! - `split`: cutting paths at tile edges and folding the pieces into the tile
//! - `symmetry`: wallpaper group strategies and the path transformer

pub mod affine;
pub mod split;
pub mod symmetry;
pub mod tile;

pub use affine::Affine;
pub use split::{fold_into_tile, split_and_fold, split_at_tile_boundaries};
pub use symmetry::{Group, Transformer, WallpaperGroup};
pub use tile::{TileDimensions, add_offset, to_tile_local};
