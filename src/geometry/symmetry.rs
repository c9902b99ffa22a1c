//! Wallpaper group strategies.
//!
//! Each group knows two things: how big its rectangular repeat unit is for a
//! given base tile size, and which affine copies of the drawn content make one
//! repeat unit symmetric. Laying the resulting tile edge to edge by plain
//! translation then produces the full pattern.
//!
//! The hexagonal groups use a `√3·s × 3·s` rectangle. Its lattice is centred:
//! besides the corners, `(W/2, H/2)` is also a lattice point, which is why
//! their matrix sets include copies shifted by `(W/2, 3H/2)`.

use std::fmt;
use std::str::FromStr;

use enum_dispatch::enum_dispatch;
use glam::dvec2;

use crate::errors::ConfigError;
use crate::log::debug;
use crate::path::Path;
use crate::types::TileSize;

use super::affine::Affine;
use super::tile::TileDimensions;

/// Horizontal offset of the secondary lattice copy, in tile widths
const GLIDE_X: f64 = 0.5;
/// Vertical offset of the secondary lattice copy, in tile heights
const GLIDE_Y: f64 = 1.5;

/// Common behavior for all wallpaper groups
#[enum_dispatch]
pub trait WallpaperGroup {
    /// Short identifier such as `"p3"`
    fn key(&self) -> &'static str;

    /// Repeat unit for a given base tile size
    fn tile_dimensions(&self, tile_size: TileSize) -> TileDimensions;

    /// The copies added on top of the original content, in order.
    /// Does not include the identity.
    fn matrices(&self, dims: TileDimensions) -> Vec<Affine>;

    /// Build the path transformer for a fixed repeat unit.
    fn create_transformer(&self, dims: TileDimensions) -> Transformer {
        let matrices = self.matrices(dims);
        debug!(group = self.key(), copies = matrices.len(), "built transformer");
        Transformer::new(matrices)
    }
}

fn square(tile_size: TileSize) -> TileDimensions {
    TileDimensions::square(tile_size.raw())
}

fn hexagonal(tile_size: TileSize) -> TileDimensions {
    let s = tile_size.raw();
    TileDimensions::new(s * 3f64.sqrt(), s * 3.0)
}

/// `n - 1` rotations about the tile centre by multiples of `1/n` turn.
fn rotations(dims: TileDimensions, n: u32) -> impl Iterator<Item = Affine> {
    let center = dims.center();
    (1..n).map(move |k| Affine::turn_about(center, k as f64 / n as f64))
}

/// All `n` rotations about the centre, each moved onto the secondary lattice point.
fn glided_rotations(dims: TileDimensions, n: u32) -> impl Iterator<Item = Affine> {
    let glide = Affine::translation(dvec2(dims.width * GLIDE_X, dims.height * GLIDE_Y));
    let center = dims.center();
    (0..n).map(move |k| glide.then(Affine::turn_about(center, k as f64 / n as f64)))
}

// ============================================================================
// Groups
// ============================================================================

/// Translations only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct P1;

impl WallpaperGroup for P1 {
    fn key(&self) -> &'static str {
        "p1"
    }

    fn tile_dimensions(&self, tile_size: TileSize) -> TileDimensions {
        square(tile_size)
    }

    fn matrices(&self, _dims: TileDimensions) -> Vec<Affine> {
        Vec::new()
    }
}

/// Half-turn about the tile centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct P2;

impl WallpaperGroup for P2 {
    fn key(&self) -> &'static str {
        "p2"
    }

    fn tile_dimensions(&self, tile_size: TileSize) -> TileDimensions {
        square(tile_size)
    }

    fn matrices(&self, dims: TileDimensions) -> Vec<Affine> {
        rotations(dims, 2).collect()
    }
}

/// Three-fold rotation on a hexagonal lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct P3;

impl WallpaperGroup for P3 {
    fn key(&self) -> &'static str {
        "p3"
    }

    fn tile_dimensions(&self, tile_size: TileSize) -> TileDimensions {
        hexagonal(tile_size)
    }

    fn matrices(&self, dims: TileDimensions) -> Vec<Affine> {
        rotations(dims, 3).chain(glided_rotations(dims, 3)).collect()
    }
}

/// Quarter-turns about the tile centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct P4;

impl WallpaperGroup for P4 {
    fn key(&self) -> &'static str {
        "p4"
    }

    fn tile_dimensions(&self, tile_size: TileSize) -> TileDimensions {
        square(tile_size)
    }

    fn matrices(&self, dims: TileDimensions) -> Vec<Affine> {
        rotations(dims, 4).collect()
    }
}

/// Six-fold rotation on a hexagonal lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct P6;

impl WallpaperGroup for P6 {
    fn key(&self) -> &'static str {
        "p6"
    }

    fn tile_dimensions(&self, tile_size: TileSize) -> TileDimensions {
        hexagonal(tile_size)
    }

    fn matrices(&self, dims: TileDimensions) -> Vec<Affine> {
        rotations(dims, 6).chain(glided_rotations(dims, 6)).collect()
    }
}

/// A configured wallpaper group, selected by key.
#[enum_dispatch(WallpaperGroup)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    P1,
    P2,
    P3,
    P4,
    P6,
}

impl Group {
    pub const ALL: [Group; 5] = [
        Group::P1(P1),
        Group::P2(P2),
        Group::P3(P3),
        Group::P4(P4),
        Group::P6(P6),
    ];

    /// Look a group up by key. This is the only place an unknown key is
    /// rejected; everything downstream takes a resolved `Group`.
    pub fn from_key(key: &str) -> Result<Group, ConfigError> {
        let wanted = key.trim();
        Self::ALL
            .into_iter()
            .find(|group| group.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|g| g.key()).collect();
                ConfigError::unknown_group(key, &known)
            })
    }
}

impl Default for Group {
    fn default() -> Self {
        Group::P1(P1)
    }
}

impl FromStr for Group {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Group::from_key(s)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ============================================================================
// Transformer
// ============================================================================

/// Appends the symmetric copies of a path list.
///
/// Built once per repeat unit and group; it does not depend on drawn content.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transformer {
    matrices: Vec<Affine>,
}

impl Transformer {
    pub fn new(matrices: Vec<Affine>) -> Self {
        Self { matrices }
    }

    pub fn matrices(&self) -> &[Affine] {
        &self.matrices
    }

    /// Number of transformed copies added per input path
    pub fn copy_count(&self) -> usize {
        self.matrices.len()
    }

    /// The input paths followed by one transformed copy of the whole list per
    /// matrix. Styles are carried through unchanged.
    pub fn apply(&self, paths: &[Path]) -> Vec<Path> {
        let mut out = Vec::with_capacity(paths.len() * (self.matrices.len() + 1));
        out.extend_from_slice(paths);
        for matrix in &self.matrices {
            out.extend(
                paths
                    .iter()
                    .map(|path| path.map_points(|p| matrix.transform_point(p))),
            );
        }
        out
    }
}
