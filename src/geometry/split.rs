//! Cutting paths where they cross tile edges.
//!
//! A run of points that stays inside one cell can be folded into tile-local
//! coordinates as a whole. A segment whose endpoints sit in different cells
//! cannot: folding each endpoint on its own would tear it apart. Such segments
//! are emitted as their own two-point pieces, flagged with
//! [`Path::intersects_grid`], and drawn later at every neighbouring offset.

use crate::log::trace;
use crate::path::Path;
use crate::types::Point;

use super::tile::{TileDimensions, add_offset, fold_shift};

/// Whether the span between `a` and `b`, widened by `padding` on both sides,
/// touches more than one cell along one axis.
///
/// The padding is the full stroke width, not half of it. It over-approximates
/// the cap so thick strokes near an edge get drawn on both sides.
#[inline]
pub fn crosses_grid(a: f64, b: f64, size: f64, padding: f64) -> bool {
    let first_cell = ((a.min(b) - padding) / size).floor();
    let last_cell = ((a.max(b) + padding) / size).floor();
    first_cell != last_cell
}

/// Whether the segment `a → b` must be drawn as a crossing piece.
pub fn segment_crosses(a: Point, b: Point, dims: TileDimensions, padding: f64) -> bool {
    crosses_grid(a.x, b.x, dims.width, padding) || crosses_grid(a.y, b.y, dims.height, padding)
}

/// Split `path` into pieces that each stay in one cell, plus two-point
/// crossing pieces between them.
///
/// Every piece inherits the parent's style. The untagged pieces partition the
/// input points in order; each crossing piece repeats the last point of the
/// piece before it and the first point of the piece after it. A path with
/// fewer than two points comes back as a single untagged piece.
pub fn split_at_tile_boundaries(path: &Path, dims: TileDimensions) -> Vec<Path> {
    let Some((&first, rest)) = path.points.split_first() else {
        return vec![Path::new(Vec::new(), path.style.clone())];
    };

    let padding = path.stroke_width();
    let mut pieces = Vec::new();
    let mut current = vec![first];
    let mut previous = first;

    for &point in rest {
        if segment_crosses(previous, point, dims, padding) {
            trace!(?previous, ?point, "segment crosses tile edge");
            pieces.push(Path::new(std::mem::take(&mut current), path.style.clone()));
            pieces.push(Path {
                points: vec![previous, point],
                style: path.style.clone(),
                intersects_grid: true,
            });
            current.push(point);
        } else {
            current.push(point);
        }
        previous = point;
    }

    pieces.push(Path::new(current, path.style.clone()));
    pieces
}

/// Move a piece into tile-local coordinates.
///
/// The whole piece moves by the shift that folds its first point. For an
/// untagged piece every point shares that cell; for a crossing piece the
/// second point is re-projected by the same delta so the segment stays whole.
pub fn fold_into_tile(piece: &Path, dims: TileDimensions) -> Path {
    let Some(&anchor) = piece.points.first() else {
        return piece.clone();
    };
    let shift = fold_shift(anchor, dims);
    piece.map_points(|p| add_offset(p, shift.x, shift.y))
}

/// Split every path and fold each piece into the tile.
pub fn split_and_fold(paths: &[Path], dims: TileDimensions) -> Vec<Path> {
    paths
        .iter()
        .flat_map(|path| split_at_tile_boundaries(path, dims))
        .map(|piece| fold_into_tile(&piece, dims))
        .collect()
}
