//! Page coordinates ↔ tile coordinates.
//!
//! A tile is the `width × height` rectangle anchored at the origin. Folding a
//! page coordinate subtracts whole tile spans per axis until the value lands in
//! `[0, size)`. Floating point may leave a value exactly at `0` or a hair
//! below `size`; that is accepted.

use glam::{DVec2, IVec2, dvec2};

use crate::types::Point;

/// Rectangular span of one repeat unit. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileDimensions {
    pub width: f64,
    pub height: f64,
}

impl TileDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "tile dimensions must be positive");
        Self { width, height }
    }

    pub fn square(size: f64) -> Self {
        Self::new(size, size)
    }

    pub fn size(&self) -> DVec2 {
        dvec2(self.width, self.height)
    }

    pub fn center(&self) -> Point {
        self.size() * 0.5
    }

    /// Index of the cell containing `point`, per axis.
    pub fn cell_of(&self, point: Point) -> IVec2 {
        (point / self.size()).floor().as_ivec2()
    }

    /// The nine offsets a grid-crossing path is drawn at: the tile itself and
    /// its eight neighbours.
    pub fn neighbour_offsets(&self) -> [DVec2; 9] {
        let (w, h) = (self.width, self.height);
        [
            dvec2(0.0, 0.0),
            dvec2(w, 0.0),
            dvec2(-w, 0.0),
            dvec2(0.0, h),
            dvec2(0.0, -h),
            dvec2(w, h),
            dvec2(w, -h),
            dvec2(-w, h),
            dvec2(-w, -h),
        ]
    }
}

/// Amount to add to `value` to bring it into `[0, size)`.
#[inline]
pub fn shift_amount(value: f64, size: f64) -> f64 {
    -(value / size).floor() * size
}

/// Per-axis shift that folds `point` into the tile.
pub fn fold_shift(point: Point, dims: TileDimensions) -> DVec2 {
    dvec2(
        shift_amount(point.x, dims.width),
        shift_amount(point.y, dims.height),
    )
}

/// Fold an absolute coordinate into the tile cell containing it.
pub fn to_tile_local(point: Point, dims: TileDimensions) -> Point {
    point + fold_shift(point, dims)
}

/// Move `point` by a fixed delta.
///
/// Used to carry the second point of a crossing segment along with the first
/// one instead of folding it on its own.
#[inline]
pub fn add_offset(point: Point, dx: f64, dy: f64) -> Point {
    point + dvec2(dx, dy)
}
