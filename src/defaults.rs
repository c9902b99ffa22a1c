//! Default sizes and settings

use crate::types::{SmoothFactor, StrokeWidth, TileSize};

/// Base edge length of a repeat unit
pub const TILE_SIZE: TileSize = TileSize::new_unchecked(100.0);

/// Stroke widths offered by the width picker, thinnest first
pub const STROKE_WIDTHS: [StrokeWidth; 5] = [
    StrokeWidth::new_unchecked(1.0),
    StrokeWidth::new_unchecked(2.0),
    StrokeWidth::new_unchecked(4.0),
    StrokeWidth::new_unchecked(8.0),
    StrokeWidth::new_unchecked(14.0),
];

pub const STROKE_WIDTH: StrokeWidth = STROKE_WIDTHS[1];

pub const SMOOTH_FACTOR: SmoothFactor = SmoothFactor::new_unchecked(0.5);

/// Simplification tolerance in screen pixels; divided by zoom to get world units
pub const SIMPLIFY_TOLERANCE_PX: f64 = 0.5;

/// Maximum number of undo snapshots kept by `DrawingState`
pub const HISTORY_DEPTH: usize = 100;

/// Base colors of the palette picker
pub const PALETTE: [&str; 20] = [
    "#000000", "#ffffff", "#607d8d", "#795548", "#f44336", "#e91e63", "#9c27b0", "#673ab7",
    "#00bcd4", "#03a9f4", "#2196f3", "#3f51b5", "#cddc39", "#8bc34a", "#4caf50", "#009688",
    "#ffeb3b", "#ffc107", "#ff9800", "#ff5722",
];
