//! Drawn paths and the style baked into them

use crate::defaults;
use crate::errors::ConfigError;
use crate::types::{Color, Point, SmoothFactor, StrokeWidth};

/// Style captured when a stroke starts.
///
/// Later changes to the pickers never reach finished paths because each path
/// owns its own copy.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub stroke_width: StrokeWidth,
    pub smooth_factor: SmoothFactor,
    pub color: Color,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            stroke_width: defaults::STROKE_WIDTH,
            smooth_factor: defaults::SMOOTH_FACTOR,
            color: Color::default(),
        }
    }
}

impl StrokeStyle {
    /// Build a style from raw UI values, validating each one.
    pub fn try_new(stroke_width: f64, smooth_factor: f64, color: &str) -> Result<Self, ConfigError> {
        let stroke_width = StrokeWidth::try_new(stroke_width).map_err(|reason| {
            ConfigError::InvalidStrokeWidth {
                value: stroke_width,
                reason,
            }
        })?;
        let smooth_factor = SmoothFactor::try_new(smooth_factor).map_err(|reason| {
            ConfigError::InvalidSmoothFactor {
                value: smooth_factor,
                reason,
            }
        })?;
        let color = color.parse::<Color>()?;
        Ok(Self {
            stroke_width,
            smooth_factor,
            color,
        })
    }
}

/// An ordered point sequence plus its style.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    pub points: Vec<Point>,
    pub style: StrokeStyle,
    /// Set only on two-point pieces emitted by the boundary splitter whose
    /// segment crosses a tile edge.
    pub intersects_grid: bool,
}

impl Path {
    pub fn new(points: Vec<Point>, style: StrokeStyle) -> Self {
        Self {
            points,
            style,
            intersects_grid: false,
        }
    }

    /// A fresh stroke holding the press position only.
    pub fn start(at: Point, style: StrokeStyle) -> Self {
        Self::new(vec![at], style)
    }

    /// Same style and flag, different points.
    pub fn with_points(&self, points: Vec<Point>) -> Self {
        Self {
            points,
            style: self.style.clone(),
            intersects_grid: self.intersects_grid,
        }
    }

    /// Apply `f` to every point, keeping style and flag.
    pub fn map_points(&self, f: impl Fn(Point) -> Point) -> Self {
        self.with_points(self.points.iter().copied().map(f).collect())
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn stroke_width(&self) -> f64 {
        self.style.stroke_width.raw()
    }
}
