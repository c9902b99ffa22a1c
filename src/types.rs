//! Strongly-typed numeric primitives for tilestroke (zero-cost newtypes).
//!
//! Raw `f64` values coming from a UI are validated once, at the edge, through
//! the `try_new` constructors. The geometry core then works on plain
//! [`Point`]s and trusts the invariants carried by these types.

use std::fmt;
use std::str::FromStr;

use glam::DVec2;
use thiserror::Error;

/// A position in the continuous page coordinate space.
///
/// Points are plain values; nothing in the crate mutates one in place.
pub type Point = DVec2;

/// Error type for invalid numeric values
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    #[error("value is NaN")]
    NaN,
    /// Value is infinite
    #[error("value is infinite")]
    Infinite,
    /// Value is zero when non-zero required
    #[error("value is zero")]
    Zero,
    /// Value is negative when positive required
    #[error("value is negative")]
    Negative,
    /// Value falls outside the half-open range `[min, max)`
    #[error("value is outside [{min}, {max})")]
    OutOfRange { min: f64, max: f64 },
}

fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

fn check_positive(val: f64) -> Result<f64, NumericError> {
    let val = check_finite(val)?;
    if val == 0.0 {
        Err(NumericError::Zero)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Base edge length of a repeat unit, before the wallpaper group's sizing rule
/// is applied. Always finite and strictly positive.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct TileSize(f64);

impl TileSize {
    /// Unchecked constructor for crate constants.
    #[inline]
    pub(crate) const fn new_unchecked(val: f64) -> Self {
        TileSize(val)
    }

    /// Create a tile size with validation (rejects NaN, infinite, zero, negative)
    pub fn try_new(val: f64) -> Result<Self, NumericError> {
        check_positive(val).map(TileSize)
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

/// View zoom factor. `1.0` means one world unit per screen pixel.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct ZoomLevel(f64);

impl ZoomLevel {
    pub const ONE: ZoomLevel = ZoomLevel(1.0);

    /// Create a zoom level with validation (rejects NaN, infinite, zero, negative)
    pub fn try_new(val: f64) -> Result<Self, NumericError> {
        check_positive(val).map(ZoomLevel)
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Convert a distance measured in screen pixels to world units.
    #[inline]
    pub fn screen_to_world(self, pixels: f64) -> f64 {
        pixels / self.0
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        ZoomLevel::ONE
    }
}

/// Weight given to the previous smoothed point by the stroke smoother.
/// Lives in `[0, 1)`; zero disables smoothing.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct SmoothFactor(f64);

impl SmoothFactor {
    pub const OFF: SmoothFactor = SmoothFactor(0.0);

    #[inline]
    pub(crate) const fn new_unchecked(val: f64) -> Self {
        SmoothFactor(val)
    }

    pub fn try_new(val: f64) -> Result<Self, NumericError> {
        let val = check_finite(val)?;
        if (0.0..1.0).contains(&val) {
            Ok(SmoothFactor(val))
        } else {
            Err(NumericError::OutOfRange { min: 0.0, max: 1.0 })
        }
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_off(self) -> bool {
        self.0 == 0.0
    }
}

/// Stroke width in world units. Zero is allowed (hairline).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct StrokeWidth(f64);

impl StrokeWidth {
    pub const ZERO: StrokeWidth = StrokeWidth(0.0);

    #[inline]
    pub(crate) const fn new_unchecked(val: f64) -> Self {
        StrokeWidth(val)
    }

    /// Create a non-negative stroke width with validation
    pub fn try_new(val: f64) -> Result<Self, NumericError> {
        let val = check_finite(val)?;
        if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(StrokeWidth(val))
        }
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl fmt::Display for StrokeWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stroke color. Kept close to what a renderer wants to emit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, u8),
    /// A CSS color keyword, stored lowercase
    Named(String),
}

impl Color {
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            Color::Rgba(r, g, b, a) => write!(f, "#{:02x}{:02x}{:02x}{:02x}", r, g, b, a),
            Color::Named(name) => write!(f, "{}", name),
        }
    }
}

/// Error returned when a color string is neither hex nor a bare keyword
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid color `{0}`")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    /// Accepts `#rgb`, `#rrggbb`, `#rrggbbaa`, or an alphabetic keyword.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let trimmed = s.trim();

        let Some(hex) = trimmed.strip_prefix('#') else {
            if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
                return Ok(Color::Named(trimmed.to_ascii_lowercase()));
            }
            return Err(err());
        };

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());

        match hex.len() {
            3 => {
                let nibble = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| err())
                };
                Ok(Color::Rgb(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            6 => Ok(Color::Rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Color::Rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(err()),
        }
    }
}
