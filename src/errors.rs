//! Error types with diagnostics using miette
//!
//! The geometry core is total and never fails. Everything that can go wrong
//! happens while turning user-facing settings into a validated
//! [`PatternConfig`](crate::PatternConfig) or stroke style, and ends up here.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::{NumericError, ParseColorError};

/// Errors raised while validating configuration or style input
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown wallpaper group: {key}")]
    #[diagnostic(code(tilestroke::config::unknown_group))]
    UnknownGroup {
        key: String,
        #[help]
        suggestion: Option<String>,
    },

    #[error("invalid tile size: {value}")]
    #[diagnostic(
        code(tilestroke::config::invalid_tile_size),
        help("tile size must be finite and greater than zero")
    )]
    InvalidTileSize {
        value: f64,
        #[source]
        reason: NumericError,
    },

    #[error("invalid zoom level: {value}")]
    #[diagnostic(
        code(tilestroke::config::invalid_zoom),
        help("zoom must be finite and greater than zero")
    )]
    InvalidZoom {
        value: f64,
        #[source]
        reason: NumericError,
    },

    #[error("invalid smooth factor: {value}")]
    #[diagnostic(
        code(tilestroke::config::invalid_smooth_factor),
        help("use 0 to disable smoothing; values must stay below 1")
    )]
    InvalidSmoothFactor {
        value: f64,
        #[source]
        reason: NumericError,
    },

    #[error("invalid stroke width: {value}")]
    #[diagnostic(code(tilestroke::config::invalid_stroke_width))]
    InvalidStrokeWidth {
        value: f64,
        #[source]
        reason: NumericError,
    },

    #[error(transparent)]
    #[diagnostic(
        code(tilestroke::config::invalid_color),
        help("expected #rgb, #rrggbb, #rrggbbaa or a color keyword")
    )]
    InvalidColor(#[from] ParseColorError),
}

impl ConfigError {
    pub(crate) fn unknown_group(key: &str, known: &[&str]) -> Self {
        ConfigError::UnknownGroup {
            key: key.to_string(),
            suggestion: Some(format!("known groups: {}", known.join(", "))),
        }
    }
}
