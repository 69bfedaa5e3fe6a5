//! Layout configuration: marker square sizing and dot size.
//!
//! Every field has a default, so partial JSON documents are accepted. Values
//! are checked by [`LayoutConfig::validate`] after loading.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_DOT_SIZE, DEFAULT_SQUARE_GAP, DEFAULT_SQUARE_SIZE};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("square_size must be a positive finite number, got {0}")]
    InvalidSquareSize(f64),
    #[error("square_gap must be a non-negative finite number, got {0}")]
    InvalidSquareGap(f64),
    #[error("dot_size must be a positive finite number, got {0}")]
    InvalidDotSize(f64),
    #[error("invalid layout config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Marker square side length.
    pub square_size: f64,
    /// Gap between adjacent marker squares.
    pub square_gap: f64,
    /// Diameter of a captured-point dot.
    pub dot_size: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            square_size: DEFAULT_SQUARE_SIZE,
            square_gap: DEFAULT_SQUARE_GAP,
            dot_size: DEFAULT_DOT_SIZE,
        }
    }
}

impl LayoutConfig {
    /// Parse and validate a JSON document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input or unknown fields, and
    /// the matching `Invalid*` variant when a value is out of range.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that sizes are positive and the gap is non-negative.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.square_size.is_finite() && self.square_size > 0.0) {
            return Err(ConfigError::InvalidSquareSize(self.square_size));
        }
        if !(self.square_gap.is_finite() && self.square_gap >= 0.0) {
            return Err(ConfigError::InvalidSquareGap(self.square_gap));
        }
        if !(self.dot_size.is_finite() && self.dot_size > 0.0) {
            return Err(ConfigError::InvalidDotSize(self.dot_size));
        }
        Ok(())
    }
}
