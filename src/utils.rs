//! A collection of utilities for parsing and rendering observations.

use crate::error::{PredictorError, Result};

/// Constants that bound the configuration surface.
pub mod limits {
    /// The multiplier that separates 'Under' from 'Above'.
    pub const DEFAULT_THRESHOLD: f64 = 2.0;
    pub const DEFAULT_WINDOW: usize = 5;
    pub const MIN_WINDOW: usize = 3;
    pub const MAX_WINDOW: usize = 15;
    /// The number of recent observations that are displayed.
    pub const RECENT_LEN: usize = 10;
}

/// Try to parse a single observation from user text. Surrounding whitespace is
/// ignored. Non-finite values are rejected even though the float parser accepts
/// them.
pub fn parse_observation(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(val) if val.is_finite() => Ok(val),
        _ => Err(PredictorError::InvalidInput(trimmed.to_string())),
    }
}

/// Render a threshold multiplier as a percentage (2.0 becomes "200%").
pub fn threshold_percent(threshold: f64) -> String {
    format!("{}%", (threshold * 100.0).round() as i64)
}

#[test]
fn test_parse_observation() {
    assert_eq!(parse_observation("1.87"), Ok(1.87));
    assert_eq!(parse_observation("  3 \n"), Ok(3.0));
    assert!(parse_observation("").is_err());
    assert!(parse_observation("abc").is_err());
    assert!(parse_observation("NaN").is_err());
    assert!(parse_observation("inf").is_err());
    assert!(parse_observation("-inf").is_err());
}
