use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FormatError, FormatResult};

/// Relative change still counted as [`TrendValue::Same`], measured against
/// the larger of both magnitudes.
pub const RELATIVE_TOLERANCE: f64 = 0.015;

/// Absolute change still counted as [`TrendValue::Same`], for values near zero.
pub const ABSOLUTE_TOLERANCE: f64 = 1e-9;

/// Direction of change between two samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TrendValue {
    Up,
    Same,
    Down,
}

impl TrendValue {
    pub fn as_str(self) -> &'static str {
        match self {
            TrendValue::Up => "UP",
            TrendValue::Same => "SAME",
            TrendValue::Down => "DOWN",
        }
    }
}

impl fmt::Display for TrendValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrendValue {
    type Err = FormatError;

    fn from_str(s: &str) -> FormatResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "UP" => Ok(TrendValue::Up),
            "SAME" => Ok(TrendValue::Same),
            "DOWN" => Ok(TrendValue::Down),
            _ => Err(FormatError::UnknownTrend(s.to_string())),
        }
    }
}

/// Classify the change from `previous` to `current`.
///
/// Changes within [`RELATIVE_TOLERANCE`] of the larger magnitude (or within
/// [`ABSOLUTE_TOLERANCE`]) are `Same`. The band is symmetric, so swapping the
/// arguments swaps `Up` and `Down`. Values that cannot be compared (NaN) are
/// `Same`.
pub fn get_trend(previous: f64, current: f64) -> TrendValue {
    let delta = (current - previous).abs();
    let scale = previous.abs().max(current.abs());
    if delta <= ABSOLUTE_TOLERANCE || delta <= scale * RELATIVE_TOLERANCE {
        return TrendValue::Same;
    }

    match current.partial_cmp(&previous) {
        Some(Ordering::Greater) => TrendValue::Up,
        Some(Ordering::Less) => TrendValue::Down,
        _ => TrendValue::Same,
    }
}
