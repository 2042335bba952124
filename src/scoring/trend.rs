use serde::Serialize;
use std::fmt;

use crate::profile::HandicapSnapshot;

/// Trailing number of revisions the trend looks at.
pub const TREND_WINDOW: usize = 5;

/// Index movement below this magnitude counts as noise. Matches the
/// granularity handicap indexes are published at.
pub const DEFAULT_EPSILON: f64 = 0.1;

/// Directional movement of the handicap index over the trend window.
/// `InsufficientData` is a distinct state, never a stand-in for `Stable`:
/// one revision is zero evidence of steadiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
    InsufficientData,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Trend::Improving => "Improving",
            Trend::Declining => "Declining",
            Trend::Stable => "Stable",
            Trend::InsufficientData => "insufficient data",
        };
        f.write_str(label)
    }
}

/// Classify the trend from the trailing `min(TREND_WINDOW, len)` entries.
/// `history` must already be sorted ascending by date. A falling index is
/// an improvement (lower handicap is better).
pub fn classify(history: &[HandicapSnapshot], epsilon: f64) -> Trend {
    if history.len() < 2 {
        return Trend::InsufficientData;
    }

    let window = &history[history.len().saturating_sub(TREND_WINDOW)..];
    let delta = window[window.len() - 1].index - window[0].index;

    if delta < -epsilon {
        Trend::Improving
    } else if delta > epsilon {
        Trend::Declining
    } else {
        Trend::Stable
    }
}
