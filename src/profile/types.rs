use chrono::NaiveDate;
use serde::Serialize;

use crate::scoring::token::{parse_token, AdjustmentType, NormalizedScore};

/// A single handicap-index revision event.
#[derive(Debug, Clone, Serialize)]
pub struct HandicapSnapshot {
    pub date: NaiveDate,
    pub index: f64,
}

/// One posted round as collected from GHIN.
#[derive(Debug, Clone)]
pub struct ScoreRecord {
    pub date: NaiveDate,
    /// Raw score token, e.g. "82A" or "79H". Absent when the collected
    /// entry carried no score text.
    pub token: Option<String>,
    pub course: String,
    /// Course rating / slope as collected, e.g. "68.0/117".
    pub rating_slope: Option<String>,
    pub differential: Option<f64>,
}

impl ScoreRecord {
    pub fn normalized(&self) -> NormalizedScore {
        parse_token(self.token.as_deref())
    }

    /// Leading digit run of the score token, if any.
    pub fn numeric_score(&self) -> Option<u32> {
        self.normalized().value
    }

    pub fn adjustment(&self) -> AdjustmentType {
        self.normalized().adjustment
    }

    /// Whether this record may enter numeric aggregates. Imputed and
    /// unparseable scores are excluded.
    pub fn countable(&self) -> bool {
        self.normalized().countable()
    }
}

/// Performance averages as reported by GHIN. Every field is optional;
/// absent values stay absent in output rather than reading as zero.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PerformanceStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub par3_avg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub par4_avg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub par5_avg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gir_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fairways_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub putts_avg: Option<f64>,
}

impl PerformanceStats {
    pub fn is_empty(&self) -> bool {
        self.par3_avg.is_none()
            && self.par4_avg.is_none()
            && self.par5_avg.is_none()
            && self.gir_pct.is_none()
            && self.fairways_pct.is_none()
            && self.putts_avg.is_none()
    }
}

/// Everything known about one golfer, built once per run from the input
/// file and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct GolfProfile {
    pub handicap_index: Option<f64>,
    /// Declared lifetime round total. May exceed the number of collected
    /// score records.
    pub lifetime_rounds: Option<u32>,
    pub handicap_history: Vec<HandicapSnapshot>,
    pub stats: Option<PerformanceStats>,
    pub scores: Vec<ScoreRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(token: Option<&str>) -> ScoreRecord {
        ScoreRecord {
            date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            token: token.map(String::from),
            course: "Pine Hollow".to_string(),
            rating_slope: None,
            differential: None,
        }
    }

    #[test]
    fn test_record_derives_score_from_token() {
        let rec = record(Some("82A"));
        assert_eq!(rec.numeric_score(), Some(82));
        assert_eq!(rec.adjustment(), AdjustmentType::Adjusted);
        assert!(rec.countable());
    }

    #[test]
    fn test_record_without_token_is_not_countable() {
        let rec = record(None);
        assert_eq!(rec.numeric_score(), None);
        assert!(!rec.countable());
    }

    #[test]
    fn test_performance_stats_emptiness() {
        assert!(PerformanceStats::default().is_empty());

        let stats = PerformanceStats {
            putts_avg: Some(31.9),
            ..Default::default()
        };
        assert!(!stats.is_empty());
    }
}
