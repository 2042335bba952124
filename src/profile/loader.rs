use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::types::{GolfProfile, HandicapSnapshot, PerformanceStats, ScoreRecord};
use crate::error::StatsError;

/// Course label for records whose course name was not collected.
const UNKNOWN_COURSE: &str = "Unknown Course";

/// Build a [`GolfProfile`] from already-decoded GHIN data.
///
/// The top level must be a JSON object, and `scores` / `handicap_history`,
/// when present, must be arrays; anything else is a [`StatsError::DataFormat`].
/// Within those bounds the loader degrades gracefully: malformed entries are
/// dropped with a warning, wrongly-typed optional fields are nulled, and
/// unknown fields are ignored.
pub fn load_profile(raw: &Value) -> Result<GolfProfile, StatsError> {
    let root = raw.as_object().ok_or_else(|| {
        StatsError::DataFormat("top-level GHIN data must be a JSON object".to_string())
    })?;

    let handicap_index = scalar_f64(root, "handicap_index");
    let lifetime_rounds = scalar_u32(root, "lifetime_rounds");

    let handicap_history = match root.get("handicap_history") {
        None | Some(Value::Null) => Vec::new(),
        Some(value) => parse_history(value)?,
    };

    let scores = match root.get("scores") {
        None | Some(Value::Null) => Vec::new(),
        Some(value) => parse_scores(value)?,
    };

    let stats = parse_stats(root);

    log::debug!(
        "loaded profile: {} score records, {} handicap revisions",
        scores.len(),
        handicap_history.len()
    );

    Ok(GolfProfile {
        handicap_index,
        lifetime_rounds,
        handicap_history,
        stats,
        scores,
    })
}

#[derive(Debug, Deserialize)]
struct RawSnapshot {
    date: String,
    index: f64,
}

#[derive(Debug, Deserialize)]
struct RawScore {
    date: String,
    #[serde(default, deserialize_with = "lenient")]
    score: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    course: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    rating_slope: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    differential: Option<f64>,
}

/// Deserialize an optional field, nulling it on type mismatch instead of
/// failing the whole entry.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn parse_history(value: &Value) -> Result<Vec<HandicapSnapshot>, StatsError> {
    let entries = value.as_array().ok_or_else(|| {
        StatsError::DataFormat("handicap_history must be an array of objects".to_string())
    })?;

    let mut history = Vec::with_capacity(entries.len());
    for entry in entries {
        let raw: RawSnapshot = match serde_json::from_value(entry.clone()) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("skipping malformed handicap revision: {e}");
                continue;
            }
        };
        let Some(date) = parse_date(&raw.date, "handicap revision") else {
            continue;
        };
        history.push(HandicapSnapshot {
            date,
            index: raw.index,
        });
    }
    Ok(history)
}

fn parse_scores(value: &Value) -> Result<Vec<ScoreRecord>, StatsError> {
    let entries = value.as_array().ok_or_else(|| {
        StatsError::DataFormat("scores must be an array of objects".to_string())
    })?;

    let mut scores = Vec::with_capacity(entries.len());
    for entry in entries {
        let raw: RawScore = match serde_json::from_value(entry.clone()) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("skipping malformed score record: {e}");
                continue;
            }
        };
        let Some(date) = parse_date(&raw.date, "score record") else {
            continue;
        };
        scores.push(ScoreRecord {
            date,
            token: raw.score,
            course: raw.course.unwrap_or_else(|| UNKNOWN_COURSE.to_string()),
            rating_slope: raw.rating_slope,
            differential: raw.differential,
        });
    }
    Ok(scores)
}

fn parse_date(raw: &str, what: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            log::warn!("skipping {what} with unparseable date {raw:?}");
            None
        }
    }
}

fn parse_stats(root: &Map<String, Value>) -> Option<PerformanceStats> {
    let raw = match root.get("stats") {
        None | Some(Value::Null) => return None,
        Some(value) => match value.as_object() {
            Some(map) => map,
            None => {
                log::warn!("ignoring stats: expected an object");
                return None;
            }
        },
    };

    let field = |name: &str| raw.get(name).and_then(Value::as_f64);
    let stats = PerformanceStats {
        par3_avg: field("par3_avg"),
        par4_avg: field("par4_avg"),
        par5_avg: field("par5_avg"),
        gir_pct: field("gir_pct"),
        fairways_pct: field("fairways_pct"),
        putts_avg: field("putts_avg"),
    };

    if stats.is_empty() {
        None
    } else {
        Some(stats)
    }
}

fn scalar_f64(root: &Map<String, Value>, key: &str) -> Option<f64> {
    match root.get(key) {
        None | Some(Value::Null) => None,
        Some(value) => {
            let parsed = value.as_f64();
            if parsed.is_none() {
                log::warn!("ignoring {key}: expected a number");
            }
            parsed
        }
    }
}

fn scalar_u32(root: &Map<String, Value>, key: &str) -> Option<u32> {
    match root.get(key) {
        None | Some(Value::Null) => None,
        Some(value) => {
            let parsed = value.as_u64().and_then(|n| u32::try_from(n).ok());
            if parsed.is_none() {
                log::warn!("ignoring {key}: expected a non-negative integer");
            }
            parsed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_loads_empty_profile() {
        let profile = load_profile(&json!({})).unwrap();
        assert!(profile.handicap_index.is_none());
        assert!(profile.lifetime_rounds.is_none());
        assert!(profile.handicap_history.is_empty());
        assert!(profile.stats.is_none());
        assert!(profile.scores.is_empty());
    }

    #[test]
    fn test_top_level_must_be_object() {
        let err = load_profile(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, StatsError::DataFormat(_)));

        let err = load_profile(&json!("ghin")).unwrap_err();
        assert!(matches!(err, StatsError::DataFormat(_)));
    }

    #[test]
    fn test_scores_must_be_array() {
        let err = load_profile(&json!({"scores": "82A"})).unwrap_err();
        assert!(matches!(err, StatsError::DataFormat(_)));
    }

    #[test]
    fn test_history_must_be_array() {
        let err = load_profile(&json!({"handicap_history": {"date": "2026-01-01"}})).unwrap_err();
        assert!(matches!(err, StatsError::DataFormat(_)));
    }

    #[test]
    fn test_full_record_loads() {
        let profile = load_profile(&json!({
            "handicap_index": 18.0,
            "lifetime_rounds": 412,
            "handicap_history": [
                {"date": "2026-01-15", "index": 17.8},
                {"date": "2026-02-02", "index": 18.0}
            ],
            "scores": [{
                "date": "2026-02-01",
                "score": "82A",
                "course": "Pine Hollow",
                "rating_slope": "68.0/117",
                "differential": 13.5
            }]
        }))
        .unwrap();

        assert_eq!(profile.handicap_index, Some(18.0));
        assert_eq!(profile.lifetime_rounds, Some(412));
        assert_eq!(profile.handicap_history.len(), 2);

        let record = &profile.scores[0];
        assert_eq!(record.token.as_deref(), Some("82A"));
        assert_eq!(record.course, "Pine Hollow");
        assert_eq!(record.rating_slope.as_deref(), Some("68.0/117"));
        assert_eq!(record.differential, Some(13.5));
    }

    #[test]
    fn test_malformed_entries_are_skipped_not_fatal() {
        let profile = load_profile(&json!({
            "handicap_history": [
                {"date": "2026-01-15", "index": 17.8},
                {"date": "not-a-date", "index": 18.0},
                {"index": 18.2},
                {"date": "2026-03-01", "index": "high"},
                "just a string"
            ],
            "scores": [
                {"date": "2026-02-01", "score": "82A", "course": "X"},
                {"score": "90", "course": "Y"},
                {"date": "02/01/2026", "score": "88", "course": "Z"},
                42
            ]
        }))
        .unwrap();

        assert_eq!(profile.handicap_history.len(), 1);
        assert_eq!(profile.scores.len(), 1);
        assert_eq!(profile.scores[0].course, "X");
    }

    #[test]
    fn test_wrongly_typed_optional_fields_are_nulled() {
        // The entry survives; only the bad fields go away.
        let profile = load_profile(&json!({
            "scores": [{
                "date": "2026-02-01",
                "score": 82,
                "course": "Pine Hollow",
                "differential": "13.5"
            }]
        }))
        .unwrap();

        assert_eq!(profile.scores.len(), 1);
        let record = &profile.scores[0];
        assert!(record.token.is_none());
        assert!(record.differential.is_none());
        assert_eq!(record.course, "Pine Hollow");
    }

    #[test]
    fn test_missing_course_gets_placeholder() {
        let profile = load_profile(&json!({
            "scores": [{"date": "2026-02-01", "score": "82A"}]
        }))
        .unwrap();

        assert_eq!(profile.scores[0].course, UNKNOWN_COURSE);
    }

    #[test]
    fn test_integer_differential_accepted() {
        let profile = load_profile(&json!({
            "scores": [{"date": "2026-02-01", "score": "82A", "course": "X", "differential": 13}]
        }))
        .unwrap();

        assert_eq!(profile.scores[0].differential, Some(13.0));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let profile = load_profile(&json!({
            "handicap_index": 18.0,
            "collected_at": "2026-03-01T10:00:00Z",
            "golfer_name": "redacted",
            "scores": [{"date": "2026-02-01", "score": "82A", "course": "X", "tee": "blue"}]
        }))
        .unwrap();

        assert_eq!(profile.handicap_index, Some(18.0));
        assert_eq!(profile.scores.len(), 1);
    }

    #[test]
    fn test_stats_extracted() {
        let profile = load_profile(&json!({
            "stats": {"par3_avg": 3.85, "gir_pct": 34.5, "putts_avg": 31.9}
        }))
        .unwrap();

        let stats = profile.stats.unwrap();
        assert_eq!(stats.par3_avg, Some(3.85));
        assert_eq!(stats.gir_pct, Some(34.5));
        assert_eq!(stats.putts_avg, Some(31.9));
        assert!(stats.par4_avg.is_none());
    }

    #[test]
    fn test_all_null_stats_collapse_to_none() {
        let profile = load_profile(&json!({
            "stats": {"par3_avg": null, "gir_pct": null}
        }))
        .unwrap();
        assert!(profile.stats.is_none());
    }

    #[test]
    fn test_non_object_stats_ignored() {
        let profile = load_profile(&json!({"stats": [1, 2]})).unwrap();
        assert!(profile.stats.is_none());
    }

    #[test]
    fn test_wrongly_typed_scalars_nulled() {
        let profile = load_profile(&json!({
            "handicap_index": "18.0",
            "lifetime_rounds": -3
        }))
        .unwrap();

        assert!(profile.handicap_index.is_none());
        assert!(profile.lifetime_rounds.is_none());
    }

    #[test]
    fn test_integer_handicap_index_accepted() {
        let profile = load_profile(&json!({"handicap_index": 18})).unwrap();
        assert_eq!(profile.handicap_index, Some(18.0));
    }
}
