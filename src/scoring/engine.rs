use chrono::Datelike;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use super::trend::{self, Trend};
use crate::profile::{GolfProfile, HandicapSnapshot, PerformanceStats, ScoreRecord};

/// How many best differentials the ranking keeps.
const BEST_DIFFERENTIAL_COUNT: usize = 5;

/// Every aggregate computed from one profile. Optional sections serialize
/// as absent keys, never null, so sparse input yields a sparse document.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_handicap: Option<f64>,
    pub handicap_trend: Trend,
    pub totals: RoundTotals,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub best_differentials: Vec<BestDifferential>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub courses: Vec<CourseSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub yearly_breakdown: Vec<YearSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<PerformanceStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handicap_range: Option<HandicapRange>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundTotals {
    pub rounds: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worst_score: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BestDifferential {
    pub differential: f64,
    pub course: String,
    pub date: chrono::NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseSummary {
    pub course: String,
    pub rounds: u32,
    pub avg_score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct YearSummary {
    pub year: i32,
    pub rounds: u32,
    pub avg_score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct HandicapRange {
    pub low: HandicapSnapshot,
    pub high: HandicapSnapshot,
}

/// Compute every aggregate from the profile. Pure: the profile is read
/// only, and identical input yields an identical report.
pub fn compute_report(profile: &GolfProfile) -> StatsReport {
    let mut history = profile.handicap_history.clone();
    history.sort_by_key(|snapshot| snapshot.date);

    let countable: Vec<&ScoreRecord> = profile
        .scores
        .iter()
        .filter(|record| record.countable())
        .collect();

    StatsReport {
        current_handicap: profile.handicap_index,
        handicap_trend: trend::classify(&history, trend::DEFAULT_EPSILON),
        totals: round_totals(profile, &countable),
        best_differentials: best_differentials(&profile.scores),
        courses: course_summaries(&countable),
        yearly_breakdown: yearly_breakdown(&countable),
        performance: profile.stats.clone(),
        handicap_range: handicap_range(&history),
    }
}

/// Countable-round count plus score extremes. Falls back to the declared
/// lifetime total only when no score list was collected at all.
fn round_totals(profile: &GolfProfile, countable: &[&ScoreRecord]) -> RoundTotals {
    let rounds = if profile.scores.is_empty() {
        profile.lifetime_rounds.unwrap_or(0)
    } else {
        countable.len() as u32
    };

    let scores: Vec<u32> = countable
        .iter()
        .filter_map(|record| record.numeric_score())
        .collect();

    RoundTotals {
        rounds,
        best_score: scores.iter().copied().min(),
        worst_score: scores.iter().copied().max(),
    }
}

/// Lowest differentials with course and date. Inclusion is decided by
/// differential presence alone; countability is not consulted, so an
/// imputed round with a differential still ranks.
fn best_differentials(scores: &[ScoreRecord]) -> Vec<BestDifferential> {
    let mut ranked: Vec<(f64, &ScoreRecord)> = scores
        .iter()
        .filter_map(|record| record.differential.map(|d| (d, record)))
        .collect();

    // Ascending by differential, earlier date wins ties.
    ranked.sort_by(|a, b| {
        a.0.partial_cmp(&b.0)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.1.date.cmp(&b.1.date))
    });

    ranked
        .into_iter()
        .take(BEST_DIFFERENTIAL_COUNT)
        .map(|(differential, record)| BestDifferential {
            differential,
            course: record.course.clone(),
            date: record.date,
        })
        .collect()
}

/// Group countable rounds by exact course name. No cap here; the text
/// formatter limits what it displays.
fn course_summaries(countable: &[&ScoreRecord]) -> Vec<CourseSummary> {
    let mut groups: HashMap<&str, Vec<u32>> = HashMap::new();
    for record in countable {
        if let Some(score) = record.numeric_score() {
            groups.entry(record.course.as_str()).or_default().push(score);
        }
    }

    let mut summaries: Vec<CourseSummary> = groups
        .into_iter()
        .map(|(course, scores)| CourseSummary {
            course: course.to_string(),
            rounds: scores.len() as u32,
            avg_score: round1(mean(&scores)),
        })
        .collect();

    summaries.sort_by(|a, b| {
        b.rounds
            .cmp(&a.rounds)
            .then_with(|| a.course.cmp(&b.course))
    });
    summaries
}

fn yearly_breakdown(countable: &[&ScoreRecord]) -> Vec<YearSummary> {
    let mut groups: BTreeMap<i32, Vec<u32>> = BTreeMap::new();
    for record in countable {
        if let Some(score) = record.numeric_score() {
            groups.entry(record.date.year()).or_default().push(score);
        }
    }

    // Most recent year first.
    groups
        .into_iter()
        .rev()
        .map(|(year, scores)| YearSummary {
            year,
            rounds: scores.len() as u32,
            avg_score: round1(mean(&scores)),
        })
        .collect()
}

fn handicap_range(history: &[HandicapSnapshot]) -> Option<HandicapRange> {
    let low = history.iter().min_by(|a, b| {
        a.index
            .partial_cmp(&b.index)
            .unwrap_or(std::cmp::Ordering::Equal)
    })?;
    let high = history.iter().max_by(|a, b| {
        a.index
            .partial_cmp(&b.index)
            .unwrap_or(std::cmp::Ordering::Equal)
    })?;

    Some(HandicapRange {
        low: low.clone(),
        high: high.clone(),
    })
}

fn mean(scores: &[u32]) -> f64 {
    scores.iter().map(|&s| f64::from(s)).sum::<f64>() / scores.len() as f64
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
