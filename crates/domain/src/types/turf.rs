//! Territory ("turf") visit tracking types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One weekly visit-count entry for a (rep, turf) pair.
///
/// Derived from a raw grid row read by fixed column position. Counts are
/// signed so the sheet can carry corrections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurfEntry {
    pub rep: String,
    pub turf: String,
    /// Monday of the ISO week the visits fall in.
    pub week: NaiveDate,
    pub count: i64,
}

/// Rolled-up statistics for one (rep, turf) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurfPairStats {
    pub rep: String,
    pub turf: String,
    pub lifetime_total: i64,
    pub lifetime_weeks: u64,
    pub ytd_total: i64,
    pub ytd_weeks: u64,
    /// YTD total divided by YTD visited-week count.
    pub ytd_avg_per_week: f64,
    /// Last week this rep visited the turf.
    pub last_visit: Option<NaiveDate>,
    /// Last week any rep visited the turf.
    pub last_visit_any_rep: Option<NaiveDate>,
    /// Last visit + cooldown, rounded up to the following Monday.
    pub next_eligible: Option<NaiveDate>,
    /// Mean of same-calendar-month totals across years.
    pub seasonal_avg: Option<f64>,
}

/// Rotation suggestion for one rep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurfSuggestion {
    pub rep: String,
    pub outcome: SuggestionOutcome,
}

/// Either a turf to visit next, or a note explaining why none qualifies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SuggestionOutcome {
    Visit { turf: String, ytd_avg_per_week: f64 },
    NoneEligible { note: String },
}

/// A run of too many consecutive weeks on the same turf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationViolation {
    pub rep: String,
    pub turf: String,
    pub streak: usize,
    pub weeks: Vec<NaiveDate>,
}

/// One turf's share of lifetime visits across all reps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurfShare {
    pub turf: String,
    pub total: i64,
    pub share_pct: f64,
}

/// One rep's share of their own visits spent on one turf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepTurfShare {
    pub rep: String,
    pub turf: String,
    pub total: i64,
    pub share_pct: f64,
    /// Set when this is a top-2 turf for the rep and nobody has visited
    /// it for 4+ weeks.
    pub idle: bool,
}

/// The full turf analysis output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurfReport {
    pub pairs: Vec<TurfPairStats>,
    pub suggestions: Vec<TurfSuggestion>,
    pub violations: Vec<RotationViolation>,
    pub turf_distribution: Vec<TurfShare>,
    pub rep_distribution: Vec<RepTurfShare>,
}
