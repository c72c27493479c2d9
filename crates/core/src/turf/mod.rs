//! Turf rotation analysis
//!
//! Works over the weekly (rep, turf, week, count) entries extracted from
//! the grid columns. Produces per-pair statistics, a next-visit
//! suggestion per rep, rotation guardrail violations over the trailing
//! twelve ISO weeks, and lifetime distribution shares.

pub mod distribution;
pub mod pairs;
pub mod rotation;

use chrono::NaiveDate;
use irqdash_domain::{TurfEntry, TurfReport};

pub use pairs::pair_stats;
pub use rotation::{rotation_violations, suggestions};

/// Run the full turf analysis against `today`.
pub fn analyze_turf(entries: &[TurfEntry], today: NaiveDate) -> TurfReport {
    let pairs = pairs::pair_stats(entries, today);
    let suggestions = rotation::suggestions(&pairs, today);
    let violations = rotation::rotation_violations(entries, today);
    let (turf_distribution, rep_distribution) = distribution::distribution(entries, today);

    TurfReport { pairs, suggestions, violations, turf_distribution, rep_distribution }
}
