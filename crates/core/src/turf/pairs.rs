//! Per (rep, turf) pair statistics

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, Duration, NaiveDate};
use irqdash_domain::constants::VISIT_COOLDOWN_DAYS;
use irqdash_domain::{TurfEntry, TurfPairStats};

/// Roll every entry up into per-pair statistics, ordered by rep then turf.
pub fn pair_stats(entries: &[TurfEntry], today: NaiveDate) -> Vec<TurfPairStats> {
    let mut by_pair: BTreeMap<(&str, &str), Vec<&TurfEntry>> = BTreeMap::new();
    let mut last_any: BTreeMap<&str, NaiveDate> = BTreeMap::new();

    for entry in entries {
        by_pair.entry((&entry.rep, &entry.turf)).or_default().push(entry);
        last_any
            .entry(&entry.turf)
            .and_modify(|week| *week = (*week).max(entry.week))
            .or_insert(entry.week);
    }

    by_pair
        .into_iter()
        .map(|((rep, turf), entries)| {
            let weeks: BTreeSet<NaiveDate> = entries.iter().map(|e| e.week).collect();
            let lifetime_total: i64 = entries.iter().map(|e| e.count).sum();

            let ytd: Vec<&&TurfEntry> = entries
                .iter()
                .filter(|e| e.week.year() == today.year() && e.week <= today)
                .collect();
            let ytd_weeks: BTreeSet<NaiveDate> = ytd.iter().map(|e| e.week).collect();
            let ytd_total: i64 = ytd.iter().map(|e| e.count).sum();
            let ytd_avg_per_week = if ytd_weeks.is_empty() {
                0.0
            } else {
                ytd_total as f64 / ytd_weeks.len() as f64
            };

            let last_visit = weeks.iter().next_back().copied();
            let next_eligible =
                last_visit.map(|week| next_monday(week + Duration::days(VISIT_COOLDOWN_DAYS)));

            TurfPairStats {
                rep: rep.to_string(),
                turf: turf.to_string(),
                lifetime_total,
                lifetime_weeks: weeks.len() as u64,
                ytd_total,
                ytd_weeks: ytd_weeks.len() as u64,
                ytd_avg_per_week,
                last_visit,
                last_visit_any_rep: last_any.get(turf).copied(),
                next_eligible,
                seasonal_avg: seasonal_avg(&entries, today.month()),
            }
        })
        .collect()
}

/// Mean of same-calendar-month totals across the years present in the
/// data. `None` when the pair has no visits in that month at all.
fn seasonal_avg(entries: &[&TurfEntry], month: u32) -> Option<f64> {
    let mut per_year: BTreeMap<i32, i64> = BTreeMap::new();
    for entry in entries.iter().filter(|e| e.week.month() == month) {
        *per_year.entry(entry.week.year()).or_default() += entry.count;
    }
    if per_year.is_empty() {
        return None;
    }
    let total: i64 = per_year.values().sum();
    Some(total as f64 / per_year.len() as f64)
}

/// Round a date up to the following Monday; Mondays stay put.
fn next_monday(date: NaiveDate) -> NaiveDate {
    let days_ahead = (7 - date.weekday().num_days_from_monday()) % 7;
    date + Duration::days(i64::from(days_ahead))
}
