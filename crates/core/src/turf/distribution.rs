//! Lifetime visit distribution shares

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use irqdash_domain::constants::IDLE_TURF_THRESHOLD_WEEKS;
use irqdash_domain::{RepTurfShare, TurfEntry, TurfShare};

/// Compute each turf's share of lifetime visits across all reps, and
/// each rep's distribution across turfs with idle flags on neglected
/// top-2 turfs.
pub fn distribution(entries: &[TurfEntry], today: NaiveDate) -> (Vec<TurfShare>, Vec<RepTurfShare>) {
    let mut turf_totals: BTreeMap<&str, i64> = BTreeMap::new();
    let mut last_any: BTreeMap<&str, NaiveDate> = BTreeMap::new();
    let mut rep_turf_totals: BTreeMap<&str, BTreeMap<&str, i64>> = BTreeMap::new();

    for entry in entries {
        *turf_totals.entry(&entry.turf).or_default() += entry.count;
        last_any
            .entry(&entry.turf)
            .and_modify(|week| *week = (*week).max(entry.week))
            .or_insert(entry.week);
        *rep_turf_totals.entry(&entry.rep).or_default().entry(&entry.turf).or_default() +=
            entry.count;
    }

    let grand_total: i64 = turf_totals.values().sum();
    let mut turf_shares: Vec<TurfShare> = turf_totals
        .iter()
        .map(|(turf, total)| TurfShare {
            turf: (*turf).to_string(),
            total: *total,
            share_pct: share_pct(*total, grand_total),
        })
        .collect();
    turf_shares.sort_by(|a, b| {
        b.total.cmp(&a.total).then_with(|| a.turf.cmp(&b.turf))
    });

    let idle_cutoff = today - Duration::weeks(IDLE_TURF_THRESHOLD_WEEKS);
    let mut rep_shares = Vec::new();
    for (rep, totals) in rep_turf_totals {
        let rep_total: i64 = totals.values().sum();
        let mut ranked: Vec<(&str, i64)> = totals.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        for (rank, (turf, total)) in ranked.into_iter().enumerate() {
            let idle = rank < 2
                && last_any.get(turf).is_some_and(|week| *week <= idle_cutoff);
            rep_shares.push(RepTurfShare {
                rep: rep.to_string(),
                turf: turf.to_string(),
                total,
                share_pct: share_pct(total, rep_total),
                idle,
            });
        }
    }

    (turf_shares, rep_shares)
}

fn share_pct(part: i64, whole: i64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(rep: &str, turf: &str, week: NaiveDate, count: i64) -> TurfEntry {
        TurfEntry { rep: rep.to_string(), turf: turf.to_string(), week, count }
    }

    #[test]
    fn turf_shares_cover_all_reps() {
        let week = ymd(2025, 6, 16);
        let entries = vec![
            entry("Ana", "North", week, 6),
            entry("Ben", "North", week, 2),
            entry("Ben", "South", week, 2),
        ];
        let (turfs, _) = distribution(&entries, ymd(2025, 6, 20));
        assert_eq!(turfs[0].turf, "North");
        assert!((turfs[0].share_pct - 80.0).abs() < f64::EPSILON);
        assert!((turfs[1].share_pct - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn top_two_neglected_turfs_are_flagged_idle() {
        let today = ymd(2025, 6, 20);
        let stale = today - Duration::weeks(6);
        let fresh = today - Duration::weeks(1);
        let entries = vec![
            entry("Ana", "North", stale, 10),
            entry("Ana", "South", fresh, 5),
            entry("Ana", "East", stale, 1),
        ];
        let (_, reps) = distribution(&entries, today);
        let north = reps.iter().find(|s| s.turf == "North").unwrap();
        let south = reps.iter().find(|s| s.turf == "South").unwrap();
        let east = reps.iter().find(|s| s.turf == "East").unwrap();
        assert!(north.idle, "top turf unvisited for 6 weeks");
        assert!(!south.idle, "recently visited");
        assert!(!east.idle, "stale but outside the top 2");
    }

    #[test]
    fn empty_input_yields_empty_distribution() {
        let (turfs, reps) = distribution(&[], ymd(2025, 6, 20));
        assert!(turfs.is_empty());
        assert!(reps.is_empty());
    }
}
