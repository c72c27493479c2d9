//! Rotation suggestions and guardrail checks

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use irqdash_domain::constants::{
    GUARDRAIL_MAX_STREAK, GUARDRAIL_WINDOW_WEEKS, VISIT_COOLDOWN_DAYS,
};
use irqdash_domain::{
    RotationViolation, SuggestionOutcome, TurfEntry, TurfPairStats, TurfSuggestion,
};

use crate::ingest::turf_grid::week_monday;

/// Per rep: rank turfs by YTD average-per-week descending (name breaks
/// ties) and suggest the first one whose last visit by this rep is more
/// than the cooldown before `today`. No eligible turf yields an
/// explanatory note instead.
pub fn suggestions(pairs: &[TurfPairStats], today: NaiveDate) -> Vec<TurfSuggestion> {
    let mut by_rep: BTreeMap<&str, Vec<&TurfPairStats>> = BTreeMap::new();
    for pair in pairs {
        by_rep.entry(&pair.rep).or_default().push(pair);
    }

    by_rep
        .into_iter()
        .map(|(rep, mut ranked)| {
            ranked.sort_by(|a, b| {
                b.ytd_avg_per_week
                    .partial_cmp(&a.ytd_avg_per_week)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| a.turf.cmp(&b.turf))
            });

            let eligible = ranked.iter().find(|pair| {
                pair.last_visit
                    .is_some_and(|week| (today - week).num_days() > VISIT_COOLDOWN_DAYS)
            });

            let outcome = match eligible {
                Some(pair) => SuggestionOutcome::Visit {
                    turf: pair.turf.clone(),
                    ytd_avg_per_week: pair.ytd_avg_per_week,
                },
                None => SuggestionOutcome::NoneEligible {
                    note: "every turf was visited within the last 3 weeks".to_string(),
                },
            };

            TurfSuggestion { rep: rep.to_string(), outcome }
        })
        .collect()
}

/// Scan the trailing twelve ISO weeks per rep and flag every maximal run
/// of more than two consecutive weeks on the same turf.
///
/// A week's assignment is the turf with the highest count that week
/// (ties to the lexicographically smaller name); weeks without entries
/// break any run.
pub fn rotation_violations(entries: &[TurfEntry], today: NaiveDate) -> Vec<RotationViolation> {
    let current_week = week_monday(today);
    let window_start = current_week - Duration::weeks(GUARDRAIL_WINDOW_WEEKS - 1);

    // rep -> week -> (count, turf)
    let mut assignments: BTreeMap<&str, BTreeMap<NaiveDate, (i64, &str)>> = BTreeMap::new();
    for entry in entries {
        if entry.week < window_start || entry.week > current_week {
            continue;
        }
        let weeks = assignments.entry(&entry.rep).or_default();
        match weeks.get(&entry.week) {
            Some((count, turf))
                if *count > entry.count
                    || (*count == entry.count && *turf <= entry.turf.as_str()) => {}
            _ => {
                weeks.insert(entry.week, (entry.count, &entry.turf));
            }
        }
    }

    let mut violations = Vec::new();
    for (rep, weeks) in assignments {
        let mut run: Vec<(NaiveDate, &str)> = Vec::new();
        for offset in 0..GUARDRAIL_WINDOW_WEEKS {
            let week = window_start + Duration::weeks(offset);
            let assigned = weeks.get(&week).map(|(_, turf)| *turf);
            match (assigned, run.last().copied()) {
                (Some(turf), Some((_, prev))) if turf == prev => run.push((week, turf)),
                _ => {
                    flush_run(rep, &run, &mut violations);
                    run.clear();
                    if let Some(turf) = assigned {
                        run.push((week, turf));
                    }
                }
            }
        }
        flush_run(rep, &run, &mut violations);
    }

    violations
}

fn flush_run(rep: &str, run: &[(NaiveDate, &str)], violations: &mut Vec<RotationViolation>) {
    if run.len() <= GUARDRAIL_MAX_STREAK {
        return;
    }
    violations.push(RotationViolation {
        rep: rep.to_string(),
        turf: run[0].1.to_string(),
        streak: run.len(),
        weeks: run.iter().map(|(week, _)| *week).collect(),
    });
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

    fn stats(rep: &str, turf: &str, last_visit: NaiveDate, ytd_avg: f64) -> TurfPairStats {
        TurfPairStats {
            rep: rep.to_string(),
            turf: turf.to_string(),
            lifetime_total: 0,
            lifetime_weeks: 0,
            ytd_total: 0,
            ytd_weeks: 0,
            ytd_avg_per_week: ytd_avg,
            last_visit: Some(last_visit),
            last_visit_any_rep: Some(last_visit),
            next_eligible: None,
            seasonal_avg: None,
        }
    }

    #[test]
    fn suggestion_skips_recently_visited_turfs() {
        let today = ymd(2025, 6, 20);
        // North: higher average but visited 2 weeks ago. South: 4 weeks ago.
        let pairs = vec![
            stats("Ana", "North", today - Duration::weeks(2), 5.0),
            stats("Ana", "South", today - Duration::weeks(4), 3.0),
        ];
        let result = suggestions(&pairs, today);
        assert_eq!(result.len(), 1);
        match &result[0].outcome {
            SuggestionOutcome::Visit { turf, .. } => assert_eq!(turf, "South"),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn suggestion_prefers_higher_ytd_average_among_eligible() {
        let today = ymd(2025, 6, 20);
        let pairs = vec![
            stats("Ana", "East", today - Duration::weeks(5), 2.0),
            stats("Ana", "West", today - Duration::weeks(5), 4.0),
        ];
        let result = suggestions(&pairs, today);
        match &result[0].outcome {
            SuggestionOutcome::Visit { turf, .. } => assert_eq!(turf, "West"),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn no_eligible_turf_emits_a_note() {
        let today = ymd(2025, 6, 20);
        let pairs = vec![stats("Ana", "North", today - Duration::weeks(1), 5.0)];
        let result = suggestions(&pairs, today);
        assert!(matches!(result[0].outcome, SuggestionOutcome::NoneEligible { .. }));
    }

    #[test]
    fn four_week_streak_triggers_exactly_one_violation() {
        let today = ymd(2025, 6, 20);
        let monday = week_monday(today);
        let entries: Vec<TurfEntry> = (0..4)
            .map(|i| entry("Ana", "North", monday - Duration::weeks(i), 2))
            .collect();
        let violations = rotation_violations(&entries, today);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].streak, 4);
        assert_eq!(violations[0].turf, "North");
        assert_eq!(violations[0].weeks.len(), 4);
    }

    #[test]
    fn two_week_streak_is_allowed() {
        let today = ymd(2025, 6, 20);
        let monday = week_monday(today);
        let entries = vec![
            entry("Ana", "North", monday, 2),
            entry("Ana", "North", monday - Duration::weeks(1), 2),
        ];
        assert!(rotation_violations(&entries, today).is_empty());
    }

    #[test]
    fn gaps_break_streaks() {
        let today = ymd(2025, 6, 20);
        let monday = week_monday(today);
        let entries = vec![
            entry("Ana", "North", monday, 2),
            entry("Ana", "North", monday - Duration::weeks(1), 2),
            // gap at -2
            entry("Ana", "North", monday - Duration::weeks(3), 2),
            entry("Ana", "North", monday - Duration::weeks(4), 2),
        ];
        assert!(rotation_violations(&entries, today).is_empty());
    }

    #[test]
    fn streaks_older_than_the_window_are_ignored() {
        let today = ymd(2025, 6, 20);
        let monday = week_monday(today);
        let entries: Vec<TurfEntry> = (13..17)
            .map(|i| entry("Ana", "North", monday - Duration::weeks(i), 2))
            .collect();
        assert!(rotation_violations(&entries, today).is_empty());
    }
}
