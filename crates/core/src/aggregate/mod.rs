//! Sales aggregation - company, per-rep, and per-product rollups
//!
//! Everything here is a pure function of the record list and a context
//! date; re-running with identical inputs yields identical output. The
//! context month is either live (tracking the current date) or a manually
//! selected month, and several metrics deliberately exclude the live
//! month to avoid presenting partial-month figures as final.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use irqdash_domain::{
    CompanyReport, ContextDate, DashboardReport, MonthDelta, PeriodTotals, ProductReport,
    RepReport, RepTotals, SalesRecord,
};

use crate::ingest::SheetSnapshot;
use crate::turf::analyze_turf;

/// Build the full dashboard report for one context date.
///
/// `today` is the real current date, used for turf eligibility windows;
/// it is passed in rather than read from the clock to keep this pure.
pub fn build_report(snapshot: &SheetSnapshot, ctx: ContextDate, today: NaiveDate) -> DashboardReport {
    DashboardReport {
        context: ctx,
        company: company_rollup(&snapshot.records, ctx),
        reps: rep_rollups(&snapshot.records, ctx),
        products: product_rollups(&snapshot.records, ctx),
        turf: analyze_turf(&snapshot.turf_entries, today),
    }
}

/// Month-over-month movement. `New` when there was no baseline but the
/// current month is positive; `None` when both months are empty.
fn month_delta(prev: f64, current: f64) -> Option<MonthDelta> {
    if prev > 0.0 {
        Some(MonthDelta::Pct((current - prev) / prev * 100.0))
    } else if current > 0.0 {
        Some(MonthDelta::New)
    } else {
        None
    }
}

fn in_month(record: &SalesRecord, month_start: NaiveDate) -> bool {
    record.month == month_start
}

fn in_ytd(record: &SalesRecord, ctx: ContextDate) -> bool {
    record.month.year() == ctx.year() && record.month <= ctx.month_start()
}

/// Company-wide monthly/YTD totals plus the revenue delta.
pub fn company_rollup(records: &[SalesRecord], ctx: ContextDate) -> CompanyReport {
    let monthly = period_totals(records, |r| in_month(r, ctx.month_start()));
    let ytd = period_totals(records, |r| in_ytd(r, ctx));
    let prev = period_totals(records, |r| in_month(r, ctx.prev_month_start()));

    CompanyReport {
        monthly,
        ytd,
        revenue_delta: month_delta(prev.revenue, monthly.revenue),
    }
}

fn period_totals<F>(records: &[SalesRecord], filter: F) -> PeriodTotals
where
    F: Fn(&SalesRecord) -> bool,
{
    let mut totals = PeriodTotals::default();
    for record in records.iter().filter(|r| filter(r)) {
        totals.sales_count += 1;
        totals.revenue += record.amount;
        totals.profit += record.profit;
    }
    totals
}

/// Per-rep rollups, ranked by monthly sales count, then monthly revenue,
/// then name.
pub fn rep_rollups(records: &[SalesRecord], ctx: ContextDate) -> Vec<RepReport> {
    let mut by_rep: BTreeMap<&str, Vec<&SalesRecord>> = BTreeMap::new();
    for record in records {
        by_rep.entry(&record.rep).or_default().push(record);
    }

    let mut reports: Vec<RepReport> = by_rep
        .into_iter()
        .map(|(rep, records)| {
            let monthly = rep_totals(&records, |r| in_month(r, ctx.month_start()));
            let ytd = rep_totals(&records, |r| in_ytd(r, ctx));
            let prev = rep_totals(&records, |r| in_month(r, ctx.prev_month_start()));

            // Historical average: the context month never contributes,
            // whether live or selected.
            let history: Vec<&&SalesRecord> =
                records.iter().filter(|r| r.month < ctx.month_start()).collect();
            let avg_profit_per_sale = if history.is_empty() {
                None
            } else {
                let profit: f64 = history.iter().map(|r| r.profit).sum();
                Some(profit / history.len() as f64)
            };

            RepReport {
                rep: rep.to_string(),
                monthly,
                ytd,
                count_delta: month_delta(prev.sales_count as f64, monthly.sales_count as f64),
                avg_profit_per_sale,
            }
        })
        .collect();

    reports.sort_by(|a, b| {
        b.monthly
            .sales_count
            .cmp(&a.monthly.sales_count)
            .then_with(|| {
                b.monthly.revenue.partial_cmp(&a.monthly.revenue).unwrap_or(Ordering::Equal)
            })
            .then_with(|| a.rep.cmp(&b.rep))
    });
    reports
}

fn rep_totals<F>(records: &[&SalesRecord], filter: F) -> RepTotals
where
    F: Fn(&SalesRecord) -> bool,
{
    let mut totals = RepTotals::default();
    for record in records.iter().filter(|r| filter(r)) {
        totals.sales_count += 1;
        totals.revenue += record.amount;
        totals.profit += record.profit;
        totals.commission += record.commission;
    }
    totals
}

/// Per-product rollups, ranked by monthly count, then YTD count, then
/// name. Margin is computed from YTD-through-context-month figures; in
/// live mode the (partial) context month is excluded.
pub fn product_rollups(records: &[SalesRecord], ctx: ContextDate) -> Vec<ProductReport> {
    let mut by_product: BTreeMap<&str, Vec<&SalesRecord>> = BTreeMap::new();
    for record in records.iter().filter(|r| !r.product.is_empty()) {
        by_product.entry(&record.product).or_default().push(record);
    }

    let mut reports: Vec<ProductReport> = by_product
        .into_iter()
        .map(|(product, records)| {
            let monthly_count =
                records.iter().filter(|r| in_month(r, ctx.month_start())).count() as u64;
            let ytd_count = records.iter().filter(|r| in_ytd(r, ctx)).count() as u64;

            let margin_window = |r: &SalesRecord| {
                if ctx.is_live() {
                    r.month.year() == ctx.year() && r.month < ctx.month_start()
                } else {
                    in_ytd(r, ctx)
                }
            };
            let revenue: f64 =
                records.iter().filter(|r| margin_window(r)).map(|r| r.amount).sum();
            let profit: f64 = records.iter().filter(|r| margin_window(r)).map(|r| r.profit).sum();
            let margin_pct = (revenue != 0.0).then(|| profit / revenue * 100.0);

            ProductReport { product: product.to_string(), monthly_count, ytd_count, margin_pct }
        })
        .collect();

    reports.sort_by(|a, b| {
        b.monthly_count
            .cmp(&a.monthly_count)
            .then_with(|| b.ytd_count.cmp(&a.ytd_count))
            .then_with(|| a.product.cmp(&b.product))
    });
    reports
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(rep: &str, product: &str, month: NaiveDate, amount: f64, profit: f64) -> SalesRecord {
        SalesRecord {
            rep: rep.to_string(),
            product: product.to_string(),
            month,
            amount,
            profit,
            commission: amount * 0.1,
        }
    }

    fn ctx_june() -> ContextDate {
        ContextDate::selected(2025, 6).unwrap()
    }

    #[test]
    fn revenue_delta_is_a_percentage_against_prior_month() {
        let records = vec![
            record("Ana", "Widget", ymd(2025, 5, 1), 100.0, 10.0),
            record("Ana", "Widget", ymd(2025, 6, 1), 120.0, 12.0),
        ];
        let company = company_rollup(&records, ctx_june());
        assert_eq!(company.revenue_delta, Some(MonthDelta::Pct(20.0)));
    }

    #[test]
    fn zero_baseline_flags_new_instead_of_percentage() {
        let records = vec![record("Ana", "Widget", ymd(2025, 6, 1), 50.0, 5.0)];
        let company = company_rollup(&records, ctx_june());
        assert_eq!(company.revenue_delta, Some(MonthDelta::New));
    }

    #[test]
    fn empty_months_have_no_delta() {
        let records = vec![record("Ana", "Widget", ymd(2025, 2, 1), 50.0, 5.0)];
        let company = company_rollup(&records, ctx_june());
        assert_eq!(company.revenue_delta, None);
    }

    #[test]
    fn ytd_stops_at_context_month() {
        let records = vec![
            record("Ana", "Widget", ymd(2025, 1, 1), 100.0, 10.0),
            record("Ana", "Widget", ymd(2025, 6, 1), 100.0, 10.0),
            record("Ana", "Widget", ymd(2025, 9, 1), 100.0, 10.0),
            record("Ana", "Widget", ymd(2024, 6, 1), 100.0, 10.0),
        ];
        let company = company_rollup(&records, ctx_june());
        assert_eq!(company.ytd.sales_count, 2);
        assert!((company.ytd.revenue - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rep_average_profit_excludes_context_month() {
        let records = vec![
            record("Ana", "Widget", ymd(2025, 4, 1), 100.0, 10.0),
            record("Ana", "Widget", ymd(2025, 5, 1), 100.0, 30.0),
            record("Ana", "Widget", ymd(2025, 6, 1), 100.0, 1000.0),
        ];
        let reps = rep_rollups(&records, ctx_june());
        assert!((reps[0].avg_profit_per_sale.unwrap() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rep_count_delta_uses_prior_month_counts() {
        let records = vec![
            record("Ana", "Widget", ymd(2025, 5, 1), 10.0, 1.0),
            record("Ana", "Widget", ymd(2025, 5, 2), 10.0, 1.0),
            record("Ana", "Widget", ymd(2025, 6, 1), 10.0, 1.0),
        ];
        // Day components collapse to first-of-month during normalization;
        // construct that shape directly here.
        let records: Vec<SalesRecord> = records
            .into_iter()
            .map(|mut r| {
                r.month = r.month.with_day(1).unwrap();
                r
            })
            .collect();
        let reps = rep_rollups(&records, ctx_june());
        assert_eq!(reps[0].count_delta, Some(MonthDelta::Pct(-50.0)));
    }

    #[test]
    fn live_margin_excludes_partial_context_month() {
        let records = vec![
            record("Ana", "Widget", ymd(2025, 5, 1), 100.0, 50.0),
            record("Ana", "Widget", ymd(2025, 6, 1), 100.0, 0.0),
        ];
        let live = ContextDate::live(ymd(2025, 6, 15));
        let products = product_rollups(&records, live);
        // Margin from May only: 50%
        assert!((products[0].margin_pct.unwrap() - 50.0).abs() < f64::EPSILON);

        let selected = ctx_june();
        let products = product_rollups(&records, selected);
        // Selected month is final, so June dilutes the margin to 25%
        assert!((products[0].margin_pct.unwrap() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rankings_break_ties_by_name_ascending() {
        let records = vec![
            record("Zoe", "Widget", ymd(2025, 6, 1), 100.0, 10.0),
            record("Ana", "Gadget", ymd(2025, 6, 1), 100.0, 10.0),
        ];
        let reps = rep_rollups(&records, ctx_june());
        assert_eq!(reps[0].rep, "Ana");
        assert_eq!(reps[1].rep, "Zoe");

        let products = product_rollups(&records, ctx_june());
        assert_eq!(products[0].product, "Gadget");
    }

    #[test]
    fn aggregation_is_pure() {
        let snapshot = SheetSnapshot {
            records: vec![
                record("Ana", "Widget", ymd(2025, 5, 1), 100.0, 10.0),
                record("Ben", "Gadget", ymd(2025, 6, 1), 75.0, 20.0),
            ],
            turf_entries: Vec::new(),
        };
        let today = ymd(2025, 6, 20);
        let first = build_report(&snapshot, ctx_june(), today);
        let second = build_report(&snapshot, ctx_june(), today);
        assert_eq!(first, second);
    }
}
