//! Aggregated dashboard rollups

use serde::{Deserialize, Serialize};

use super::context::ContextDate;
use super::turf::TurfReport;

/// Month-over-month movement of a metric.
///
/// `New` marks a metric that had no prior-month baseline but is positive
/// now; a percentage against a zero baseline would be meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MonthDelta {
    New,
    Pct(f64),
}

/// Company-wide totals for one period (context month or YTD).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PeriodTotals {
    pub sales_count: u64,
    pub revenue: f64,
    pub profit: f64,
}

/// Company-wide rollup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyReport {
    pub monthly: PeriodTotals,
    pub ytd: PeriodTotals,
    /// Month-over-month revenue movement; `None` when both months are empty.
    pub revenue_delta: Option<MonthDelta>,
}

/// Per-rep totals for one period.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RepTotals {
    pub sales_count: u64,
    pub revenue: f64,
    pub profit: f64,
    pub commission: f64,
}

/// Per-rep rollup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepReport {
    pub rep: String,
    pub monthly: RepTotals,
    pub ytd: RepTotals,
    /// Sales-count movement versus the immediately preceding month.
    pub count_delta: Option<MonthDelta>,
    /// Average profit per sale over months strictly before the context
    /// month; `None` when there is no history.
    pub avg_profit_per_sale: Option<f64>,
}

/// Per-product rollup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductReport {
    pub product: String,
    pub monthly_count: u64,
    pub ytd_count: u64,
    /// Profit/revenue margin (percent) over YTD-through-context-month
    /// revenue; the context month itself is excluded in live mode.
    pub margin_pct: Option<f64>,
}

/// The full computed dashboard view for one context date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    pub context: ContextDate,
    pub company: CompanyReport,
    pub reps: Vec<RepReport>,
    pub products: Vec<ProductReport>,
    pub turf: TurfReport,
}
