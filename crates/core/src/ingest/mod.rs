//! Row normalization - raw CSV into canonical records
//!
//! The upstream sheet carries two unrelated data sets side by side: a
//! header-addressed sales section and a positional turf grid repurposing
//! columns M-P. Both are rebuilt wholesale from every fetch; malformed
//! rows are dropped, never repaired.

pub mod header;
pub mod month;
pub mod numeric;
pub mod sales;
pub mod turf_grid;

use irqdash_domain::{Result, SalesRecord, TurfEntry};
use tracing::debug;

pub use header::LabeledRow;
pub use month::resolve_month;
pub use numeric::parse_amount;

/// Everything derived from one CSV snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SheetSnapshot {
    pub records: Vec<SalesRecord>,
    pub turf_entries: Vec<TurfEntry>,
}

/// Parse a full CSV snapshot into sales records and turf entries.
///
/// # Errors
/// Returns `DashboardError::InvalidInput` when the CSV is structurally
/// unreadable. Individual malformed rows are dropped silently.
pub fn parse_snapshot(text: &str) -> Result<SheetSnapshot> {
    let records = sales::parse_sales_rows(text)?;
    let turf_entries = turf_grid::parse_turf_rows(text)?;

    debug!(
        records = records.len(),
        turf_entries = turf_entries.len(),
        "parsed sheet snapshot"
    );

    Ok(SheetSnapshot { records, turf_entries })
}
