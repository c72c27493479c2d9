//! Sales-row normalization

use csv::ReaderBuilder;
use irqdash_domain::{DashboardError, Result, SalesRecord};
use tracing::trace;

use super::header::LabeledRow;
use super::month::resolve_month;
use super::numeric::parse_amount;

const REP_ALIASES: &[&str] = &["rep", "rep name", "sales rep", "salesperson"];
const PRODUCT_ALIASES: &[&str] = &["product", "product name", "item"];
const MONTH_ALIASES: &[&str] = &["month"];
const DATE_ALIASES: &[&str] = &["date", "sale date"];
const AMOUNT_ALIASES: &[&str] = &["total sales price", "amount", "total", "sale price"];
const COMMISSION_ALIASES: &[&str] = &["commission", "comm"];
const PROFIT_ALIASES: &[&str] = &["profit", "net profit"];

/// Normalize one labeled row into a sales record.
///
/// A record exists only when the rep name and a resolvable date are both
/// present; otherwise the row is dropped by returning `None`.
pub fn normalize_sales_row(row: &LabeledRow) -> Option<SalesRecord> {
    let rep = row.get(REP_ALIASES)?.to_string();
    let month = resolve_month(row.get(MONTH_ALIASES), row.get(DATE_ALIASES))?;

    Some(SalesRecord {
        rep,
        product: row.get(PRODUCT_ALIASES).unwrap_or_default().to_string(),
        month,
        amount: parse_amount(row.get(AMOUNT_ALIASES).unwrap_or_default()),
        profit: parse_amount(row.get(PROFIT_ALIASES).unwrap_or_default()),
        commission: parse_amount(row.get(COMMISSION_ALIASES).unwrap_or_default()),
    })
}

/// Parse the header-addressed sales section of a CSV snapshot.
///
/// # Errors
/// Returns `DashboardError::InvalidInput` when the CSV headers cannot be
/// read at all; malformed data rows are dropped silently.
pub fn parse_sales_rows(text: &str) -> Result<Vec<SalesRecord>> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| DashboardError::InvalidInput(format!("unreadable CSV headers: {e}")))?
        .iter()
        .map(ToString::to_string)
        .collect();

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for row in reader.records() {
        let Ok(raw) = row else {
            dropped += 1;
            continue;
        };
        let labeled = LabeledRow::new(headers.iter().map(String::as_str), raw.iter());
        match normalize_sales_row(&labeled) {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        trace!(dropped, "dropped malformed sales rows");
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    const CSV: &str = "\
Rep Name,B,C,D,E,Product,Month,H,Total Sales Price,Commission,Profit
Ana,,,,,Widget,JUNE 2025,,\"1,250.00\",125,\"312.50\"
Ben,,,,,Gadget,06-2025,,\"1.000,50\",80,200
,,,,,Widget,2025-06,,500,50,100
Cat,,,,,Widget,,,500,50,100
";

    #[test]
    fn rows_without_rep_or_date_are_dropped() {
        let records = parse_sales_rows(CSV).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| !r.rep.is_empty()));
    }

    #[test]
    fn numeric_and_month_normalization_applied() {
        let records = parse_sales_rows(CSV).unwrap();
        let ana = &records[0];
        assert_eq!(ana.month, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert!((ana.amount - 1250.0).abs() < f64::EPSILON);
        assert!((ana.profit - 312.5).abs() < f64::EPSILON);

        let ben = &records[1];
        assert!((ben.amount - 1000.5).abs() < f64::EPSILON);
    }
}
