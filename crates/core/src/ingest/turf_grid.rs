//! Turf grid extraction
//!
//! Columns M-P of the sheet are repurposed as a positional grid of weekly
//! territory visits: rep, date (`DD/MM/YYYY`), turf name, signed count.
//! Header labels in those columns fail the date parse and drop out like
//! any other malformed row.

use chrono::{NaiveDate, Weekday};
use csv::ReaderBuilder;
use irqdash_domain::constants::{COL_TURF_COUNT, COL_TURF_DATE, COL_TURF_NAME, COL_TURF_REP};
use irqdash_domain::{DashboardError, Result, TurfEntry};
use tracing::trace;

/// Monday of the ISO week containing `date`.
pub fn week_monday(date: NaiveDate) -> NaiveDate {
    date.week(Weekday::Mon).first_day()
}

/// Interpret one raw row's turf columns. `None` when any of the four
/// positional fields is absent or the date/count does not parse.
pub fn turf_entry_from_cells(cells: &[&str]) -> Option<TurfEntry> {
    let rep = non_empty(cells.get(COL_TURF_REP)?)?;
    let date_raw = non_empty(cells.get(COL_TURF_DATE)?)?;
    let turf = non_empty(cells.get(COL_TURF_NAME)?)?;
    let count_raw = non_empty(cells.get(COL_TURF_COUNT)?)?;

    let date = NaiveDate::parse_from_str(date_raw, "%d/%m/%Y")
        .or_else(|_| NaiveDate::parse_from_str(date_raw, "%Y-%m-%d"))
        .ok()?;
    let count = count_raw.parse::<i64>().ok()?;

    Some(TurfEntry {
        rep: rep.to_string(),
        turf: turf.to_string(),
        week: week_monday(date),
        count,
    })
}

/// Parse the positional turf grid out of a CSV snapshot.
///
/// # Errors
/// Returns `DashboardError::InvalidInput` when the CSV is structurally
/// unreadable; malformed grid rows are dropped silently.
pub fn parse_turf_rows(text: &str) -> Result<Vec<TurfEntry>> {
    let mut reader =
        ReaderBuilder::new().has_headers(false).flexible(true).from_reader(text.as_bytes());

    let mut entries = Vec::new();
    let mut dropped = 0usize;

    for row in reader.records() {
        let raw =
            row.map_err(|e| DashboardError::InvalidInput(format!("unreadable CSV row: {e}")))?;
        let cells: Vec<&str> = raw.iter().map(str::trim).collect();
        match turf_entry_from_cells(&cells) {
            Some(entry) => entries.push(entry),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        trace!(dropped, "rows without a complete turf grid section");
    }

    Ok(entries)
}

fn non_empty(cell: &str) -> Option<&str> {
    let trimmed = cell.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_with_turf(rep: &str, date: &str, turf: &str, count: &str) -> Vec<String> {
        let mut cells = vec![String::new(); 16];
        cells[COL_TURF_REP] = rep.to_string();
        cells[COL_TURF_DATE] = date.to_string();
        cells[COL_TURF_NAME] = turf.to_string();
        cells[COL_TURF_COUNT] = count.to_string();
        cells
    }

    #[test]
    fn entry_snaps_to_monday_of_week() {
        let cells = row_with_turf("Ana", "19/06/2025", "North", "4");
        let refs: Vec<&str> = cells.iter().map(String::as_str).collect();
        let entry = turf_entry_from_cells(&refs).unwrap();
        // 2025-06-19 is a Thursday
        assert_eq!(entry.week, NaiveDate::from_ymd_opt(2025, 6, 16).unwrap());
        assert_eq!(entry.count, 4);
    }

    #[test]
    fn negative_corrections_are_kept() {
        let cells = row_with_turf("Ana", "19/06/2025", "North", "-2");
        let refs: Vec<&str> = cells.iter().map(String::as_str).collect();
        assert_eq!(turf_entry_from_cells(&refs).unwrap().count, -2);
    }

    #[test]
    fn incomplete_rows_are_dropped() {
        for (rep, date, turf, count) in [
            ("", "19/06/2025", "North", "4"),
            ("Ana", "not a date", "North", "4"),
            ("Ana", "19/06/2025", "", "4"),
            ("Ana", "19/06/2025", "North", "many"),
        ] {
            let cells = row_with_turf(rep, date, turf, count);
            let refs: Vec<&str> = cells.iter().map(String::as_str).collect();
            assert!(turf_entry_from_cells(&refs).is_none());
        }
    }

    #[test]
    fn grid_rows_extracted_from_full_sheet() {
        let mut header = vec!["h".to_string(); 16];
        header[COL_TURF_REP] = "Turf Rep".to_string();
        let rows = vec![
            header.join(","),
            row_with_turf("Ana", "19/06/2025", "North", "4").join(","),
            row_with_turf("Ben", "20/06/2025", "South", "2").join(","),
        ];
        let text = rows.join("\n");
        let entries = parse_turf_rows(&text).unwrap();
        assert_eq!(entries.len(), 2);
    }
}
