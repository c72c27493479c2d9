//! Month resolution for sales rows
//!
//! Accepted month-cell formats: `MONTH_NAME YYYY`, `MM-YYYY`, `YYYY-MM`.
//! When the month cell is missing or unreadable, a `date` cell parsed as
//! `DD/MM/YYYY` (or ISO `YYYY-MM-DD`) is truncated to month granularity.

use chrono::{Datelike, NaiveDate};

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Resolve a first-of-month date from a month cell with a date-cell
/// fallback. Returns `None` when neither resolves.
pub fn resolve_month(month_cell: Option<&str>, date_cell: Option<&str>) -> Option<NaiveDate> {
    if let Some(resolved) = month_cell.and_then(parse_month_cell) {
        return Some(resolved);
    }
    date_cell.and_then(parse_date_cell)
}

fn parse_month_cell(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // "JUNE 2025"
    if let Some((name, year)) = trimmed.split_once(char::is_whitespace) {
        if let (Some(month), Ok(year)) = (month_from_name(name), year.trim().parse::<i32>()) {
            return NaiveDate::from_ymd_opt(year, month, 1);
        }
    }

    // "06-2025" or "2025-06"
    if let Some((left, right)) = trimmed.split_once('-') {
        let left_num = left.trim().parse::<u32>().ok()?;
        let right_num = right.trim().parse::<u32>().ok()?;
        if left_num >= 1000 {
            return NaiveDate::from_ymd_opt(left_num as i32, right_num, 1);
        }
        return NaiveDate::from_ymd_opt(right_num as i32, left_num, 1);
    }

    None
}

fn parse_date_cell(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let parsed = NaiveDate::parse_from_str(trimmed, "%d/%m/%Y")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"))
        .ok()?;
    parsed.with_day(1)
}

fn month_from_name(name: &str) -> Option<u32> {
    let lower = name.trim().to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|m| *m == lower || (lower.len() >= 3 && m.starts_with(&lower)))
        .map(|idx| idx as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn all_month_formats_agree() {
        for cell in ["JUNE 2025", "06-2025", "2025-06", "june 2025", "Jun 2025"] {
            let resolved = resolve_month(Some(cell), None).unwrap();
            assert_eq!(resolved.year(), 2025, "cell {cell}");
            assert_eq!(resolved.month(), 6, "cell {cell}");
            assert_eq!(resolved.day(), 1, "cell {cell}");
        }
    }

    #[test]
    fn falls_back_to_date_column() {
        assert_eq!(resolve_month(None, Some("17/03/2024")), Some(ymd(2024, 3, 1)));
        assert_eq!(resolve_month(Some("garbage"), Some("2024-03-17")), Some(ymd(2024, 3, 1)));
    }

    #[test]
    fn unresolvable_yields_none() {
        assert_eq!(resolve_month(None, None), None);
        assert_eq!(resolve_month(Some(""), Some("not a date")), None);
        assert_eq!(resolve_month(Some("13-2025x"), None), None);
    }
}
