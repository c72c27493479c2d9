//! Context date for aggregation
//!
//! "Monthly" metrics are always computed against a context month: either
//! the current real-time month (live mode) or a manually selected one.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{DashboardError, Result};

/// The month against which monthly and YTD metrics are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextDate {
    month_start: NaiveDate,
    live: bool,
}

impl ContextDate {
    /// Live mode: the context tracks the current date.
    pub fn live(today: NaiveDate) -> Self {
        Self { month_start: today.with_day(1).unwrap_or(today), live: true }
    }

    /// A manually selected month.
    ///
    /// # Errors
    /// Returns `DashboardError::InvalidInput` if the year/month pair does
    /// not form a valid date.
    pub fn selected(year: i32, month: u32) -> Result<Self> {
        let month_start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            DashboardError::InvalidInput(format!("invalid context month: {year}-{month:02}"))
        })?;
        Ok(Self { month_start, live: false })
    }

    /// First day of the context month.
    pub fn month_start(&self) -> NaiveDate {
        self.month_start
    }

    /// First day of the month immediately preceding the context month.
    pub fn prev_month_start(&self) -> NaiveDate {
        let last_of_prev = self.month_start - Duration::days(1);
        last_of_prev.with_day(1).unwrap_or(last_of_prev)
    }

    pub fn year(&self) -> i32 {
        self.month_start.year()
    }

    pub fn month(&self) -> u32 {
        self.month_start.month()
    }

    /// Whether the context tracks current real time.
    pub fn is_live(&self) -> bool {
        self.live
    }
}
