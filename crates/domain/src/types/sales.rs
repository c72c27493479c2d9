//! Canonical sales records derived from spreadsheet rows

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One normalized sales row.
///
/// A record exists only if the source row carried a rep name and a
/// resolvable date; anything else is dropped during normalization. The
/// whole list is rebuilt on every fetch, there is no long-lived identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub rep: String,
    pub product: String,
    /// First day of the month the sale belongs to.
    pub month: NaiveDate,
    pub amount: f64,
    pub profit: f64,
    pub commission: f64,
}
