//! Refresh-cycle coordination
//!
//! The dashboard re-reads the whole sheet on a timer and on manual
//! refresh. Two behaviors live here: the confirmatory double fetch that
//! guards against reading a mid-write spreadsheet snapshot, and
//! stale-response suppression via monotonically increasing cycle ids so
//! that only the latest cycle's result reaches view state.

pub mod ports;
mod service;
mod state;

pub use service::{RefreshOutcome, RefreshService};
pub use state::DashboardState;
