//! Explicit dashboard view state

use irqdash_domain::DashboardError;

use super::service::RefreshOutcome;
use crate::ingest::SheetSnapshot;

/// The single mutable view-state object the dashboard renders from.
///
/// Holds the last good snapshot and the most recent error. Outcomes from
/// superseded refresh cycles are rejected, not applied; the error of a
/// failed cycle sticks around until the next successful one, variant
/// intact so callers can map it to the right status.
#[derive(Debug, Default)]
pub struct DashboardState {
    last_applied_cycle: u64,
    snapshot: Option<SheetSnapshot>,
    last_error: Option<DashboardError>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a refresh outcome. Returns `false` when the outcome belongs
    /// to a superseded cycle and was discarded.
    pub fn apply(&mut self, outcome: RefreshOutcome) -> bool {
        if outcome.cycle_id <= self.last_applied_cycle {
            return false;
        }
        self.last_applied_cycle = outcome.cycle_id;

        match outcome.result {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot);
                self.last_error = None;
            }
            Err(err) => {
                self.last_error = Some(err);
            }
        }
        true
    }

    /// The last successfully fetched snapshot, if any.
    pub fn snapshot(&self) -> Option<&SheetSnapshot> {
        self.snapshot.as_ref()
    }

    /// The most recent refresh error, cleared on success.
    pub fn last_error(&self) -> Option<&DashboardError> {
        self.last_error.as_ref()
    }
}
