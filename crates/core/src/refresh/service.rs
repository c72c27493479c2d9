//! Confirmatory double-fetch refresh service

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use irqdash_domain::Result;
use tracing::debug;

use super::ports::SheetSource;
use crate::ingest::{parse_snapshot, SheetSnapshot};

/// The result of one refresh cycle, tagged with its cycle id so stale
/// results can be discarded by [`super::DashboardState`].
#[derive(Debug)]
pub struct RefreshOutcome {
    pub cycle_id: u64,
    pub result: Result<SheetSnapshot>,
}

/// Fetches the sheet twice per cycle and keeps the settled snapshot.
///
/// The sheet is edited live; a single read can observe a mid-write
/// state. The service fetches, waits briefly, fetches again, and when
/// the content hashes differ the later snapshot wins.
pub struct RefreshService {
    source: Arc<dyn SheetSource>,
    confirm_delay: Duration,
    cycles: AtomicU64,
}

impl RefreshService {
    /// Create a new refresh service.
    pub fn new(source: Arc<dyn SheetSource>, confirm_delay: Duration) -> Self {
        Self { source, confirm_delay, cycles: AtomicU64::new(0) }
    }

    /// Run one full refresh cycle.
    pub async fn refresh(&self) -> RefreshOutcome {
        let cycle_id = self.cycles.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(cycle_id, "starting refresh cycle");
        let result = self.fetch_confirmed().await;
        RefreshOutcome { cycle_id, result }
    }

    async fn fetch_confirmed(&self) -> Result<SheetSnapshot> {
        let first = self.source.fetch_csv().await?;
        let first_hash = blake3::hash(first.as_bytes());

        if !self.confirm_delay.is_zero() {
            tokio::time::sleep(self.confirm_delay).await;
        }

        let second = self.source.fetch_csv().await?;
        let text = if blake3::hash(second.as_bytes()) == first_hash {
            first
        } else {
            debug!("sheet changed between confirmatory fetches, keeping the later snapshot");
            second
        };

        parse_snapshot(&text)
    }
}
