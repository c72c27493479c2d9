//! Port interfaces for the refresh cycle
//!
//! These traits define the boundary between core refresh logic and the
//! infrastructure that talks to the upstream sheet.

use async_trait::async_trait;
use irqdash_domain::Result;

/// Trait for fetching the raw CSV snapshot of the upstream sheet
#[async_trait]
pub trait SheetSource: Send + Sync {
    /// Fetch the current CSV body as text.
    async fn fetch_csv(&self) -> Result<String>;
}
