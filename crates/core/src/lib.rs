//! # IrqDash Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Row normalization (CSV rows into canonical sales/turf records)
//! - Sales aggregation (company, per-rep, per-product rollups)
//! - Turf rotation analysis (suggestions, guardrails, distribution)
//! - Refresh-cycle coordination (confirmatory double fetch, stale
//!   suppression)
//!
//! ## Architecture Principles
//! - Only depends on `irqdash-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod aggregate;
pub mod ingest;
pub mod refresh;
pub mod turf;

// Re-export specific items to avoid ambiguity
pub use aggregate::build_report;
pub use ingest::{parse_snapshot, SheetSnapshot};
pub use refresh::ports::SheetSource;
pub use refresh::{DashboardState, RefreshOutcome, RefreshService};
pub use turf::analyze_turf;
