//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Authentication
pub const AUTH_COOKIE_NAME: &str = "irq_auth";
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

// Turf grid columns (zero-based, spreadsheet columns M-P)
pub const COL_TURF_REP: usize = 12;
pub const COL_TURF_DATE: usize = 13;
pub const COL_TURF_NAME: usize = 14;
pub const COL_TURF_COUNT: usize = 15;

// Turf rotation rules
pub const VISIT_COOLDOWN_DAYS: i64 = 21;
pub const GUARDRAIL_WINDOW_WEEKS: i64 = 12;
pub const GUARDRAIL_MAX_STREAK: usize = 2;
pub const IDLE_TURF_THRESHOLD_WEEKS: i64 = 4;

// Refresh cycle
pub const CONFIRM_FETCH_DELAY_MS: u64 = 1500;
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 300;
