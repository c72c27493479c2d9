//! # IrqDash Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Configuration loading (environment + file fallback)
//! - The HTTP client and upstream sheet fetcher
//! - Access-gate primitives (signed tokens, IP allowlist)
//!
//! ## Architecture
//! - Implements traits defined in `irqdash-core`
//! - Depends on `irqdash-domain` and `irqdash-core`
//! - Contains all "impure" code (I/O, clocks, network)

pub mod auth;
pub mod config;
pub mod errors;
pub mod http;
pub mod sheet;

// Re-export commonly used items
pub use auth::{IpAllowlist, TokenSigner};
pub use errors::InfraError;
pub use http::HttpClient;
pub use sheet::SheetFetcher;
