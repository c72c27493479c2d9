//! Upstream sheet access

pub mod fetcher;

pub use fetcher::{SheetBody, SheetFetcher};
