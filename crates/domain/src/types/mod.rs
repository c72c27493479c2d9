//! Domain data types for sales and turf tracking

pub mod context;
pub mod report;
pub mod sales;
pub mod turf;

pub use context::*;
pub use report::*;
pub use sales::*;
pub use turf::*;
