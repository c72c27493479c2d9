//! # IrqDash Server
//!
//! The axum binary crate: HTTP routes, the access-gate middleware, and
//! application context wiring. All business logic lives in
//! `irqdash-core`; handlers here translate HTTP in and out of it.

pub mod context;
pub mod gate;
pub mod routes;

pub use context::AppContext;
pub use routes::router;
