//! Access-gate primitives
//!
//! One consistent scheme: an HMAC-SHA256 signed cookie token plus an IP
//! allowlist checked ahead of it. Expiry is the only termination path
//! for a token; there is no refresh and no revocation list.

pub mod allowlist;
pub mod token;

pub use allowlist::IpAllowlist;
pub use token::{TokenClaims, TokenSigner};
