//! Signed authentication tokens
//!
//! Token format: `base64url(payload).hex(signature)` where the payload is
//! JSON `{username, expiry}` and the signature is HMAC-SHA256 over the
//! encoded payload. Validity is the signature check plus the expiry
//! timestamp; nothing else.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use irqdash_domain::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// The signed token payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub username: String,
    /// Unix timestamp (seconds) after which the token is dead.
    pub expiry: i64,
}

/// Signs and verifies `irq_auth` cookie tokens.
#[derive(Clone)]
pub struct TokenSigner {
    secret: Vec<u8>,
}

impl TokenSigner {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self { secret: secret.as_ref().to_vec() }
    }

    /// Issue a token for `username` valid for `ttl_hours` from `now`.
    ///
    /// # Errors
    /// Returns `DashboardError::Auth` if the payload cannot be encoded.
    pub fn sign(&self, username: &str, ttl_hours: i64, now: DateTime<Utc>) -> Result<String> {
        let claims = TokenClaims {
            username: username.to_string(),
            expiry: (now + Duration::hours(ttl_hours)).timestamp(),
        };
        let payload = serde_json::to_vec(&claims)
            .map_err(|e| DashboardError::Auth(format!("failed to encode token payload: {e}")))?;
        let encoded = URL_SAFE_NO_PAD.encode(payload);

        let mac = self.mac()?.chain_update(encoded.as_bytes()).finalize();
        Ok(format!("{}.{}", encoded, hex::encode(mac.into_bytes())))
    }

    /// Verify a token against `now`, returning its claims.
    ///
    /// # Errors
    /// Returns `DashboardError::Auth` on any malformed, tampered, or
    /// expired token.
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims> {
        let (encoded, signature_hex) = token
            .split_once('.')
            .ok_or_else(|| DashboardError::Auth("malformed token".to_string()))?;

        let signature = hex::decode(signature_hex)
            .map_err(|_| DashboardError::Auth("malformed token signature".to_string()))?;

        self.mac()?
            .chain_update(encoded.as_bytes())
            .verify_slice(&signature)
            .map_err(|_| DashboardError::Auth("token signature mismatch".to_string()))?;

        let payload = URL_SAFE_NO_PAD
            .decode(encoded)
            .map_err(|_| DashboardError::Auth("malformed token payload".to_string()))?;
        let claims: TokenClaims = serde_json::from_slice(&payload)
            .map_err(|_| DashboardError::Auth("unreadable token payload".to_string()))?;

        if claims.expiry <= now.timestamp() {
            return Err(DashboardError::Auth("token expired".to_string()));
        }

        Ok(claims)
    }

    fn mac(&self) -> Result<HmacSha256> {
        HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| DashboardError::Auth(format!("invalid signing key: {e}")))
    }
}
