//! Anti-forgery tokens for state-changing form posts.
//!
//! DESIGN
//! ======
//! Tokens are stateless: `<issued_at>.<nonce>.<signature>` where the
//! signature is a SHA-256 digest over the server secret, the issue time and
//! the nonce. Any server instance sharing `SESSION_SECRET` can verify a
//! token without a session store. Tokens expire after `CSRF_MAX_AGE_SECS`.

#[cfg(test)]
#[path = "csrf_test.rs"]
mod csrf_test;

use std::fmt::Write;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use sha2::{Digest, Sha256};

pub const CSRF_MAX_AGE_SECS: u64 = 3600;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CsrfError {
    #[error("csrf token missing")]
    Missing,
    #[error("csrf token malformed")]
    Malformed,
    #[error("csrf token signature mismatch")]
    BadSignature,
    #[error("csrf token expired ({age_secs}s old)")]
    Expired { age_secs: u64 },
}

/// Issues and verifies signed CSRF tokens. Cheap to clone.
#[derive(Clone)]
pub struct CsrfSigner {
    secret: Arc<[u8]>,
    max_age_secs: u64,
}

impl CsrfSigner {
    #[must_use]
    pub fn new(secret: &str) -> Self {
        Self { secret: Arc::from(secret.as_bytes()), max_age_secs: CSRF_MAX_AGE_SECS }
    }

    #[must_use]
    pub fn with_max_age(mut self, max_age_secs: u64) -> Self {
        self.max_age_secs = max_age_secs;
        self
    }

    /// Issue a fresh token stamped with the current time.
    #[must_use]
    pub fn issue(&self) -> String {
        self.issue_at(now_secs())
    }

    pub(crate) fn issue_at(&self, issued_at: u64) -> String {
        let nonce: [u8; 16] = rand::rng().random();
        let nonce = bytes_to_hex(&nonce);
        let signature = self.sign(issued_at, &nonce);
        format!("{issued_at}.{nonce}.{signature}")
    }

    /// Verify a token against the current time.
    ///
    /// # Errors
    ///
    /// Returns [`CsrfError`] when the token is empty, malformed, carries a
    /// signature that does not match, or is older than the configured max age.
    pub fn verify(&self, token: &str) -> Result<(), CsrfError> {
        self.verify_at(token, now_secs())
    }

    pub(crate) fn verify_at(&self, token: &str, now: u64) -> Result<(), CsrfError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(CsrfError::Missing);
        }

        let mut parts = token.splitn(3, '.');
        let (Some(issued_raw), Some(nonce), Some(signature)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(CsrfError::Malformed);
        };
        let issued_at: u64 = issued_raw.parse().map_err(|_| CsrfError::Malformed)?;
        if nonce.is_empty() || !nonce.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CsrfError::Malformed);
        }

        let expected = self.sign(issued_at, nonce);
        if !constant_time_eq(expected.as_bytes(), signature.as_bytes()) {
            return Err(CsrfError::BadSignature);
        }

        let age_secs = now.saturating_sub(issued_at);
        if age_secs > self.max_age_secs {
            return Err(CsrfError::Expired { age_secs });
        }
        Ok(())
    }

    fn sign(&self, issued_at: u64, nonce: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(&self.secret);
        hasher.update(b"|");
        hasher.update(issued_at.to_string().as_bytes());
        hasher.update(b"|");
        hasher.update(nonce.as_bytes());
        bytes_to_hex(&hasher.finalize())
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}
