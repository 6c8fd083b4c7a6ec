//! Opaque tokens embedded in interaction ids.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

use super::interaction::DELIMITER;

/// Last minted value, used to keep tokens strictly increasing within the process.
static LAST_MINTED: AtomicI64 = AtomicI64::new(0);

/// Opaque token identifying a session vote or staff request.
///
/// Tokens are minted from the current Unix time in milliseconds and never contain the
/// interaction id delimiter, so they round-trip through a button's custom id unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpaqueId(String);

impl OpaqueId {
    /// Mints a new token that is greater than every token previously minted by this process.
    pub fn mint() -> Self {
        let now = Utc::now().timestamp_millis();
        let mut last = LAST_MINTED.load(Ordering::SeqCst);
        loop {
            let next = now.max(last + 1);
            match LAST_MINTED.compare_exchange(last, next, Ordering::SeqCst, Ordering::SeqCst) {
                Ok(_) => return Self(next.to_string()),
                Err(actual) => last = actual,
            }
        }
    }

    /// Accepts an externally supplied token.
    ///
    /// # Returns
    /// - `Some(OpaqueId)` - Token is non-empty and free of the delimiter
    /// - `None` - Token could not be carried inside an interaction id
    pub fn parse(value: &str) -> Option<Self> {
        if value.is_empty() || value.contains(DELIMITER) {
            return None;
        }

        Some(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OpaqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
