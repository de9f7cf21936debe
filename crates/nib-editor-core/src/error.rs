//! Error type for platform operations.
//!
//! Model operations never fail - the edit taxonomy is "no-op" and "clamp to
//! nearest valid state". The only fallible surface is the platform seam,
//! where DOM lookups can legitimately miss.

use thiserror::Error;

/// Error from a platform operation (element lookup, listener wiring).
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct PlatformError(pub String);

impl From<&str> for PlatformError {
    fn from(s: &str) -> Self {
        PlatformError(s.to_string())
    }
}

impl From<String> for PlatformError {
    fn from(s: String) -> Self {
        PlatformError(s)
    }
}
