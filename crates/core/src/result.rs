//! Result alias and logging combinators.
//!
//! UI handlers call transition methods and discard refusals; these helpers
//! keep the refusal visible in the trace output without an `unwrap`.

use crate::error::Error;

/// The standard Result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for Results whose errors are expected and non-fatal.
pub trait ResultExt<T, E> {
    /// Convert to an Option, recording the error at debug level.
    fn ok_logged(self, context: &str) -> Option<T>;

    /// Get the value or a fallback, recording the error at warn level.
    fn or_logged(self, context: &str, fallback: T) -> T;
}

impl<T, E: std::fmt::Display> ResultExt<T, E> for std::result::Result<T, E> {
    fn ok_logged(self, context: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!(%e, "{context}");
                None
            }
        }
    }

    fn or_logged(self, context: &str, fallback: T) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(%e, "{context}, using fallback");
                fallback
            }
        }
    }
}
