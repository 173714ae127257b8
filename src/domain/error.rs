//! Domain error types for LaHora.
//!
//! Formatter construction is the only fallible operation in the crate;
//! malformed timestamps are displayed as-is rather than reported here.

use thiserror::Error;

/// Errors raised while building a display formatter.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Unsupported locale tag: {0}")]
    UnsupportedLocale(String),

    #[error("Unsupported time zone: {0}")]
    UnsupportedTimeZone(String),
}
