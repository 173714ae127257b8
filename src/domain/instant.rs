use std::fmt;

use chrono::{DateTime, Utc};

/// A single point in time, carried as the original ISO-8601 string plus the
/// parsed UTC instant.
///
/// Parsing never fails: an unparseable string produces an instant that keeps
/// the raw text and has no UTC value, so display code can fall back to
/// rendering the input verbatim. Callers are expected to supply valid
/// RFC 3339 timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instant {
    iso: String,
    parsed: Option<DateTime<Utc>>,
}

impl Instant {
    pub fn parse(iso: &str) -> Self {
        let parsed = DateTime::parse_from_rfc3339(iso)
            .ok()
            .map(|dt| dt.with_timezone(&Utc));
        Self {
            iso: iso.to_string(),
            parsed,
        }
    }

    /// The original machine-readable timestamp string.
    pub fn iso(&self) -> &str {
        &self.iso
    }

    pub fn utc(&self) -> Option<DateTime<Utc>> {
        self.parsed
    }

    pub fn is_valid(&self) -> bool {
        self.parsed.is_some()
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.iso)
    }
}
