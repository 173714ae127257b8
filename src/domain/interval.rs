use chrono::{DateTime, Utc};

use super::Instant;

/// Half-open time range `[start, end)` used for "currently happening"
/// status. The upper bound is exclusive: a check at the exact end instant is
/// not current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    start: Instant,
    end: Instant,
}

impl Interval {
    pub fn new(start_iso: &str, end_iso: &str) -> Self {
        Self {
            start: Instant::parse(start_iso),
            end: Instant::parse(end_iso),
        }
    }

    pub fn start(&self) -> &Instant {
        &self.start
    }

    pub fn end(&self) -> &Instant {
        &self.end
    }

    /// Whether `at` lies within `[start, end)`. An interval with an
    /// unparseable bound is never current.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        match (self.start.utc(), self.end.utc()) {
            (Some(start), Some(end)) => start <= at && at < end,
            _ => false,
        }
    }

    pub fn is_current_now(&self) -> bool {
        self.contains(Utc::now())
    }
}
