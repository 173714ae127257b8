//! Shared formatting state passed explicitly to the display widgets.

pub mod watcher;

use crate::domain::FormatError;
use crate::format::{ambient, options, DisplayFormatter};

/// Locale used for deterministic output before the ambient environment has
/// been read (and whenever detection fails).
pub const FALLBACK_LOCALE: &str = "en-US";

/// Time zone paired with [`FALLBACK_LOCALE`] for deterministic output.
pub const FALLBACK_TIME_ZONE: &str = "MST7MDT";

/// The shared formatting context: two ready-to-use formatters plus the
/// locale/timezone configuration they were built from.
///
/// Precedence when resolving the effective pair is explicit override >
/// ambient environment default > fixed fallback. A fresh context uses the
/// fallback pair so non-interactive output is deterministic;
/// [`DateTimeContext::ensure_ambient`] switches to the host's own
/// locale/timezone exactly once, at the top of the first interactive frame.
pub struct DateTimeContext {
    locale_override: Option<String>,
    time_zone_override: Option<String>,
    ambient: Option<(String, String)>,
    date_time: DisplayFormatter,
    time: DisplayFormatter,
    generation: u64,
}

impl Default for DateTimeContext {
    fn default() -> Self {
        Self::new()
    }
}

impl DateTimeContext {
    pub fn new() -> Self {
        let date_time = DisplayFormatter::new(FALLBACK_LOCALE, FALLBACK_TIME_ZONE, options::DATE_TIME)
            .expect("fallback formatter");
        let time = DisplayFormatter::new(FALLBACK_LOCALE, FALLBACK_TIME_ZONE, options::TIME_ONLY)
            .expect("fallback formatter");
        Self {
            locale_override: None,
            time_zone_override: None,
            ambient: None,
            date_time,
            time,
            generation: 0,
        }
    }

    /// One-time switch from the fixed fallback to the host's own
    /// locale/timezone. Call before producing the first interactive frame;
    /// later calls are no-ops.
    pub fn ensure_ambient(&mut self) {
        if self.ambient.is_some() {
            return;
        }
        let pair = (ambient::locale(), ambient::time_zone());
        log::debug!("ambient defaults: locale={} tz={}", pair.0, pair.1);
        self.ambient = Some(pair);
        if let Err(err) = self.rebuild() {
            log::warn!("ambient defaults rejected, keeping previous formatters: {err}");
        }
    }

    /// Explicitly pin the locale, taking precedence over the ambient
    /// default. On error the previous configuration stays active.
    pub fn set_locale(&mut self, tag: &str) -> Result<(), FormatError> {
        let previous = self.locale_override.replace(tag.to_string());
        if let Err(err) = self.rebuild() {
            self.locale_override = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Explicitly pin the time zone, taking precedence over the ambient
    /// default. On error the previous configuration stays active.
    pub fn set_time_zone(&mut self, zone: &str) -> Result<(), FormatError> {
        let previous = self.time_zone_override.replace(zone.to_string());
        if let Err(err) = self.rebuild() {
            self.time_zone_override = previous;
            return Err(err);
        }
        Ok(())
    }

    pub fn date_time_formatter(&self) -> &DisplayFormatter {
        &self.date_time
    }

    pub fn time_formatter(&self) -> &DisplayFormatter {
        &self.time
    }

    /// Incremented on every successful rebuild so views can detect
    /// formatter changes cheaply.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn effective(&self) -> (String, String) {
        let locale = self
            .locale_override
            .clone()
            .or_else(|| self.ambient.as_ref().map(|(locale, _)| locale.clone()))
            .unwrap_or_else(|| FALLBACK_LOCALE.to_string());
        let time_zone = self
            .time_zone_override
            .clone()
            .or_else(|| self.ambient.as_ref().map(|(_, zone)| zone.clone()))
            .unwrap_or_else(|| FALLBACK_TIME_ZONE.to_string());
        (locale, time_zone)
    }

    fn rebuild(&mut self) -> Result<(), FormatError> {
        let (locale, time_zone) = self.effective();
        let date_time = DisplayFormatter::new(&locale, &time_zone, options::DATE_TIME)?;
        let time = DisplayFormatter::new(&locale, &time_zone, options::TIME_ONLY)?;
        self.date_time = date_time;
        self.time = time;
        self.generation += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Instant;

    #[test]
    fn test_fresh_context_uses_fallback_pair() {
        let ctx = DateTimeContext::new();
        assert_eq!(ctx.date_time_formatter().locale(), "en-US");
        assert_eq!(ctx.date_time_formatter().time_zone(), "MST7MDT");
        assert_eq!(ctx.time_formatter().time_zone(), "MST7MDT");
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let ctx = DateTimeContext::new();
        let instant = Instant::parse("2024-01-05T21:30:00Z");
        let first = ctx.date_time_formatter().format(&instant);
        let second = ctx.date_time_formatter().format(&instant);
        assert_eq!(first, second);
    }

    #[test]
    fn test_time_zone_switch_changes_output() {
        let mut ctx = DateTimeContext::new();
        let noon = Instant::parse("2024-06-15T12:00:00Z");
        let under_fallback = ctx.time_formatter().format(&noon);
        ctx.set_time_zone("UTC").unwrap();
        let under_utc = ctx.time_formatter().format(&noon);
        assert_ne!(under_fallback, under_utc);
        assert_eq!(under_utc, "12:00 PM");
    }

    #[test]
    fn test_rejected_override_keeps_previous_configuration() {
        let mut ctx = DateTimeContext::new();
        let generation = ctx.generation();
        assert!(ctx.set_time_zone("Mars/Olympus_Mons").is_err());
        assert_eq!(ctx.generation(), generation);
        assert_eq!(ctx.time_formatter().time_zone(), "MST7MDT");
        // A later valid override still works.
        ctx.set_time_zone("UTC").unwrap();
        assert_eq!(ctx.time_formatter().time_zone(), "UTC");
    }

    #[test]
    fn test_explicit_override_beats_ambient() {
        let mut ctx = DateTimeContext::new();
        ctx.set_time_zone("UTC").unwrap();
        ctx.set_locale("fr-FR").unwrap();
        ctx.ensure_ambient();
        assert_eq!(ctx.time_formatter().time_zone(), "UTC");
        assert_eq!(ctx.time_formatter().locale(), "fr-FR");
    }
}
