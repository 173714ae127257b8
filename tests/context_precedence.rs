//! Integration tests for formatting context precedence:
//! explicit override > ambient environment default > fixed fallback.

use lahora::domain::Instant;
use lahora::format::ambient;
use lahora::state::{DateTimeContext, FALLBACK_LOCALE, FALLBACK_TIME_ZONE};

#[test]
fn test_fresh_context_formats_with_the_fallback_pair() {
    let ctx = DateTimeContext::new();
    assert_eq!(ctx.date_time_formatter().locale(), FALLBACK_LOCALE);
    assert_eq!(ctx.date_time_formatter().time_zone(), FALLBACK_TIME_ZONE);
    assert_eq!(ctx.time_formatter().time_zone(), FALLBACK_TIME_ZONE);
}

#[test]
fn test_ambient_defaults_replace_the_fallback() {
    let mut ctx = DateTimeContext::new();
    ctx.ensure_ambient();
    if ctx.generation() > 0 {
        assert_eq!(ctx.date_time_formatter().locale(), ambient::locale());
        assert_eq!(ctx.date_time_formatter().time_zone(), ambient::time_zone());
    } else {
        // Detection produced an unusable pair; the fallback stays active.
        assert_eq!(ctx.date_time_formatter().time_zone(), FALLBACK_TIME_ZONE);
    }

    // A second call is a no-op.
    let generation = ctx.generation();
    ctx.ensure_ambient();
    assert_eq!(ctx.generation(), generation);
}

#[test]
fn test_explicit_override_beats_ambient_in_any_order() {
    // Override first, ambient second.
    let mut ctx = DateTimeContext::new();
    ctx.set_time_zone("UTC").unwrap();
    ctx.ensure_ambient();
    assert_eq!(ctx.time_formatter().time_zone(), "UTC");

    // Ambient first, override second.
    let mut ctx = DateTimeContext::new();
    ctx.ensure_ambient();
    ctx.set_time_zone("UTC").unwrap();
    ctx.set_locale("es-MX").unwrap();
    assert_eq!(ctx.time_formatter().time_zone(), "UTC");
    assert_eq!(ctx.time_formatter().locale(), "es-MX");
}

#[test]
fn test_timezone_switch_changes_the_rendered_string() {
    let mut ctx = DateTimeContext::new();
    let noon = Instant::parse("2024-06-15T12:00:00Z");

    ctx.set_time_zone("MST7MDT").unwrap();
    let mountain = ctx.time_formatter().format(&noon);
    ctx.set_time_zone("UTC").unwrap();
    let utc = ctx.time_formatter().format(&noon);

    assert_ne!(mountain, utc);
    // June is inside DST, so MST7MDT renders at UTC-6.
    assert_eq!(mountain, "6:00 AM");
    assert_eq!(utc, "12:00 PM");
}

#[test]
fn test_formatting_is_idempotent() {
    let ctx = DateTimeContext::new();
    let instant = Instant::parse("2024-01-05T21:30:00Z");
    assert_eq!(
        ctx.date_time_formatter().format(&instant),
        ctx.date_time_formatter().format(&instant)
    );
}
