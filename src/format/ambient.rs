//! Ambient environment defaults: the host's own time zone and locale.
//!
//! Read once per process activation (after the first interactive frame),
//! never watched for changes.

use icu::locale::Locale;

/// IANA time zone of the host, falling back to UTC.
pub fn time_zone() -> String {
    iana_time_zone::get_timezone().unwrap_or_else(|_| "UTC".to_string())
}

/// BCP-47 locale tag derived from the POSIX locale environment, falling
/// back to en-US.
pub fn locale() -> String {
    for key in ["LC_ALL", "LC_TIME", "LANG"] {
        if let Ok(raw) = std::env::var(key)
            && let Some(tag) = bcp47_from_posix(&raw)
        {
            return tag;
        }
    }
    "en-US".to_string()
}

/// Convert a POSIX locale value like "fr_FR.UTF-8" or "de_DE@euro" into a
/// canonical BCP-47 tag. Returns None for the C/POSIX locales and anything
/// that does not parse as a language tag.
fn bcp47_from_posix(raw: &str) -> Option<String> {
    let base = raw.split('.').next().unwrap_or(raw);
    let base = base.split('@').next().unwrap_or(base);
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    let tag = base.replace('_', "-");
    tag.parse::<Locale>().ok().map(|locale| locale.to_string())
}
