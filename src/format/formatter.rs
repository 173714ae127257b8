use chrono::{DateTime, Datelike, FixedOffset, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use icu::locale::Locale;

use crate::domain::{FormatError, Instant};

use super::options::{FieldStyle, FormatOptions};

/// Whether clock times render as "2:30 PM" or "14:30".
///
/// A `-u-hc-*` Unicode extension on the locale tag wins; otherwise English
/// defaults to the 12-hour clock and everything else to the 24-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourCycle {
    H12,
    H23,
}

/// Resolved display zone: a database zone or a fixed offset like "+05:30".
#[derive(Debug, Clone, Copy)]
enum ResolvedZone {
    Iana(Tz),
    Fixed(FixedOffset),
}

/// A configured mapping from an instant to a locale/timezone-specific
/// display string. Cheap to clone; rebuilt whenever the owning context's
/// locale or time zone changes.
#[derive(Debug, Clone)]
pub struct DisplayFormatter {
    locale: Locale,
    hour_cycle: HourCycle,
    zone: ResolvedZone,
    zone_name: String,
    options: FormatOptions,
}

impl DisplayFormatter {
    /// Build a formatter for `(locale, time zone, option set)`.
    ///
    /// The locale must be a well-formed BCP-47 tag and the time zone either
    /// an IANA identifier known to the bundled database or an offset in one
    /// of the `+HH`, `+HHMM`, `+HH:MM` forms.
    pub fn new(
        locale_tag: &str,
        time_zone: &str,
        options: FormatOptions,
    ) -> Result<Self, FormatError> {
        let locale: Locale = locale_tag
            .parse()
            .map_err(|_| FormatError::UnsupportedLocale(locale_tag.to_string()))?;
        let hour_cycle = resolve_hour_cycle(locale_tag, &locale);
        let zone = resolve_zone(time_zone)?;
        let zone_name = match zone {
            ResolvedZone::Iana(tz) => tz.name().to_string(),
            ResolvedZone::Fixed(offset) => offset.to_string(),
        };
        Ok(Self {
            locale,
            hour_cycle,
            zone,
            zone_name,
            options,
        })
    }

    /// Canonical form of the locale this formatter was built with.
    pub fn locale(&self) -> String {
        self.locale.to_string()
    }

    /// Name of the resolved display zone, e.g. "MST7MDT" or "+05:30".
    pub fn time_zone(&self) -> &str {
        &self.zone_name
    }

    pub fn hour_cycle(&self) -> HourCycle {
        self.hour_cycle
    }

    /// Format an instant for display. An unparseable instant renders as its
    /// raw input string.
    pub fn format(&self, instant: &Instant) -> String {
        match instant.utc() {
            Some(utc) => self.format_utc(utc),
            None => instant.iso().to_string(),
        }
    }

    pub fn format_utc(&self, utc: DateTime<Utc>) -> String {
        let fields = match self.zone {
            ResolvedZone::Iana(tz) => Fields::of(utc.with_timezone(&tz)),
            ResolvedZone::Fixed(offset) => Fields::of(utc.with_timezone(&offset)),
        };
        self.render(fields)
    }

    fn render(&self, f: Fields) -> String {
        let mut date = String::new();
        if let Some(style) = self.options.month {
            date.push_str(&month_text(f.month, style));
        }
        if let Some(style) = self.options.day {
            if !date.is_empty() {
                date.push(' ');
            }
            date.push_str(&numeric_text(f.day, style));
        }

        let time = match (self.options.hour, self.options.minute) {
            (Some(_), _) => Some(self.clock_text(f.hour, f.minute)),
            (None, Some(style)) => Some(numeric_text(f.minute, style)),
            (None, None) => None,
        };

        match (date.is_empty(), time) {
            (false, Some(time)) => format!("{date}, {time}"),
            (false, None) => date,
            (true, Some(time)) => time,
            (true, None) => String::new(),
        }
    }

    fn clock_text(&self, hour: u32, minute: u32) -> String {
        match self.hour_cycle {
            HourCycle::H12 => {
                let (display, period) = match hour {
                    0 => (12, "AM"),
                    1..=11 => (hour, "AM"),
                    12 => (12, "PM"),
                    _ => (hour - 12, "PM"),
                };
                format!("{display}:{minute:02} {period}")
            }
            HourCycle::H23 => format!("{hour:02}:{minute:02}"),
        }
    }
}

struct Fields {
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

impl Fields {
    fn of<Z: TimeZone>(dt: DateTime<Z>) -> Self {
        Self {
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
        }
    }
}

fn month_text(month: u32, style: FieldStyle) -> String {
    match style {
        FieldStyle::Short => month_name_short(month).to_string(),
        FieldStyle::Numeric => month.to_string(),
        FieldStyle::TwoDigit => format!("{month:02}"),
    }
}

fn numeric_text(value: u32, style: FieldStyle) -> String {
    match style {
        FieldStyle::TwoDigit => format!("{value:02}"),
        _ => value.to_string(),
    }
}

fn month_name_short(m: u32) -> &'static str {
    match m {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "Jan",
    }
}

fn resolve_hour_cycle(locale_tag: &str, locale: &Locale) -> HourCycle {
    if let Some(hc) = unicode_extension(locale_tag, "hc") {
        return match hc.as_str() {
            "h11" | "h12" => HourCycle::H12,
            _ => HourCycle::H23,
        };
    }
    match locale.id.language.as_str() {
        "en" | "und" => HourCycle::H12,
        _ => HourCycle::H23,
    }
}

/// Extract the value of a `-u-` extension key from a locale tag, e.g.
/// "hc" from "en-US-u-hc-h23".
fn unicode_extension(locale_tag: &str, key: &str) -> Option<String> {
    let u_idx = locale_tag.find("-u-")?;
    let parts: Vec<&str> = locale_tag[u_idx + 3..].split('-').collect();
    for i in 0..parts.len() {
        if parts[i] == key && i + 1 < parts.len() {
            let next = parts[i + 1];
            // Singletons and further keys are 1-2 chars; type values are longer.
            if next.len() <= 2 {
                return None;
            }
            return Some(next.to_string());
        }
    }
    None
}

fn resolve_zone(time_zone: &str) -> Result<ResolvedZone, FormatError> {
    if let Some((h, m)) = parse_offset(time_zone) {
        let total_min = h * 60 + if h < 0 { -m } else { m };
        let offset = FixedOffset::east_opt(total_min * 60)
            .ok_or_else(|| FormatError::UnsupportedTimeZone(time_zone.to_string()))?;
        return Ok(ResolvedZone::Fixed(offset));
    }
    time_zone
        .parse::<Tz>()
        .map(ResolvedZone::Iana)
        .map_err(|_| FormatError::UnsupportedTimeZone(time_zone.to_string()))
}

/// Parse an offset time zone like "+03", "+0300" or "-07:30".
/// Hours: -23..=23, minutes: 0..=59.
fn parse_offset(tz: &str) -> Option<(i32, i32)> {
    if tz.is_empty() {
        return None;
    }
    let (sign, rest) = match tz.as_bytes()[0] {
        b'+' => (1i32, &tz[1..]),
        b'-' => (-1i32, &tz[1..]),
        _ => return None,
    };
    let (h, m) = if rest.len() == 2 {
        let h: i32 = rest.parse().ok()?;
        (h, 0)
    } else if rest.len() == 4 && !rest.contains(':') {
        let h: i32 = rest[..2].parse().ok()?;
        let m: i32 = rest[2..].parse().ok()?;
        (h, m)
    } else if rest.len() == 5 && rest.as_bytes()[2] == b':' {
        let h: i32 = rest[..2].parse().ok()?;
        let m: i32 = rest[3..].parse().ok()?;
        (h, m)
    } else {
        return None;
    };
    if h > 23 || m > 59 {
        return None;
    }
    Some((sign * h, m))
}
