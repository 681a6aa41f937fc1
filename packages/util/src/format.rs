//! Date, latency and number formatting.
//!
//! All date-accepting functions take anything convertible to
//! [`DateInput`] and return the literal [`INVALID_DATE`] string for
//! unparsable input instead of erroring. Number formatting follows en-US
//! conventions (comma thousands grouping, `.` decimal point).

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Fallback output for any unparsable date input.
pub const INVALID_DATE: &str = "Invalid Date";

/// A date given as a timestamp, a text form, or an already-parsed value.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// Milliseconds since the Unix epoch.
    Timestamp(i64),
    /// A textual date: RFC 3339, `YYYY-MM-DD HH:MM:SS`, or `YYYY-MM-DD`.
    Text(String),
    /// An already-parsed instant.
    DateTime(DateTime<Utc>),
}

impl From<i64> for DateInput {
    fn from(millis: i64) -> Self {
        DateInput::Timestamp(millis)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(value: DateTime<Utc>) -> Self {
        DateInput::DateTime(value)
    }
}

fn resolve(input: DateInput) -> Option<DateTime<Utc>> {
    match input {
        DateInput::DateTime(value) => Some(value),
        DateInput::Timestamp(millis) => Utc.timestamp_millis_opt(millis).single(),
        DateInput::Text(text) => {
            let text = text.trim();
            if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
                return Some(parsed.with_timezone(&Utc));
            }
            for pattern in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
                if let Ok(parsed) = NaiveDateTime::parse_from_str(text, pattern) {
                    return Some(parsed.and_utc());
                }
            }
            if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
                return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
            }
            None
        }
    }
}

/// Format a date as `"Jan 05, 2026"`.
pub fn format_date(value: impl Into<DateInput>) -> String {
    match resolve(value.into()) {
        Some(date) => date.format("%b %d, %Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Format a date with its time as `"Jan 05, 2026, 13:45"` (24-hour).
pub fn format_date_time(value: impl Into<DateInput>) -> String {
    match resolve(value.into()) {
        Some(date) => date.format("%b %d, %Y, %H:%M").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Format a date relative to the current instant (`"5 minutes ago"`).
pub fn format_relative_time(value: impl Into<DateInput>) -> String {
    format_relative_time_at(value, Utc::now())
}

/// Format a date relative to an explicit reference instant.
pub fn format_relative_time_at(value: impl Into<DateInput>, now: DateTime<Utc>) -> String {
    let Some(then) = resolve(value.into()) else {
        return INVALID_DATE.to_string();
    };

    let delta = now.signed_duration_since(then);
    let future = delta < chrono::Duration::zero();
    let secs = delta.num_seconds().abs();

    if secs < 60 {
        return if future {
            "in a few seconds".to_string()
        } else {
            "just now".to_string()
        };
    }

    let (count, unit) = if secs < 3_600 {
        (secs / 60, "minute")
    } else if secs < 86_400 {
        (secs / 3_600, "hour")
    } else if secs < 30 * 86_400 {
        (secs / 86_400, "day")
    } else if secs < 365 * 86_400 {
        (secs / (30 * 86_400), "month")
    } else {
        (secs / (365 * 86_400), "year")
    };

    let plural = if count == 1 { "" } else { "s" };
    if future {
        format!("in {} {}{}", count, unit, plural)
    } else {
        format!("{} {}{} ago", count, unit, plural)
    }
}

/// Format a latency in milliseconds.
///
/// Values of a second or more render in seconds with exactly one fraction
/// digit (`"1.5s"`); smaller values render in milliseconds with up to
/// three fraction digits (`"750ms"`, `"0.125ms"`).
pub fn format_latency(ms: f64) -> String {
    if ms >= 1000.0 {
        format!("{}s", format_grouped(ms / 1000.0, 1, 1))
    } else {
        format!("{}ms", format_grouped(ms, 0, 3))
    }
}

/// Format a millisecond count with en-US grouping (`"1,234.5"`).
pub fn format_milliseconds(value: f64) -> String {
    format_grouped(value, 0, 3)
}

/// Format a count compactly: `999` → `"999"`, `1500` → `"1.5k"`,
/// `2_500_000` → `"2.5M"`.
pub fn format_compact_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1000.0 {
        format!("{:.1}k", value / 1000.0)
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Fixed-point formatting with thousands grouping.
///
/// Rounds to `max_frac` digits, trims trailing zeros down to `min_frac`,
/// and groups integer digits in threes.
fn format_grouped(value: f64, min_frac: usize, max_frac: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let negative = value < 0.0;
    let magnitude = value.abs();
    // Past this scale f64 can't hold exact integers anyway.
    if magnitude >= 1e15 {
        return value.to_string();
    }

    let scale = 10u64.pow(max_frac as u32);
    let scaled = (magnitude * scale as f64).round() as u64;
    let int_part = scaled / scale;

    let mut frac = if max_frac == 0 {
        String::new()
    } else {
        format!("{:0width$}", scaled % scale, width = max_frac)
    };
    while frac.len() > min_frac && frac.ends_with('0') {
        frac.pop();
    }

    let mut out = String::new();
    if negative && (int_part > 0 || !frac.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(&frac);
    }
    out
}

fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
