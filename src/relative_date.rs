/// "Time ago" labels for recent URL cards
use chrono::{DateTime, NaiveDateTime, Utc};
use std::fmt;

const MS_PER_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;

/// How long ago a record was created, bucketed for display
#[derive(Debug, Clone, PartialEq)]
pub enum RelativeDate {
    Today,
    Yesterday,
    DaysAgo(i64),
    /// Older than a week: shown as a calendar date
    OnDate(DateTime<Utc>),
    /// Timestamp the backend sent but we could not read
    Unknown(String),
}

impl fmt::Display for RelativeDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelativeDate::Today => write!(f, "Today"),
            RelativeDate::Yesterday => write!(f, "Yesterday"),
            RelativeDate::DaysAgo(days) => write!(f, "{} days ago", days),
            RelativeDate::OnDate(date) => write!(f, "{}", date.format("%-m/%-d/%Y")),
            RelativeDate::Unknown(raw) => write!(f, "{}", raw),
        }
    }
}

/// Parse a `created_at` value from the backend
///
/// Accepts RFC 3339 timestamps and the naive ISO form produced by the
/// backend (`2024-10-28T10:30:00.123456`), which is taken as UTC.
pub fn parse_created_at(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

/// Bucket the distance between `created` and `now`
///
/// The day count is the ceiling of the absolute elapsed time in days:
/// 1 is "Today", 2 is "Yesterday", up to 7 is "n - 1 days ago", anything
/// further is a calendar date. A zero distance counts as "Today".
pub fn relative_date(created: DateTime<Utc>, now: DateTime<Utc>) -> RelativeDate {
    let elapsed_ms = (now - created).num_milliseconds().unsigned_abs() as f64;
    let days = (elapsed_ms / MS_PER_DAY).ceil() as i64;

    match days {
        0 | 1 => RelativeDate::Today,
        2 => RelativeDate::Yesterday,
        3..=7 => RelativeDate::DaysAgo(days - 1),
        _ => RelativeDate::OnDate(created),
    }
}

/// Parse and bucket a raw `created_at` string in one step
pub fn describe_created_at(raw: &str, now: DateTime<Utc>) -> RelativeDate {
    match parse_created_at(raw) {
        Some(created) => relative_date(created, now),
        None => RelativeDate::Unknown(raw.to_string()),
    }
}
