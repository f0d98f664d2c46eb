//! Shared helpers for point validation.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse an upstream timestamp into a calendar date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps, and naive `YYYY-MM-DDTHH:MM:SS`
/// / `YYYY-MM-DD HH:MM:SS` datetimes. For the timestamp forms only the
/// date part (in the offset it was written in) is kept.
///
/// ```
/// use cruscotto_core::parse_calendar_date;
/// use chrono::NaiveDate;
///
/// let d = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// assert_eq!(parse_calendar_date("2024-03-01"), Some(d));
/// assert_eq!(parse_calendar_date("2024-03-01T16:00:00-05:00"), Some(d));
/// assert_eq!(parse_calendar_date("2024-02-30"), None);
/// assert_eq!(parse_calendar_date("yesterday"), None);
/// ```
#[must_use]
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

/// Return the parsed date and value of a well-formed point.
///
/// A point is well-formed iff its timestamp is present and parses to a
/// calendar date, and its value is present and finite.
///
/// ```
/// use cruscotto_core::validate_point;
///
/// assert!(validate_point(Some("2024-03-01"), Some(150.23)).is_some());
/// assert!(validate_point(None, Some(150.23)).is_none());
/// assert!(validate_point(Some("2024-03-01"), Some(f64::NAN)).is_none());
/// ```
#[must_use]
pub fn validate_point(timestamp: Option<&str>, value: Option<f64>) -> Option<(NaiveDate, f64)> {
    let v = value.filter(|v| v.is_finite())?;
    let d = parse_calendar_date(timestamp?)?;
    Some((d, v))
}
