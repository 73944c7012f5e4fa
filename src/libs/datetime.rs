//! Date and time helpers used by calendar event rendering.
//!
//! Every timestamp that reaches the report goes through this module. Inputs
//! are ISO-8601 strings as delivered by the calendar source; outputs are
//! fixed-format display strings (Gregorian calendar, 24-hour clock,
//! zero-padded fields) so the rendered report is byte-identical regardless
//! of the host locale.
//!
//! ## Time zones
//!
//! Functions that display or classify a timestamp take the display zone as a
//! parameter. The zone embedded in the source string only determines the
//! instant; hours and minutes are always read in the display zone. Strings
//! without an offset are interpreted as wall-clock time in the display zone.
//!
//! Functions about "today" (`current_*`, [`is_same_calendar_day`]) use the
//! host's local calendar rather than UTC, so a user west of UTC does not see
//! yesterday's date shortly before midnight.
//!
//! ## Errors
//!
//! Parsing is explicit: [`parse_timestamp`] returns a [`DateTimeResult`], and
//! every formatting function propagates it. Callers that must not fail (the
//! event formatter) decide locally how to degrade.
//!
//! ## Examples
//!
//! ```rust
//! use nippo::libs::datetime::{format_clock_time, format_duration};
//!
//! let tz = chrono_tz::Asia::Tokyo;
//! assert_eq!(format_clock_time("2024-01-15T00:00:00Z", &tz).unwrap(), "09:00");
//! assert_eq!(
//!     format_duration("2024-01-15T09:00:00+09:00", "2024-01-15T10:30:00+09:00", &tz).unwrap(),
//!     "1時間30分"
//! );
//! ```

use chrono::{DateTime, Datelike, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Timelike, Utc};
use thiserror::Error;

/// Zone used when the host time zone cannot be determined.
pub const FALLBACK_TIME_ZONE: &str = "Asia/Tokyo";

/// Wall-clock layouts accepted when the input carries no offset.
const NAIVE_FORMATS: [&str; 4] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];

/// Offset-bearing layouts that RFC 3339 parsing does not cover.
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%:z"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateTimeError {
    #[error("Invalid date-time: '{input}'")]
    Parse { input: String },

    #[error("Local time does not exist in the display time zone")]
    NonexistentLocalTime,

    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),
}

pub type DateTimeResult<T> = Result<T, DateTimeError>;

/// Parses an ISO-8601 timestamp into the display zone.
///
/// Accepted shapes:
/// - RFC 3339 (`2024-01-15T09:00:00+09:00`, `2024-01-15T00:00:00.000Z`)
/// - offset without colon or without seconds (`...T09:00:00+0900`, `...T09:00+09:00`)
/// - wall-clock time without offset, read in `tz` (`2024-01-15T09:00`)
/// - a bare date, read as midnight in `tz` (`2024-01-15`)
///
/// Ambiguous wall-clock times (DST fall-back) resolve to the earlier instant.
pub fn parse_timestamp<Tz: TimeZone>(input: &str, tz: &Tz) -> DateTimeResult<DateTime<Tz>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(tz));
    }
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(input, format) {
            return Ok(dt.with_timezone(tz));
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return resolve_local(tz, &naive);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return resolve_local(tz, &naive);
        }
    }

    Err(DateTimeError::Parse { input: input.to_string() })
}

fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: &NaiveDateTime) -> DateTimeResult<DateTime<Tz>> {
    match tz.from_local_datetime(naive) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => Err(DateTimeError::NonexistentLocalTime),
    }
}

/// `YYYY-MM-DD` for a calendar date.
pub fn date_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// `YYYY-MM-DD` for today, taken from the local calendar.
pub fn current_date_key() -> String {
    date_key(Local::now().date_naive())
}

/// UTC instants (RFC 3339, millisecond precision) for 00:00:00.000 and
/// 23:59:59.999 of `date` in `tz`.
///
/// Used as the query range sent to the calendar source.
pub fn day_bounds<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> DateTimeResult<(String, String)> {
    let bound = |h, m, s, ms| -> DateTimeResult<String> {
        let naive = date.and_hms_milli_opt(h, m, s, ms).ok_or(DateTimeError::NonexistentLocalTime)?;
        let local = resolve_local(tz, &naive)?;
        Ok(local.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::Millis, true))
    };
    Ok((bound(0, 0, 0, 0)?, bound(23, 59, 59, 999)?))
}

/// Start of the current local day as a UTC instant.
pub fn current_day_start() -> DateTimeResult<String> {
    Ok(day_bounds(Local::now().date_naive(), &Local)?.0)
}

/// End of the current local day (23:59:59.999) as a UTC instant.
pub fn current_day_end() -> DateTimeResult<String> {
    Ok(day_bounds(Local::now().date_naive(), &Local)?.1)
}

/// `HH:MM` (24-hour, zero-padded) of `iso` in the display zone.
pub fn format_clock_time<Tz: TimeZone>(iso: &str, tz: &Tz) -> DateTimeResult<String> {
    let dt = parse_timestamp(iso, tz)?;
    Ok(format!("{:02}:{:02}", dt.hour(), dt.minute()))
}

/// `YYYY/MM/DD` of `iso` in the display zone.
pub fn format_calendar_date<Tz: TimeZone>(iso: &str, tz: &Tz) -> DateTimeResult<String> {
    let dt = parse_timestamp(iso, tz)?;
    Ok(format!("{:04}/{:02}/{:02}", dt.year(), dt.month(), dt.day()))
}

/// `YYYY/MM/DD HH:MM` of `iso` in the display zone.
pub fn format_date_time<Tz: TimeZone>(iso: &str, tz: &Tz) -> DateTimeResult<String> {
    let dt = parse_timestamp(iso, tz)?;
    Ok(format!(
        "{:04}/{:02}/{:02} {:02}:{:02}",
        dt.year(),
        dt.month(),
        dt.day(),
        dt.hour(),
        dt.minute()
    ))
}

/// Whole minutes from `start` to `end`, rounded half-up.
///
/// Negative when `end` precedes `start`; the value is never clamped.
pub fn minutes_between<Tz: TimeZone>(start: &str, end: &str, tz: &Tz) -> DateTimeResult<i64> {
    let start = parse_timestamp(start, tz)?;
    let end = parse_timestamp(end, tz)?;
    let millis = end.signed_duration_since(start).num_milliseconds();
    Ok((millis + 30_000).div_euclid(60_000))
}

/// Renders a minute count as `{H}時間{M}分`, `{H}時間` or `{M}分`.
///
/// Counts below one hour, including zero and negative counts, use the
/// minutes-only form.
pub fn humanize_minutes(minutes: i64) -> String {
    if minutes >= 60 {
        let (hours, rest) = (minutes / 60, minutes % 60);
        if rest > 0 {
            format!("{}時間{}分", hours, rest)
        } else {
            format!("{}時間", hours)
        }
    } else {
        format!("{}分", minutes)
    }
}

/// Humanized length of the span from `start` to `end`.
pub fn format_duration<Tz: TimeZone>(start: &str, end: &str, tz: &Tz) -> DateTimeResult<String> {
    minutes_between(start, end, tz).map(humanize_minutes)
}

/// Whether `iso` falls on today's local calendar day. Unparsable input is
/// never today.
pub fn is_same_calendar_day(iso: &str) -> bool {
    is_on_day(iso, Local::now().date_naive(), &Local)
}

/// Whether `iso`, read in `tz`, falls on `day`.
pub fn is_on_day<Tz: TimeZone>(iso: &str, day: NaiveDate, tz: &Tz) -> bool {
    parse_timestamp(iso, tz).map(|dt| dt.date_naive() == day).unwrap_or(false)
}

/// Derives the all-day shape from the timestamps alone: both ends at
/// midnight in `tz` and a span of at least 24 hours.
///
/// Independent of any `is_all_day` flag carried by the event.
pub fn classify_all_day<Tz: TimeZone>(start: &str, end: &str, tz: &Tz) -> DateTimeResult<bool> {
    let start = parse_timestamp(start, tz)?;
    let end = parse_timestamp(end, tz)?;
    let at_midnight = |dt: &DateTime<Tz>| dt.hour() == 0 && dt.minute() == 0;

    Ok(at_midnight(&start) && at_midnight(&end) && end.signed_duration_since(start) >= Duration::hours(24))
}

/// IANA name of the host time zone, or [`FALLBACK_TIME_ZONE`].
pub fn resolve_display_time_zone() -> String {
    iana_time_zone::get_timezone().unwrap_or_else(|_| FALLBACK_TIME_ZONE.to_string())
}

/// Looks up an IANA zone by name.
pub fn display_zone(name: &str) -> DateTimeResult<chrono_tz::Tz> {
    name.trim().parse::<chrono_tz::Tz>().map_err(|_| DateTimeError::UnknownTimeZone(name.to_string()))
}
