//! Renders the day's calendar events as report text.
//!
//! This module turns a slice of [`CalendarEvent`]s into the Markdown pieces
//! that end up in a daily report: the meetings section, a bare list, a detail
//! block per event, a one-sentence day summary, and a time-of-day grouping.
//!
//! ## Filtering
//!
//! Text rendering (section, list, summary) skips events whose trimmed title
//! is empty. Order is kept as given; nothing is sorted or deduplicated.
//! Grouping by time of day is a separate contract and keeps every event.
//!
//! ## Line Format
//!
//! ```text
//! - 終日: Offsite @ Tokyo (参加者: 5名)
//! - 09:00-10:30: Standup
//! - 時間未定: Planning @ Room A
//! ```
//!
//! ## Degradation
//!
//! A timestamp that cannot be parsed never aborts rendering. The event's time
//! range becomes `時間未定`, its duration is left out of the day total, and it
//! is grouped as afternoon. Each case is logged at debug level.
//!
//! ## Examples
//!
//! ```rust
//! use nippo::libs::event::CalendarEvent;
//! use nippo::libs::formatter::render_report_section;
//!
//! let tz = chrono_tz::Asia::Tokyo;
//! let events = vec![CalendarEvent::all_day("Offsite").with_location("Tokyo")];
//! assert_eq!(
//!     render_report_section(&events, &tz),
//!     "## 本日のMTG予定\n\n- 終日: Offsite @ Tokyo\n\n"
//! );
//! ```

use crate::libs::datetime::{format_clock_time, format_duration, humanize_minutes, minutes_between, DateTimeResult};
use crate::libs::event::{CalendarEvent, TimeOfDayBuckets};
use chrono::TimeZone;
use tracing::debug;

/// Header line of the meetings section in a daily report.
///
/// Also the marker used to find an existing section when the report is
/// updated.
pub const MEETINGS_HEADER: &str = "## 本日のMTG予定";

/// Shown instead of the list when no titled event remains.
pub const NO_MEETINGS_NOTICE: &str = "*予定されたミーティングはありません*";

/// Replaces a time range that could not be parsed.
pub const TIME_TBD: &str = "時間未定";

/// Label used in place of a time range for all-day events.
pub const ALL_DAY_LABEL: &str = "終日";

/// Summary sentence for a day without titled events.
pub const NO_MEETINGS_SUMMARY: &str = "本日は予定されたミーティングはありません。";

fn titled(events: &[CalendarEvent]) -> impl Iterator<Item = &CalendarEvent> {
    events.iter().filter(|event| event.has_title())
}

/// `HH:MM-HH:MM` of a timed event, failing if either end is unparsable.
fn time_range<Tz: TimeZone>(event: &CalendarEvent, tz: &Tz) -> DateTimeResult<(String, String)> {
    Ok((format_clock_time(&event.start_time, tz)?, format_clock_time(&event.end_time, tz)?))
}

/// Time range rendered with a dash, or [`TIME_TBD`].
fn time_range_or_placeholder<Tz: TimeZone>(event: &CalendarEvent, tz: &Tz, separator: &str) -> String {
    match time_range(event, tz) {
        Ok((start, end)) => format!("{}{}{}", start, separator, end),
        Err(e) => {
            debug!(title = %event.title, error = %e, "unparsable event time, using placeholder");
            TIME_TBD.to_string()
        }
    }
}

fn location_suffix(event: &CalendarEvent) -> String {
    if event.location.is_empty() {
        String::new()
    } else {
        format!(" @ {}", event.location)
    }
}

fn attendees_suffix(event: &CalendarEvent) -> String {
    if event.attendees > 0 {
        format!(" (参加者: {}名)", event.attendees)
    } else {
        String::new()
    }
}

/// Renders one event as a Markdown list item.
///
/// All-day events read `- 終日: {title}`, timed events
/// `- {start}-{end}: {title}`, both followed by ` @ {location}` and
/// ` (参加者: {n}名)` when those are present.
pub fn render_event_line<Tz: TimeZone>(event: &CalendarEvent, tz: &Tz) -> String {
    let when = if event.is_all_day {
        ALL_DAY_LABEL.to_string()
    } else {
        time_range_or_placeholder(event, tz, "-")
    };

    format!("- {}: {}{}{}", when, event.title, location_suffix(event), attendees_suffix(event))
}

/// Titled events, one line each, or the no-meetings notice.
pub fn render_event_list<Tz: TimeZone>(events: &[CalendarEvent], tz: &Tz) -> String {
    let lines = titled(events).map(|event| render_event_line(event, tz)).collect::<Vec<_>>();

    if lines.is_empty() {
        NO_MEETINGS_NOTICE.to_string()
    } else {
        lines.join("\n")
    }
}

/// The complete meetings section: header, blank line, list, blank line.
///
/// The result always starts with [`MEETINGS_HEADER`] and ends with a single
/// blank line, so it can be dropped between two other sections as is.
pub fn render_report_section<Tz: TimeZone>(events: &[CalendarEvent], tz: &Tz) -> String {
    format!("{}\n\n{}\n\n", MEETINGS_HEADER, render_event_list(events, tz))
}

/// Multi-line description of a single event.
///
/// ```text
/// **Design review**
/// 時間: 09:00 - 10:30 (1時間30分)
/// 場所: Room A
/// 参加者: 4名
/// ```
///
/// Location and attendee lines are only present when set.
pub fn render_event_detail<Tz: TimeZone>(event: &CalendarEvent, tz: &Tz) -> String {
    let mut details = vec![format!("**{}**", event.title)];

    if event.is_all_day {
        details.push(format!("時間: {}", ALL_DAY_LABEL));
    } else {
        let time = match (time_range(event, tz), format_duration(&event.start_time, &event.end_time, tz)) {
            (Ok((start, end)), Ok(duration)) => format!("{} - {} ({})", start, end, duration),
            _ => {
                debug!(title = %event.title, "unparsable event time in detail, using placeholder");
                TIME_TBD.to_string()
            }
        };
        details.push(format!("時間: {}", time));
    }

    if !event.location.is_empty() {
        details.push(format!("場所: {}", event.location));
    }

    if event.attendees > 0 {
        details.push(format!("参加者: {}名", event.attendees));
    }

    details.join("\n")
}

/// One sentence describing the day's titled events.
///
/// States the event count, then in parentheses the total meeting time of the
/// timed events and, when both kinds exist, the number of all-day events. A
/// day of only all-day events says so instead of reporting zero minutes.
pub fn render_day_summary<Tz: TimeZone>(events: &[CalendarEvent], tz: &Tz) -> String {
    let (all_day, timed): (Vec<&CalendarEvent>, Vec<&CalendarEvent>) = titled(events).partition(|event| event.is_all_day);
    let total = all_day.len() + timed.len();

    if total == 0 {
        return NO_MEETINGS_SUMMARY.to_string();
    }

    let mut summary = format!("本日は{}件のイベントが予定されています", total);

    if !timed.is_empty() {
        let minutes = timed
            .iter()
            .filter_map(|event| match minutes_between(&event.start_time, &event.end_time, tz) {
                Ok(minutes) => Some(minutes),
                Err(e) => {
                    debug!(title = %event.title, error = %e, "skipping unparsable event in meeting total");
                    None
                }
            })
            .sum::<i64>();

        summary.push_str(&format!("（ミーティング時間: {}", humanize_minutes(minutes)));
        if !all_day.is_empty() {
            summary.push_str(&format!("、終日イベント: {}件", all_day.len()));
        }
        summary.push('）');
    } else {
        summary.push_str("（すべて終日イベント）");
    }

    summary.push('。');
    summary
}

/// Splits all events, titled or not, into morning, afternoon, evening and
/// all-day groups.
pub fn bucket_by_time_of_day<'a, Tz: TimeZone>(events: &'a [CalendarEvent], tz: &Tz) -> TimeOfDayBuckets<'a> {
    events.iter().fold(TimeOfDayBuckets::default(), |mut buckets, event| {
        buckets.push(event.time_of_day(tz), event);
        buckets
    })
}
