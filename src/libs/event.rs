//! Calendar event records and their time-of-day grouping.
//!
//! A [`CalendarEvent`] is the already-parsed record delivered by the calendar
//! source. Events are treated as read-only input: formatting and grouping
//! borrow them and never modify them.

use crate::libs::datetime::parse_timestamp;
use chrono::{TimeZone, Timelike};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use tracing::debug;

/// A single meeting or all-day entry for the day.
///
/// On the wire the fields are camelCase (`startTime`, `endTime`, `isAllDay`).
/// Missing or `null` fields fall back to their defaults: an empty title or
/// location, zero attendees, and a timed (not all-day) event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalendarEvent {
    /// Event title. Blank titles are left out of text rendering.
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,

    /// ISO-8601 start timestamp.
    #[serde(deserialize_with = "null_as_default")]
    pub start_time: String,

    /// ISO-8601 end timestamp.
    #[serde(deserialize_with = "null_as_default")]
    pub end_time: String,

    /// Location, empty when the event has none.
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,

    /// Number of attendees; zero means the count is not shown.
    #[serde(deserialize_with = "null_as_default")]
    pub attendees: u32,

    /// Authoritative all-day flag. Rendering trusts it instead of looking at
    /// the timestamps.
    #[serde(deserialize_with = "null_as_default")]
    pub is_all_day: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl CalendarEvent {
    pub fn new(title: &str, start_time: &str, end_time: &str) -> Self {
        CalendarEvent {
            title: title.to_string(),
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            ..Default::default()
        }
    }

    pub fn all_day(title: &str) -> Self {
        CalendarEvent {
            title: title.to_string(),
            is_all_day: true,
            ..Default::default()
        }
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = location.to_string();
        self
    }

    pub fn with_attendees(mut self, attendees: u32) -> Self {
        self.attendees = attendees;
        self
    }

    /// True when the trimmed title is non-empty.
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Part of the day the event belongs to, judged by its start hour in `tz`.
    ///
    /// All-day events are [`TimeOfDay::AllDay`] whatever their timestamps say.
    /// A start time that cannot be parsed counts as afternoon.
    pub fn time_of_day<Tz: TimeZone>(&self, tz: &Tz) -> TimeOfDay {
        if self.is_all_day {
            return TimeOfDay::AllDay;
        }

        match parse_timestamp(&self.start_time, tz) {
            Ok(start) => match start.hour() {
                0..=11 => TimeOfDay::Morning,
                12..=17 => TimeOfDay::Afternoon,
                _ => TimeOfDay::Evening,
            },
            Err(e) => {
                debug!(title = %self.title, error = %e, "unparsable start time, grouping as afternoon");
                TimeOfDay::Afternoon
            }
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    AllDay,
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            TimeOfDay::Morning => "午前",
            TimeOfDay::Afternoon => "午後",
            TimeOfDay::Evening => "夜",
            TimeOfDay::AllDay => "終日",
        };
        write!(f, "{}", label)
    }
}

/// Events partitioned by part of the day.
///
/// Every input event lands in exactly one bucket, and each bucket keeps the
/// input order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TimeOfDayBuckets<'a> {
    pub morning: Vec<&'a CalendarEvent>,
    pub afternoon: Vec<&'a CalendarEvent>,
    pub evening: Vec<&'a CalendarEvent>,
    pub all_day: Vec<&'a CalendarEvent>,
}

impl<'a> TimeOfDayBuckets<'a> {
    pub fn push(&mut self, time_of_day: TimeOfDay, event: &'a CalendarEvent) {
        match time_of_day {
            TimeOfDay::Morning => self.morning.push(event),
            TimeOfDay::Afternoon => self.afternoon.push(event),
            TimeOfDay::Evening => self.evening.push(event),
            TimeOfDay::AllDay => self.all_day.push(event),
        }
    }

    pub fn len(&self) -> usize {
        self.morning.len() + self.afternoon.len() + self.evening.len() + self.all_day.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Buckets in display order, paired with their label.
    pub fn iter(&self) -> impl Iterator<Item = (TimeOfDay, &[&'a CalendarEvent])> {
        [
            (TimeOfDay::Morning, self.morning.as_slice()),
            (TimeOfDay::Afternoon, self.afternoon.as_slice()),
            (TimeOfDay::Evening, self.evening.as_slice()),
            (TimeOfDay::AllDay, self.all_day.as_slice()),
        ]
        .into_iter()
    }
}
