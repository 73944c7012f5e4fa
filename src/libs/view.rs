//! Console tables.

use crate::libs::datetime::format_clock_time;
use crate::libs::event::TimeOfDayBuckets;
use crate::libs::formatter::{ALL_DAY_LABEL, TIME_TBD};
use chrono::TimeZone;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Table of events grouped by part of the day.
    pub fn time_of_day_table<Tz: TimeZone>(buckets: &TimeOfDayBuckets, tz: &Tz) -> Table {
        let mut table = Table::new();

        table.add_row(row!["PART", "START", "END", "TITLE", "LOCATION", "ATTENDEES"]);
        for (time_of_day, events) in buckets.iter() {
            for event in events {
                let (start, end) = if event.is_all_day {
                    (ALL_DAY_LABEL.to_string(), String::new())
                } else {
                    (
                        format_clock_time(&event.start_time, tz).unwrap_or_else(|_| TIME_TBD.to_string()),
                        format_clock_time(&event.end_time, tz).unwrap_or_else(|_| TIME_TBD.to_string()),
                    )
                };
                table.add_row(row![time_of_day, start, end, event.title, event.location, event.attendees]);
            }
        }

        table
    }
}
