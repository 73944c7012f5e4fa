#[cfg(test)]
mod tests {
    use chrono::{Local, NaiveDate, Utc};
    use chrono_tz::Asia::Tokyo;
    use nippo::libs::datetime::{
        classify_all_day, current_date_key, current_day_end, current_day_start, date_key, day_bounds, display_zone, format_calendar_date,
        format_clock_time, format_date_time, format_duration, humanize_minutes, is_on_day, is_same_calendar_day, minutes_between,
        parse_timestamp, resolve_display_time_zone, DateTimeError,
    };

    /// Reads `{H}時間{M}分`, `{H}時間` or `{M}分` back into minutes.
    fn parse_humanized(text: &str) -> i64 {
        let (hours, rest) = match text.split_once("時間") {
            Some((hours, rest)) => (hours.parse::<i64>().unwrap(), rest),
            None => (0, text),
        };
        let minutes = match rest.strip_suffix('分') {
            Some(minutes) => minutes.parse::<i64>().unwrap(),
            None => 0,
        };
        hours * 60 + minutes
    }

    #[test]
    fn test_clock_time_uses_display_zone() {
        assert_eq!(format_clock_time("2024-01-15T00:00:00Z", &Tokyo).unwrap(), "09:00");
        assert_eq!(format_clock_time("2024-01-15T09:05:00+09:00", &Tokyo).unwrap(), "09:05");
        assert_eq!(format_clock_time("2024-01-15T09:00:00+09:00", &Utc).unwrap(), "00:00");
    }

    #[test]
    fn test_clock_time_accepted_shapes() {
        assert_eq!(format_clock_time("2024-01-15T00:00:00.000Z", &Tokyo).unwrap(), "09:00");
        assert_eq!(format_clock_time("2024-01-15T09:30:00+0900", &Tokyo).unwrap(), "09:30");
        assert_eq!(format_clock_time("2024-01-15T09:30+09:00", &Tokyo).unwrap(), "09:30");
        assert_eq!(format_clock_time("2024-01-15T18:30", &Tokyo).unwrap(), "18:30");
        assert_eq!(format_clock_time("2024-01-15 07:45", &Tokyo).unwrap(), "07:45");
        assert_eq!(format_clock_time("2024-01-15", &Tokyo).unwrap(), "00:00");
    }

    #[test]
    fn test_clock_time_invalid_input() {
        assert_eq!(
            format_clock_time("not-a-date", &Tokyo),
            Err(DateTimeError::Parse {
                input: "not-a-date".to_string()
            })
        );
        assert!(format_clock_time("", &Tokyo).is_err());
        assert!(format_clock_time("2024-13-40T25:00:00Z", &Tokyo).is_err());
    }

    #[test]
    fn test_nonexistent_local_time() {
        let new_york = display_zone("America/New_York").unwrap();
        // Clocks jump from 02:00 to 03:00 on this day.
        assert_eq!(parse_timestamp("2024-03-10T02:30", &new_york), Err(DateTimeError::NonexistentLocalTime));
    }

    #[test]
    fn test_calendar_date_and_date_time() {
        assert_eq!(format_calendar_date("2024-01-15T20:00:00Z", &Tokyo).unwrap(), "2024/01/16");
        assert_eq!(format_calendar_date("2024-01-15T20:00:00Z", &Utc).unwrap(), "2024/01/15");
        assert_eq!(format_date_time("2024-01-15T20:00:00Z", &Tokyo).unwrap(), "2024/01/16 05:00");
        assert!(format_date_time("yesterday", &Tokyo).is_err());
    }

    #[test]
    fn test_minutes_between() {
        assert_eq!(minutes_between("2024-01-15T09:00:00+09:00", "2024-01-15T10:30:00+09:00", &Tokyo).unwrap(), 90);
        assert_eq!(minutes_between("2024-01-15T00:00:00Z", "2024-01-15T10:00:00+09:00", &Tokyo).unwrap(), 60);
        assert_eq!(minutes_between("2024-01-15T10:00:00+09:00", "2024-01-15T09:30:00+09:00", &Tokyo).unwrap(), -30);
        assert!(minutes_between("2024-01-15T10:00:00+09:00", "later", &Tokyo).is_err());
    }

    #[test]
    fn test_minutes_between_rounds_half_up() {
        let start = "2024-01-15T09:00:00Z";
        assert_eq!(minutes_between(start, "2024-01-15T09:00:29.999Z", &Utc).unwrap(), 0);
        assert_eq!(minutes_between(start, "2024-01-15T09:00:30Z", &Utc).unwrap(), 1);
        assert_eq!(minutes_between(start, "2024-01-15T09:01:29Z", &Utc).unwrap(), 1);
        assert_eq!(minutes_between(start, "2024-01-15T08:59:30Z", &Utc).unwrap(), 0);
        assert_eq!(minutes_between(start, "2024-01-15T08:59:29Z", &Utc).unwrap(), -1);
    }

    #[test]
    fn test_humanize_minutes() {
        assert_eq!(humanize_minutes(0), "0分");
        assert_eq!(humanize_minutes(45), "45分");
        assert_eq!(humanize_minutes(59), "59分");
        assert_eq!(humanize_minutes(60), "1時間");
        assert_eq!(humanize_minutes(90), "1時間30分");
        assert_eq!(humanize_minutes(125), "2時間5分");
        assert_eq!(humanize_minutes(-30), "-30分");
        assert_eq!(humanize_minutes(-90), "-90分");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(
            format_duration("2024-01-15T09:00:00+09:00", "2024-01-15T10:30:00+09:00", &Tokyo).unwrap(),
            "1時間30分"
        );
        assert_eq!(format_duration("2024-01-15T09:00:00+09:00", "2024-01-15T11:00:00+09:00", &Tokyo).unwrap(), "2時間");
        assert_eq!(format_duration("2024-01-15T09:00:00+09:00", "2024-01-15T09:00:00+09:00", &Tokyo).unwrap(), "0分");
        assert_eq!(format_duration("2024-01-15T10:00:00+09:00", "2024-01-15T09:15:00+09:00", &Tokyo).unwrap(), "-45分");
        assert!(format_duration("not-a-date", "2024-01-15T09:15:00+09:00", &Tokyo).is_err());
    }

    #[test]
    fn test_format_duration_reads_back_as_minute_count() {
        let start = "2024-01-15T09:00:00Z";
        for end in [
            "2024-01-15T09:00:00Z",
            "2024-01-15T09:00:45Z",
            "2024-01-15T09:59:00Z",
            "2024-01-15T10:00:00Z",
            "2024-01-15T10:01:00Z",
            "2024-01-15T13:29:31Z",
            "2024-01-17T09:00:00Z",
        ] {
            let minutes = minutes_between(start, end, &Utc).unwrap();
            let duration = format_duration(start, end, &Utc).unwrap();
            assert_eq!(parse_humanized(&duration), minutes, "{} -> {}", end, duration);
        }
    }

    #[test]
    fn test_date_key() {
        assert_eq!(date_key(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()), "2024-03-05");
        assert_eq!(date_key(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()), "2024-12-31");
        assert_eq!(current_date_key(), Local::now().date_naive().format("%Y-%m-%d").to_string());
    }

    #[test]
    fn test_day_bounds() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(
            day_bounds(date, &Tokyo).unwrap(),
            ("2024-01-14T15:00:00.000Z".to_string(), "2024-01-15T14:59:59.999Z".to_string())
        );
        assert_eq!(
            day_bounds(date, &Utc).unwrap(),
            ("2024-01-15T00:00:00.000Z".to_string(), "2024-01-15T23:59:59.999Z".to_string())
        );
    }

    #[test]
    fn test_current_day_bounds() {
        let start = current_day_start().unwrap();
        let end = current_day_end().unwrap();
        assert!(start.ends_with('Z'));
        assert!(end.ends_with(".999Z"));
        assert!(start < end);
    }

    #[test]
    fn test_is_on_day() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 16).unwrap();
        assert!(is_on_day("2024-01-15T23:30:00Z", day, &Tokyo));
        assert!(!is_on_day("2024-01-15T23:30:00Z", day, &Utc));
        assert!(!is_on_day("garbage", day, &Tokyo));
    }

    #[test]
    fn test_is_same_calendar_day() {
        assert!(is_same_calendar_day(&Local::now().to_rfc3339()));
        assert!(!is_same_calendar_day("2001-01-01T12:00:00Z"));
        assert!(!is_same_calendar_day("not-a-date"));
    }

    #[test]
    fn test_classify_all_day() {
        assert!(classify_all_day("2024-01-15T00:00:00+09:00", "2024-01-16T00:00:00+09:00", &Tokyo).unwrap());
        assert!(classify_all_day("2024-01-15", "2024-01-17", &Tokyo).unwrap());
        // Midnight at both ends but shorter than a day.
        assert!(!classify_all_day("2024-01-15T00:00:00+09:00", "2024-01-15T00:00:00+09:00", &Tokyo).unwrap());
        assert!(!classify_all_day("2024-01-15T09:00:00+09:00", "2024-01-16T09:00:00+09:00", &Tokyo).unwrap());
        // Midnight in Tokyo is 15:00 in UTC.
        assert!(!classify_all_day("2024-01-15T00:00:00+09:00", "2024-01-16T00:00:00+09:00", &Utc).unwrap());
        assert!(classify_all_day("soon", "2024-01-16T00:00:00+09:00", &Tokyo).is_err());
    }

    #[test]
    fn test_display_zone() {
        assert_eq!(display_zone("Asia/Tokyo").unwrap(), Tokyo);
        assert_eq!(display_zone(" UTC ").unwrap(), chrono_tz::UTC);
        assert_eq!(display_zone("Mars/Olympus"), Err(DateTimeError::UnknownTimeZone("Mars/Olympus".to_string())));
        assert!(!resolve_display_time_zone().is_empty());
    }
}
