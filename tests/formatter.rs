#[cfg(test)]
mod tests {
    use chrono_tz::Asia::Tokyo;
    use nippo::libs::event::{CalendarEvent, TimeOfDay};
    use nippo::libs::formatter::{
        bucket_by_time_of_day, render_day_summary, render_event_detail, render_event_line, render_event_list, render_report_section,
        MEETINGS_HEADER, NO_MEETINGS_NOTICE, NO_MEETINGS_SUMMARY,
    };

    fn standup() -> CalendarEvent {
        CalendarEvent::new("Standup", "2024-01-15T09:00:00+09:00", "2024-01-15T10:30:00+09:00")
    }

    fn offsite() -> CalendarEvent {
        CalendarEvent::all_day("Offsite").with_location("Tokyo").with_attendees(5)
    }

    #[test]
    fn test_empty_section() {
        assert_eq!(
            render_report_section(&[], &Tokyo),
            "## 本日のMTG予定\n\n*予定されたミーティングはありません*\n\n"
        );
    }

    #[test]
    fn test_untitled_events_render_as_empty() {
        let events = vec![
            CalendarEvent::new("", "2024-01-15T09:00:00+09:00", "2024-01-15T10:00:00+09:00"),
            CalendarEvent::all_day("   "),
        ];
        assert_eq!(render_event_list(&events, &Tokyo), NO_MEETINGS_NOTICE);
        assert_eq!(render_report_section(&events, &Tokyo), render_report_section(&[], &Tokyo));
        assert_eq!(render_day_summary(&events, &Tokyo), NO_MEETINGS_SUMMARY);
    }

    #[test]
    fn test_all_day_event_line() {
        let events = vec![offsite()];
        assert_eq!(
            render_report_section(&events, &Tokyo),
            "## 本日のMTG予定\n\n- 終日: Offsite @ Tokyo (参加者: 5名)\n\n"
        );
    }

    #[test]
    fn test_all_day_flag_wins_over_timestamps() {
        let event = CalendarEvent {
            is_all_day: true,
            ..standup()
        };
        assert_eq!(render_event_line(&event, &Tokyo), "- 終日: Standup");
    }

    #[test]
    fn test_timed_event_line() {
        assert_eq!(render_event_line(&standup(), &Tokyo), "- 09:00-10:30: Standup");

        let utc_source = CalendarEvent::new("Sync", "2024-01-15T05:00:00Z", "2024-01-15T05:45:00Z").with_attendees(2);
        assert_eq!(render_event_line(&utc_source, &Tokyo), "- 14:00-14:45: Sync (参加者: 2名)");
    }

    #[test]
    fn test_unparsable_time_uses_placeholder() {
        let event = CalendarEvent::new("Planning", "not-a-date", "2024-01-15T11:00:00+09:00")
            .with_location("Room A")
            .with_attendees(3);
        assert_eq!(render_event_line(&event, &Tokyo), "- 時間未定: Planning @ Room A (参加者: 3名)");

        let broken_end = CalendarEvent::new("Review", "2024-01-15T09:00:00+09:00", "");
        assert_eq!(render_event_line(&broken_end, &Tokyo), "- 時間未定: Review");
    }

    #[test]
    fn test_placeholder_does_not_abort_list() {
        let events = vec![CalendarEvent::new("Planning", "not-a-date", "not-a-date"), standup()];
        assert_eq!(render_event_list(&events, &Tokyo), "- 時間未定: Planning\n- 09:00-10:30: Standup");
    }

    #[test]
    fn test_list_keeps_order_and_duplicates() {
        let late = CalendarEvent::new("Retro", "2024-01-15T16:00:00+09:00", "2024-01-15T17:00:00+09:00");
        let events = vec![late.clone(), standup(), late];
        assert_eq!(
            render_event_list(&events, &Tokyo),
            "- 16:00-17:00: Retro\n- 09:00-10:30: Standup\n- 16:00-17:00: Retro"
        );
    }

    #[test]
    fn test_section_shape() {
        let events = vec![standup(), CalendarEvent::new("", "x", "y"), offsite()];
        let section = render_report_section(&events, &Tokyo);

        assert!(section.starts_with(MEETINGS_HEADER));
        assert!(section.ends_with("\n\n"));
        assert!(!section.ends_with("\n\n\n"));
        assert_eq!(
            section,
            "## 本日のMTG予定\n\n- 09:00-10:30: Standup\n- 終日: Offsite @ Tokyo (参加者: 5名)\n\n"
        );
    }

    #[test]
    fn test_rendering_leaves_events_untouched() {
        let events = vec![standup(), offsite(), CalendarEvent::new("Planning", "not-a-date", "")];
        let before = events.clone();

        render_report_section(&events, &Tokyo);
        render_day_summary(&events, &Tokyo);
        bucket_by_time_of_day(&events, &Tokyo);

        assert_eq!(events, before);
    }

    #[test]
    fn test_event_detail() {
        let event = CalendarEvent::new("Design review", "2024-01-15T09:00:00+09:00", "2024-01-15T10:30:00+09:00")
            .with_location("Room A")
            .with_attendees(4);
        assert_eq!(
            render_event_detail(&event, &Tokyo),
            "**Design review**\n時間: 09:00 - 10:30 (1時間30分)\n場所: Room A\n参加者: 4名"
        );
    }

    #[test]
    fn test_event_detail_minimal() {
        assert_eq!(render_event_detail(&CalendarEvent::all_day("Offsite"), &Tokyo), "**Offsite**\n時間: 終日");
        assert_eq!(
            render_event_detail(&CalendarEvent::new("Planning", "soon", "later"), &Tokyo),
            "**Planning**\n時間: 時間未定"
        );
    }

    #[test]
    fn test_summary_mixed_day() {
        let events = vec![
            standup(),
            offsite(),
            CalendarEvent::new("Lunch", "2024-01-15T12:00:00+09:00", "2024-01-15T12:00:00+09:00"),
        ];
        assert_eq!(
            render_day_summary(&events, &Tokyo),
            "本日は3件のイベントが予定されています（ミーティング時間: 1時間30分、終日イベント: 1件）。"
        );
    }

    #[test]
    fn test_summary_only_all_day() {
        let events = vec![offsite(), CalendarEvent::all_day("Holiday")];
        assert_eq!(render_day_summary(&events, &Tokyo), "本日は2件のイベントが予定されています（すべて終日イベント）。");
    }

    #[test]
    fn test_summary_only_timed() {
        let events = vec![CalendarEvent::new("1on1", "2024-01-15T15:00:00+09:00", "2024-01-15T15:45:00+09:00")];
        assert_eq!(render_day_summary(&events, &Tokyo), "本日は1件のイベントが予定されています（ミーティング時間: 45分）。");
    }

    #[test]
    fn test_summary_skips_unparsable_duration() {
        let events = vec![
            CalendarEvent::new("Sync", "2024-01-15T10:00:00+09:00", "2024-01-15T11:00:00+09:00"),
            CalendarEvent::new("Planning", "not-a-date", "2024-01-15T11:00:00+09:00"),
            CalendarEvent::new("  ", "2024-01-15T12:00:00+09:00", "2024-01-15T18:00:00+09:00"),
        ];
        assert_eq!(render_day_summary(&events, &Tokyo), "本日は2件のイベントが予定されています（ミーティング時間: 1時間）。");
    }

    #[test]
    fn test_summary_empty_day() {
        assert_eq!(render_day_summary(&[], &Tokyo), NO_MEETINGS_SUMMARY);
    }

    #[test]
    fn test_bucket_by_time_of_day() {
        let events = vec![
            CalendarEvent::new("Early", "2024-01-15T00:00:00+09:00", "2024-01-15T01:00:00+09:00"),
            CalendarEvent::new("Noon", "2024-01-15T12:00:00+09:00", "2024-01-15T13:00:00+09:00"),
            CalendarEvent::new("Late afternoon", "2024-01-15T17:59:00+09:00", "2024-01-15T18:30:00+09:00"),
            CalendarEvent::new("Dinner", "2024-01-15T18:00:00+09:00", "2024-01-15T20:00:00+09:00"),
            CalendarEvent::new("Morning", "2024-01-15T11:59:00+09:00", "2024-01-15T12:30:00+09:00"),
            offsite(),
        ];
        let buckets = bucket_by_time_of_day(&events, &Tokyo);

        assert_eq!(buckets.morning.iter().map(|e| e.title.as_str()).collect::<Vec<_>>(), vec!["Early", "Morning"]);
        assert_eq!(
            buckets.afternoon.iter().map(|e| e.title.as_str()).collect::<Vec<_>>(),
            vec!["Noon", "Late afternoon"]
        );
        assert_eq!(buckets.evening.iter().map(|e| e.title.as_str()).collect::<Vec<_>>(), vec!["Dinner"]);
        assert_eq!(buckets.all_day.iter().map(|e| e.title.as_str()).collect::<Vec<_>>(), vec!["Offsite"]);
        assert_eq!(buckets.len(), events.len());
    }

    #[test]
    fn test_bucket_uses_display_zone_hour() {
        // 03:00 UTC is noon in Tokyo.
        let events = vec![CalendarEvent::new("Sync", "2024-01-15T03:00:00Z", "2024-01-15T04:00:00Z")];
        let buckets = bucket_by_time_of_day(&events, &Tokyo);
        assert_eq!(buckets.afternoon.len(), 1);
        assert_eq!(events[0].time_of_day(&chrono::Utc), TimeOfDay::Morning);
    }

    #[test]
    fn test_bucket_keeps_every_event() {
        let events = vec![
            CalendarEvent::new("", "2024-01-15T08:00:00+09:00", "2024-01-15T09:00:00+09:00"),
            CalendarEvent::new("Planning", "not-a-date", "not-a-date"),
            CalendarEvent::all_day(""),
        ];
        let buckets = bucket_by_time_of_day(&events, &Tokyo);

        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets.morning.len(), 1);
        assert_eq!(buckets.afternoon[0].title, "Planning");
        assert_eq!(buckets.all_day.len(), 1);
        assert!(buckets.evening.is_empty());
    }

    #[test]
    fn test_bucket_iter_order() {
        let buckets = bucket_by_time_of_day(&[], &Tokyo);
        assert!(buckets.is_empty());
        assert_eq!(
            buckets.iter().map(|(part, _)| part.to_string()).collect::<Vec<_>>(),
            vec!["午前", "午後", "夜", "終日"]
        );
    }
}
