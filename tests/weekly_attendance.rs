#[cfg(test)]
mod tests {
    use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
    use satchel::libs::attendance::{current_week_attendance, weekly_attendance, AttendanceRecord};
    use satchel::libs::calendar::{days_in_week, is_same_day, is_weekday, is_weekend, week_range};
    use satchel::libs::date_strip::DateStrip;
    use satchel::libs::error::CalendarError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(date: NaiveDate, h: u32, min: u32) -> NaiveDateTime {
        date.and_hms_opt(h, min, 0).unwrap()
    }

    /// Reference instants spread over every weekday, a year boundary and a leap day.
    fn reference_instants() -> Vec<NaiveDateTime> {
        let mut instants: Vec<NaiveDateTime> = (0..7).map(|i| at(date(2025, 1, 13) + Duration::days(i), 9, 30)).collect();
        instants.push(at(date(2024, 12, 31), 23, 59));
        instants.push(at(date(2024, 2, 29), 0, 0));
        instants
    }

    #[test]
    fn test_week_range_is_monday_to_sunday() {
        for now in reference_instants() {
            for offset in -30..=30 {
                let range = week_range(offset, now).unwrap();
                assert_eq!(range.start.weekday(), Weekday::Mon);
                assert_eq!(range.end.weekday(), Weekday::Sun);
                assert_eq!((range.end.date() - range.start.date()).num_days(), 6);
                assert!(range.contains(now + Duration::weeks(offset.into())));
            }
        }
    }

    #[test]
    fn test_consecutive_weeks_are_seven_days_apart() {
        for now in reference_instants() {
            for offset in -30..30 {
                let this = week_range(offset, now).unwrap();
                let next = week_range(offset + 1, now).unwrap();
                assert_eq!(next.start - this.start, Duration::days(7));
            }
        }
    }

    #[test]
    fn test_days_in_week_partition() {
        for offset in -5..=5 {
            let days = days_in_week(&week_range(offset, at(date(2025, 1, 15), 12, 0)).unwrap());
            assert_eq!(days.len(), 7);
            for pair in days.windows(2) {
                assert_eq!(pair[1].date() - pair[0].date(), Duration::days(1));
            }
            assert_eq!(days.iter().filter(|day| is_weekday(**day)).count(), 5);
            assert_eq!(days.iter().filter(|day| is_weekend(**day)).count(), 2);
        }
    }

    #[test]
    fn test_weekly_attendance_is_idempotent() {
        let records = vec![
            AttendanceRecord::on(date(2025, 1, 13), true),
            AttendanceRecord::on(date(2025, 1, 16), false),
        ];
        let range = week_range(0, at(date(2025, 1, 15), 12, 0)).unwrap();
        assert_eq!(weekly_attendance(&records, &range), weekly_attendance(&records, &range));
    }

    #[test]
    fn test_past_week_percentage_matches_pattern() {
        let monday = date(2025, 1, 6);
        let now = at(date(2025, 1, 22), 10, 0);
        let range = week_range(-2, now).unwrap();
        assert_eq!(range.monday(), monday);

        for present in 0..=5u32 {
            let records: Vec<AttendanceRecord> = (0..5)
                .map(|i| AttendanceRecord::on(monday + Duration::days(i64::from(i)), i < present))
                .collect();
            let summary = weekly_attendance(&records, &range);
            let expected = (f64::from(present) / 5.0 * 100.0).round() as u32;
            assert_eq!(summary.total_days, 5);
            assert_eq!(summary.percentage, expected);
        }
    }

    #[test]
    fn test_monday_before_any_records() {
        let result = current_week_attendance(&[], at(date(2025, 1, 13), 7, 0)).unwrap();
        assert_eq!(result.considered_days, 1);
        assert_eq!(result.percentage, 0);
    }

    #[test]
    fn test_wednesday_scenario() {
        let records = vec![
            AttendanceRecord::on(date(2025, 1, 13), true),
            AttendanceRecord::on(date(2025, 1, 14), false),
            AttendanceRecord::on(date(2025, 1, 15), true),
        ];
        let result = current_week_attendance(&records, at(date(2025, 1, 15), 15, 0)).unwrap();
        assert_eq!(result.considered_days, 3);
        assert_eq!(result.present_days, 2);
        assert_eq!(result.percentage, 67);
    }

    #[test]
    fn test_strip_size_for_every_weekday() {
        // Monday 20 through Sunday 26 October 2025
        for offset in 0..7 {
            let today = date(2025, 10, 20) + Duration::days(offset);
            let strip = DateStrip::generate(today);

            assert!(strip.entries().iter().all(|entry| is_weekday(entry.date)));
            assert!((15..=16).contains(&strip.len()), "{} gave {} entries", today, strip.len());
            let todays = strip.entries().iter().filter(|entry| entry.is_today).count();
            assert!(todays <= 1);
            assert_eq!(todays == 1, is_weekday(at(today, 12, 0)), "{}", today);
        }
    }

    #[test]
    fn test_extreme_week_offsets_are_errors() {
        let now = at(date(2025, 1, 15), 12, 0);
        for offset in [99_999_999, -99_999_999, i32::MAX, i32::MIN] {
            let err = week_range(offset, now).unwrap_err();
            assert_eq!(err, CalendarError::WeekOutOfRange(offset));
            assert!(err.to_string().contains(&offset.to_string()));
        }
    }

    #[test]
    fn test_same_day_ignores_time() {
        let day = date(2025, 3, 4);
        assert!(is_same_day(at(day, 0, 0), at(day, 23, 59)));
        assert!(!is_same_day(at(day, 23, 59), at(day + Duration::days(1), 0, 0)));
    }
}
