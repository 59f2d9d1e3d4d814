#[cfg(test)]
mod tests {
    use std::cmp::Ordering;
    use taskmaster::libs::sorting::{
        compare_asc, compare_desc, daily_key, monthly_key, sort_by_schedule, weekly_key, DayOrder, ScheduleSort,
        SortDirection, SortError,
    };
    use taskmaster::libs::task::Weekday;

    fn sorted(mut values: Vec<&str>, sort: ScheduleSort, direction: SortDirection) -> Vec<&str> {
        sort_by_schedule(&mut values, &sort, direction, |value| *value).unwrap();
        values
    }

    #[test]
    fn test_weekly_sort_follows_day_order_then_time() {
        let values = vec![
            "Friday, 8:00 a.m.",
            "Monday, 2:30 p.m.",
            "Wednesday 9:15 AM",
            "Monday, 9:00 a.m.",
            "Sunday, 11:59 p.m.",
        ];
        let result = sorted(values, ScheduleSort::Weekly(DayOrder::default()), SortDirection::Ascending);
        assert_eq!(
            result,
            vec![
                "Monday, 9:00 a.m.",
                "Monday, 2:30 p.m.",
                "Wednesday 9:15 AM",
                "Friday, 8:00 a.m.",
                "Sunday, 11:59 p.m.",
            ]
        );
    }

    #[test]
    fn test_weekly_sort_uses_caller_supplied_order() {
        let order = DayOrder::starting_on(Weekday::Sunday);
        let values = vec!["Monday, 9:00 a.m.", "Sunday, 11:00 p.m.", "Saturday, 1:00 a.m."];
        let result = sorted(values, ScheduleSort::Weekly(order), SortDirection::Ascending);
        assert_eq!(result, vec!["Sunday, 11:00 p.m.", "Monday, 9:00 a.m.", "Saturday, 1:00 a.m."]);
    }

    #[test]
    fn test_day_dominates_time() {
        let order = DayOrder::default();
        let late_monday = weekly_key("Monday, 11:59 p.m.", &order).unwrap();
        let early_tuesday = weekly_key("Tuesday, 12:00 a.m.", &order).unwrap();
        assert!(late_monday < early_tuesday);
    }

    #[test]
    fn test_monthly_sort_is_numeric() {
        let values = vec!["Day 10, 8:00 a.m.", "Day 2, 9:00 a.m.", "Day 2, 7:00 a.m.", "Day 31, 12:00 a.m."];
        let result = sorted(values, ScheduleSort::Monthly, SortDirection::Ascending);
        assert_eq!(result, vec!["Day 2, 7:00 a.m.", "Day 2, 9:00 a.m.", "Day 10, 8:00 a.m.", "Day 31, 12:00 a.m."]);
    }

    #[test]
    fn test_daily_sort_handles_noon_and_midnight() {
        let values = vec!["12:00 p.m.", "1:00 a.m.", "12:15 a.m.", "11:30 PM"];
        let result = sorted(values, ScheduleSort::Daily, SortDirection::Ascending);
        assert_eq!(result, vec!["12:15 a.m.", "1:00 a.m.", "12:00 p.m.", "11:30 PM"]);
    }

    #[test]
    fn test_descending_reverses_order() {
        let values = vec!["Day 1, 8:00 a.m.", "Day 3, 8:00 a.m.", "Day 2, 8:00 a.m."];
        let result = sorted(values, ScheduleSort::Monthly, SortDirection::Descending);
        assert_eq!(result, vec!["Day 3, 8:00 a.m.", "Day 2, 8:00 a.m.", "Day 1, 8:00 a.m."]);
    }

    #[test]
    fn test_comparators_are_inverse() {
        let keys = [
            monthly_key("Day 1, 8:00 a.m.").unwrap(),
            monthly_key("Day 1, 9:00 p.m.").unwrap(),
            monthly_key("Day 20, 8:00 a.m.").unwrap(),
            daily_key("3:45 p.m.").unwrap(),
        ];
        for a in &keys {
            for b in &keys {
                assert_eq!(compare_desc(a, b), compare_asc(a, b).reverse());
                if a == b {
                    assert_eq!(compare_asc(a, b), Ordering::Equal);
                    assert_eq!(compare_desc(a, b), Ordering::Equal);
                }
            }
        }
    }

    #[test]
    fn test_unknown_day_is_an_error() {
        let order = DayOrder::default();
        assert!(matches!(weekly_key("Funday, 9:00 a.m.", &order), Err(SortError::UnknownDay(_))));
    }

    #[test]
    fn test_failed_sort_leaves_rows_in_place() {
        let mut values = vec!["Tuesday, 9:00 a.m.", "Funday, 9:00 a.m.", "Monday, 9:00 a.m."];
        let before = values.clone();
        let result = sort_by_schedule(
            &mut values,
            &ScheduleSort::Weekly(DayOrder::default()),
            SortDirection::Ascending,
            |value| *value,
        );
        assert!(result.is_err());
        assert_eq!(values, before);
    }

    #[test]
    fn test_malformed_strings_are_rejected() {
        assert!(daily_key("9 a.m.").is_err());
        assert!(daily_key("13:00 p.m.").is_err());
        assert!(daily_key("9:60 a.m.").is_err());
        assert!(monthly_key("Day x, 9:00 a.m.").is_err());
        assert!(monthly_key("9:00 a.m.").is_err());
    }

    #[test]
    fn test_day_order_must_hold_each_weekday_once() {
        assert_eq!(
            DayOrder::new(&[Weekday::Monday, Weekday::Monday]),
            Err(SortError::InvalidDayOrder)
        );
        let mut days = Weekday::ALL.to_vec();
        days[6] = Weekday::Sunday;
        assert_eq!(DayOrder::new(&days), Err(SortError::InvalidDayOrder));
        assert!(DayOrder::new(&Weekday::ALL).is_ok());
    }
}
