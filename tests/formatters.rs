#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use taskmaster::libs::formatter::{convert_to_12_hour, schedule_label, truncate_description, DESCRIPTION_PREVIEW_LEN};
    use taskmaster::libs::task::{Schedule, Weekday};

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_convert_afternoon() {
        assert_eq!(convert_to_12_hour("14:30").unwrap(), "2:30 p.m.");
    }

    #[test]
    fn test_convert_just_after_midnight() {
        assert_eq!(convert_to_12_hour("00:15").unwrap(), "12:15 a.m.");
    }

    #[test]
    fn test_convert_noon() {
        assert_eq!(convert_to_12_hour("12:00").unwrap(), "12:00 p.m.");
    }

    #[test]
    fn test_convert_accepts_server_seconds() {
        assert_eq!(convert_to_12_hour("09:05:00").unwrap(), "9:05 a.m.");
    }

    #[test]
    fn test_convert_rejects_garbage() {
        assert!(convert_to_12_hour("25:00").is_err());
        assert!(convert_to_12_hour("soon").is_err());
    }

    #[test]
    fn test_schedule_labels() {
        assert_eq!(schedule_label(&Schedule::Daily { time: time(9, 0) }), "9:00 a.m.");
        assert_eq!(
            schedule_label(&Schedule::Weekly { day: Weekday::Monday, time: time(14, 30) }),
            "Monday, 2:30 p.m."
        );
        assert_eq!(
            schedule_label(&Schedule::Monthly { date: 15, time: time(23, 59) }),
            "Day 15, 11:59 p.m."
        );
    }

    #[test]
    fn test_short_description_is_not_cut() {
        let (preview, cut) = truncate_description("Water the plants");
        assert_eq!(preview, "Water the plants");
        assert!(!cut);
    }

    #[test]
    fn test_long_description_is_cut_with_ellipsis() {
        let long = "a".repeat(DESCRIPTION_PREVIEW_LEN + 20);
        let (preview, cut) = truncate_description(&long);
        assert!(cut);
        assert_eq!(preview.len(), DESCRIPTION_PREVIEW_LEN + 3);
        assert!(preview.ends_with("..."));
    }
}
