//! Human-readable formatting of schedules and descriptions.
//!
//! Times are shown on a 12-hour clock with a lowercase, dotted meridiem
//! (`"2:30 p.m."`), the way the task table has always displayed them.
//! Schedule strings built here are also what the sorting module parses back
//! into chronological keys, so the two must stay in step.
//!
//! ## Examples
//!
//! ```rust
//! use taskmaster::libs::formatter::convert_to_12_hour;
//!
//! assert_eq!(convert_to_12_hour("14:30")?, "2:30 p.m.");
//! assert_eq!(convert_to_12_hour("00:15")?, "12:15 a.m.");
//! # Ok::<(), taskmaster::libs::task::ScheduleError>(())
//! ```

use super::task::{parse_execution_time, Schedule, ScheduleError};
use chrono::{NaiveTime, Timelike};

/// Number of description characters shown before the "See More" toggle.
pub const DESCRIPTION_PREVIEW_LEN: usize = 100;

/// Converts a 24-hour `HH:MM[:SS]` string to `h:mm a.m.|p.m.`.
pub fn convert_to_12_hour(time: &str) -> Result<String, ScheduleError> {
    parse_execution_time(time).map(format_12_hour)
}

/// Formats a time as `h:mm a.m.` / `h:mm p.m.`; midnight is 12 a.m., noon 12 p.m.
pub fn format_12_hour(time: NaiveTime) -> String {
    let (pm, hour) = time.hour12();
    let period = if pm { "p.m." } else { "a.m." };
    format!("{}:{:02} {}", hour, time.minute(), period)
}

/// Display string for the schedule column.
///
/// - daily: `2:30 p.m.`
/// - weekly: `Monday, 2:30 p.m.`
/// - monthly: `Day 15, 2:30 p.m.`
pub fn schedule_label(schedule: &Schedule) -> String {
    match schedule {
        Schedule::Daily { time } => format_12_hour(*time),
        Schedule::Weekly { day, time } => format!("{}, {}", day, format_12_hour(*time)),
        Schedule::Monthly { date, time } => format!("Day {}, {}", date, format_12_hour(*time)),
    }
}

/// Splits a description into its table preview and whether it was cut.
///
/// Counts characters, not bytes. A cut preview ends with `...`.
pub fn truncate_description(description: &str) -> (String, bool) {
    let mut chars = description.char_indices();
    match chars.nth(DESCRIPTION_PREVIEW_LEN) {
        Some((cut, _)) => (format!("{}...", &description[..cut]), true),
        None => (description.to_string(), false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_are_dropped() {
        assert_eq!(convert_to_12_hour("14:30:59").unwrap(), "2:30 p.m.");
    }

    #[test]
    fn truncation_counts_characters() {
        let exact = "é".repeat(DESCRIPTION_PREVIEW_LEN);
        assert_eq!(truncate_description(&exact), (exact.clone(), false));

        let long = "é".repeat(DESCRIPTION_PREVIEW_LEN + 1);
        let (preview, cut) = truncate_description(&long);
        assert!(cut);
        assert_eq!(preview, format!("{}...", exact));
    }
}
