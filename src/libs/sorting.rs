//! Chronological sort keys for schedule strings.
//!
//! The schedule column of the task table holds display strings such as
//! `"Monday, 2:30 p.m."` or `"Day 15, 2:30 p.m."`. Sorting those as text
//! puts Friday before Monday and Day 10 before Day 2, so the table sorts on
//! an integer key instead:
//!
//! ```text
//! key = day_index * DAY_WEIGHT + seconds_since_midnight
//! ```
//!
//! `DAY_WEIGHT` is larger than the number of seconds in a day, so the day
//! always dominates and the time only breaks ties within a day. For weekly
//! strings `day_index` is the position of the day in a caller-supplied
//! [`DayOrder`] (which decides what day a week starts on); for monthly strings
//! it is the day of the month.
//!
//! A day token that isn't in the order is an error, never a sentinel index.
//!
//! ## Usage
//!
//! ```rust
//! use taskmaster::libs::sorting::{compare_asc, weekly_key, DayOrder};
//!
//! let order = DayOrder::default();
//! let monday = weekly_key("Monday, 9:00 a.m.", &order)?;
//! let tuesday = weekly_key("Tuesday 8:00 AM", &order)?;
//! assert!(compare_asc(&monday, &tuesday).is_lt());
//! # Ok::<(), taskmaster::libs::sorting::SortError>(())
//! ```

use super::task::Weekday;
use std::cmp::Ordering;
use thiserror::Error;

/// Weight of one day in a chronological key; exceeds 86_400 seconds.
pub const DAY_WEIGHT: i64 = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("unknown day '{0}'")]
    UnknownDay(String),
    #[error("invalid day of month '{0}'")]
    InvalidDayOfMonth(String),
    #[error("invalid time '{0}'")]
    InvalidTime(String),
    #[error("malformed schedule '{0}'")]
    Malformed(String),
    #[error("day order must list each of the 7 weekdays exactly once")]
    InvalidDayOrder,
}

/// Ordering of the seven weekdays that defines where a week starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayOrder([Weekday; 7]);

impl DayOrder {
    /// Builds an order from an explicit list, which must hold every weekday once.
    pub fn new(days: &[Weekday]) -> Result<Self, SortError> {
        let days: [Weekday; 7] = days.try_into().map_err(|_| SortError::InvalidDayOrder)?;
        for (i, day) in days.iter().enumerate() {
            if days[..i].contains(day) {
                return Err(SortError::InvalidDayOrder);
            }
        }
        Ok(Self(days))
    }

    /// Builds the week that begins on `first` and runs through the next six days.
    pub fn starting_on(first: Weekday) -> Self {
        let offset = Weekday::ALL.iter().position(|d| *d == first).unwrap_or(0);
        let mut days = Weekday::ALL;
        days.rotate_left(offset);
        Self(days)
    }

    pub fn days(&self) -> &[Weekday; 7] {
        &self.0
    }

    /// 0-based position of a day token such as `"Monday"` or `"Monday,"`.
    pub fn position(&self, token: &str) -> Result<i64, SortError> {
        let name = token.trim_end_matches(',');
        self.0
            .iter()
            .position(|day| day.name().eq_ignore_ascii_case(name))
            .map(|i| i as i64)
            .ok_or_else(|| SortError::UnknownDay(name.to_string()))
    }
}

impl Default for DayOrder {
    fn default() -> Self {
        Self::starting_on(Weekday::Monday)
    }
}

/// Seconds since midnight for a 12-hour `h:mm` time and its meridiem.
///
/// The meridiem may be written `AM`/`PM` or `a.m.`/`p.m.`, in any case.
pub fn time_of_day_seconds(clock: &str, meridiem: &str) -> Result<i64, SortError> {
    let invalid = || SortError::InvalidTime(format!("{} {}", clock, meridiem));

    let pm = match meridiem.replace('.', "").to_ascii_lowercase().as_str() {
        "am" => false,
        "pm" => true,
        _ => return Err(invalid()),
    };
    let (hour, minute) = clock.split_once(':').ok_or_else(invalid)?;
    let hour: i64 = hour.parse().map_err(|_| invalid())?;
    let minute: i64 = minute.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&hour) || !(0..=59).contains(&minute) {
        return Err(invalid());
    }

    let hour = hour % 12 + if pm { 12 } else { 0 };
    Ok(hour * 3600 + minute * 60)
}

/// Key for `<Day>[,] <h>:<mm> <AM|PM>`.
pub fn weekly_key(value: &str, order: &DayOrder) -> Result<i64, SortError> {
    match value.split_whitespace().collect::<Vec<_>>().as_slice() {
        [day, clock, meridiem] => Ok(order.position(day)? * DAY_WEIGHT + time_of_day_seconds(clock, meridiem)?),
        _ => Err(SortError::Malformed(value.to_string())),
    }
}

/// Key for `<Label> <n>[,] <h>:<mm> <AM|PM>`, e.g. `Day 15, 2:30 p.m.`.
pub fn monthly_key(value: &str) -> Result<i64, SortError> {
    match value.split_whitespace().collect::<Vec<_>>().as_slice() {
        [_label, date, clock, meridiem] => {
            let date = date.trim_end_matches(',');
            let day: i64 = date.parse().map_err(|_| SortError::InvalidDayOfMonth(date.to_string()))?;
            if !(1..=31).contains(&day) {
                return Err(SortError::InvalidDayOfMonth(date.to_string()));
            }
            Ok(day * DAY_WEIGHT + time_of_day_seconds(clock, meridiem)?)
        }
        _ => Err(SortError::Malformed(value.to_string())),
    }
}

/// Key for a bare `<h>:<mm> <AM|PM>`.
pub fn daily_key(value: &str) -> Result<i64, SortError> {
    match value.split_whitespace().collect::<Vec<_>>().as_slice() {
        [clock, meridiem] => time_of_day_seconds(clock, meridiem),
        _ => Err(SortError::Malformed(value.to_string())),
    }
}

/// Ascending comparator on chronological keys.
pub fn compare_asc(a: &i64, b: &i64) -> Ordering {
    a.cmp(b)
}

/// Descending comparator on chronological keys.
pub fn compare_desc(a: &i64, b: &i64) -> Ordering {
    b.cmp(a)
}

/// Which schedule string format a column holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleSort {
    Daily,
    Weekly(DayOrder),
    Monthly,
}

impl ScheduleSort {
    pub fn key(&self, value: &str) -> Result<i64, SortError> {
        match self {
            ScheduleSort::Daily => daily_key(value),
            ScheduleSort::Weekly(order) => weekly_key(value, order),
            ScheduleSort::Monthly => monthly_key(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn comparator(&self) -> fn(&i64, &i64) -> Ordering {
        match self {
            SortDirection::Ascending => compare_asc,
            SortDirection::Descending => compare_desc,
        }
    }
}

/// Sorts `items` by the chronological key of the schedule string `label` returns.
///
/// Keys are computed once per item. Fails without reordering anything if any
/// string can't be encoded. The sort is stable, so equal keys keep their order.
pub fn sort_by_schedule<T, F>(items: &mut Vec<T>, sort: &ScheduleSort, direction: SortDirection, label: F) -> Result<(), SortError>
where
    F: Fn(&T) -> &str,
{
    let keys = items.iter().map(|item| sort.key(label(item))).collect::<Result<Vec<_>, _>>()?;
    let compare = direction.comparator();

    let mut keyed: Vec<(i64, T)> = keys.into_iter().zip(items.drain(..)).collect();
    keyed.sort_by(|(a, _), (b, _)| compare(a, b));
    items.extend(keyed.into_iter().map(|(_, item)| item));
    Ok(())
}
