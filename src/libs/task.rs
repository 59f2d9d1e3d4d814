//! Task domain types and their wire representation.
//!
//! The server describes a task's recurrence with three boolean flags
//! (`daily`, `weekly`, `monthly`) and three optional payload fields
//! (`execution_time`, `execution_day`, `execution_date`). Inside the crate
//! that shape is replaced by [`Schedule`], a tagged union that can only hold
//! one recurrence kind at a time together with exactly the fields it needs.
//!
//! Conversion happens at the serde boundary: [`Task`] deserializes through
//! [`TaskRecord`] and rejects records whose flags or payload don't describe
//! exactly one valid schedule.
//!
//! ## Usage
//!
//! ```rust
//! use taskmaster::libs::task::{Schedule, Task, Weekday};
//!
//! let task: Task = serde_json::from_str(r#"{
//!     "id": 7, "title": "Water plants", "description": "",
//!     "weekly": true, "execution_day": "Monday", "execution_time": "08:30:00"
//! }"#)?;
//! assert!(matches!(task.schedule, Schedule::Weekly { day: Weekday::Monday, .. }));
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::{DateTime, FixedOffset, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Server-side identifier of a task.
pub type TaskId = i64;

/// Errors raised while turning wire data into a [`Schedule`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("exactly one of daily, weekly or monthly must be set, found {0}")]
    FlagCount(usize),
    #[error("missing field '{0}'")]
    MissingField(&'static str),
    #[error("invalid day '{0}', expected one of Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday")]
    InvalidDay(String),
    #[error("invalid day of month {0}, expected 1..=31")]
    InvalidDate(u32),
    #[error("invalid time '{0}', expected HH:MM or HH:MM:SS")]
    InvalidTime(String),
    #[error("missing task id")]
    MissingId,
}

/// Day of the week a weekly task runs on.
///
/// Variant names match the values the server stores in `execution_day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All days, in the order the server lists them.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = ScheduleError;

    /// Parses a full English day name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .iter()
            .copied()
            .find(|day| day.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ScheduleError::InvalidDay(s.to_string()))
    }
}

/// Recurrence kind of a task, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecurrenceKind {
    Daily,
    Weekly,
    Monthly,
}

impl RecurrenceKind {
    /// Field name of the boolean flag carrying this kind on the wire.
    pub fn flag(&self) -> &'static str {
        match self {
            RecurrenceKind::Daily => "daily",
            RecurrenceKind::Weekly => "weekly",
            RecurrenceKind::Monthly => "monthly",
        }
    }
}

/// When a task is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    Daily { time: NaiveTime },
    Weekly { day: Weekday, time: NaiveTime },
    Monthly { date: u32, time: NaiveTime },
}

impl Schedule {
    pub fn kind(&self) -> RecurrenceKind {
        match self {
            Schedule::Daily { .. } => RecurrenceKind::Daily,
            Schedule::Weekly { .. } => RecurrenceKind::Weekly,
            Schedule::Monthly { .. } => RecurrenceKind::Monthly,
        }
    }

    pub fn time(&self) -> NaiveTime {
        match self {
            Schedule::Daily { time } | Schedule::Weekly { time, .. } | Schedule::Monthly { time, .. } => *time,
        }
    }
}

/// A task as the client works with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord", into = "TaskRecord")]
pub struct Task {
    pub id: TaskId,
    pub user: Option<i64>,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: Option<DateTime<FixedOffset>>,
    pub schedule: Schedule,
}

/// The flat JSON shape used by the task API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TaskId>,
    #[serde(default)]
    pub user: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub daily: bool,
    #[serde(default)]
    pub weekly: bool,
    #[serde(default)]
    pub monthly: bool,
    #[serde(default)]
    pub execution_day: Option<String>,
    #[serde(default)]
    pub execution_time: Option<String>,
    #[serde(default)]
    pub execution_date: Option<u32>,
}

impl TaskRecord {
    /// Resolves the recurrence flags and payload into a [`Schedule`].
    ///
    /// Payload fields of the kinds that aren't set are ignored.
    pub fn schedule(&self) -> Result<Schedule, ScheduleError> {
        let flags = [self.daily, self.weekly, self.monthly].iter().filter(|f| **f).count();
        if flags != 1 {
            return Err(ScheduleError::FlagCount(flags));
        }

        let time = self
            .execution_time
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or(ScheduleError::MissingField("execution_time"))
            .and_then(parse_execution_time)?;

        if self.daily {
            Ok(Schedule::Daily { time })
        } else if self.weekly {
            let day = self
                .execution_day
                .as_deref()
                .filter(|d| !d.trim().is_empty())
                .ok_or(ScheduleError::MissingField("execution_day"))?
                .parse()?;
            Ok(Schedule::Weekly { day, time })
        } else {
            let date = self.execution_date.ok_or(ScheduleError::MissingField("execution_date"))?;
            if !(1..=31).contains(&date) {
                return Err(ScheduleError::InvalidDate(date));
            }
            Ok(Schedule::Monthly { date, time })
        }
    }
}

impl TryFrom<TaskRecord> for Task {
    type Error = ScheduleError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let schedule = record.schedule()?;
        Ok(Task {
            id: record.id.ok_or(ScheduleError::MissingId)?,
            user: record.user,
            title: record.title,
            description: record.description,
            completed: record.completed,
            created_at: record.created_at,
            schedule,
        })
    }
}

impl From<Task> for TaskRecord {
    fn from(task: Task) -> Self {
        let mut record = TaskRecord {
            id: Some(task.id),
            user: task.user,
            title: task.title,
            description: task.description,
            completed: task.completed,
            created_at: task.created_at,
            execution_time: Some(task.schedule.time().format("%H:%M:%S").to_string()),
            ..Default::default()
        };
        match task.schedule {
            Schedule::Daily { .. } => record.daily = true,
            Schedule::Weekly { day, .. } => {
                record.weekly = true;
                record.execution_day = Some(day.name().to_string());
            }
            Schedule::Monthly { date, .. } => {
                record.monthly = true;
                record.execution_date = Some(date);
            }
        }
        record
    }
}

/// Body returned by the completion toggle endpoint.
///
/// The server sends the whole task back; only these two fields are used.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompletionStatus {
    pub completed: bool,
    #[serde(default)]
    pub title: String,
}

/// Parses `HH:MM` or `HH:MM:SS` (24-hour clock).
pub fn parse_execution_time(value: &str) -> Result<NaiveTime, ScheduleError> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| ScheduleError::InvalidTime(value.to_string()))
}
