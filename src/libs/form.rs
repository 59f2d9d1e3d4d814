//! The shared add and edit task forms.
//!
//! A form is a set of named fields, each with a value, an invalid mark and
//! an inline feedback message. Field names are the server's field names, so
//! a 400 response maps straight back onto the inputs that caused it.
//! Messages keyed by anything else (the server's `type error` or
//! `dailytask` checks) are kept as form-level feedback.

use super::task::{RecurrenceKind, Schedule, Task};
use crate::api::FieldErrors;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Fields every task form carries.
pub const TASK_FIELDS: [&str; 8] = [
    "title",
    "description",
    "daily",
    "weekly",
    "monthly",
    "execution_time",
    "execution_day",
    "execution_date",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub invalid: bool,
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    fields: BTreeMap<String, FieldState>,
    form_errors: Vec<String>,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskForm {
    pub fn new() -> Self {
        Self {
            fields: TASK_FIELDS.iter().map(|name| (name.to_string(), FieldState::default())).collect(),
            form_errors: Vec::new(),
        }
    }

    /// Sets a field value. Unknown names are ignored.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        if let Some(field) = self.fields.get_mut(name) {
            field.value = value.into();
        }
        self
    }

    /// Sets the recurrence flags so that exactly `kind` is checked and
    /// empties the schedule fields only other kinds use.
    pub fn set_kind(&mut self, kind: RecurrenceKind) -> &mut Self {
        for flag in [RecurrenceKind::Daily, RecurrenceKind::Weekly, RecurrenceKind::Monthly] {
            let value = if flag == kind { "true" } else { "" };
            self.set(flag.flag(), value);
        }
        if kind != RecurrenceKind::Weekly {
            self.set("execution_day", "");
        }
        if kind != RecurrenceKind::Monthly {
            self.set("execution_date", "");
        }
        self
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|field| field.value.as_str())
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.get(name)
    }

    /// Messages that belong to the form as a whole, not to one field.
    pub fn form_errors(&self) -> &[String] {
        &self.form_errors
    }

    pub fn has_errors(&self) -> bool {
        !self.form_errors.is_empty() || self.fields.values().any(|field| field.invalid)
    }

    /// Marks fields invalid with the first message the server gave for each.
    /// Messages for keys that name no field become form-level errors.
    pub fn apply_errors(&mut self, errors: &FieldErrors) {
        self.clear_errors();
        for (name, message) in errors.first_messages() {
            match self.fields.get_mut(name) {
                Some(field) => {
                    field.invalid = true;
                    field.feedback = Some(message.to_string());
                }
                None => self.form_errors.push(message.to_string()),
            }
        }
    }

    pub fn clear_errors(&mut self) {
        for field in self.fields.values_mut() {
            field.invalid = false;
            field.feedback = None;
        }
        self.form_errors.clear();
    }

    /// Empties every value and every mark.
    pub fn reset(&mut self) {
        for field in self.fields.values_mut() {
            *field = FieldState::default();
        }
        self.form_errors.clear();
    }

    /// Fills the form from a task fetched for editing and clears old marks.
    pub fn populate(&mut self, task: &Task) {
        self.clear_errors();
        self.set("title", task.title.as_str());
        self.set("description", task.description.as_str());
        self.set("execution_time", task.schedule.time().format("%H:%M").to_string());
        self.set_kind(task.schedule.kind());
        match task.schedule {
            Schedule::Daily { .. } => {}
            Schedule::Weekly { day, .. } => {
                self.set("execution_day", day.name());
            }
            Schedule::Monthly { date, .. } => {
                self.set("execution_date", date.to_string());
            }
        }
    }

    /// JSON body for create and update, owned by `user`.
    ///
    /// Flags become booleans, blank schedule fields become `null` and a
    /// numeric day of month becomes a number. Anything else is sent as typed
    /// so the server can report it.
    pub fn payload(&self, user: i64) -> Value {
        let mut body = Map::new();
        for (name, field) in &self.fields {
            let value = field.value.trim();
            let json = match name.as_str() {
                "daily" | "weekly" | "monthly" => Value::Bool(is_checked(value)),
                "execution_time" | "execution_day" if value.is_empty() => Value::Null,
                "execution_date" if value.is_empty() => Value::Null,
                "execution_date" => value
                    .parse::<u32>()
                    .map(Value::from)
                    .unwrap_or_else(|_| Value::String(value.to_string())),
                _ => Value::String(field.value.clone()),
            };
            body.insert(name.clone(), json);
        }
        body.insert("user".to_string(), Value::from(user));
        Value::Object(body)
    }
}

fn is_checked(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "true" | "on" | "1" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_types_flags_and_blank_fields() {
        let mut form = TaskForm::new();
        form.set("title", "Pay rent").set("execution_time", "09:00").set_kind(RecurrenceKind::Daily);

        let body = form.payload(3);
        assert_eq!(body["daily"], json!(true));
        assert_eq!(body["weekly"], json!(false));
        assert_eq!(body["execution_day"], Value::Null);
        assert_eq!(body["execution_date"], Value::Null);
        assert_eq!(body["user"], json!(3));
    }

    #[test]
    fn unknown_error_keys_become_form_errors() {
        let errors: FieldErrors = serde_json::from_value(json!({
            "title": ["This field may not be blank."],
            "type error": ["Please select one and only one of 'Daily', 'Weekly', or 'Monthly'."]
        }))
        .unwrap();

        let mut form = TaskForm::new();
        form.apply_errors(&errors);
        assert_eq!(
            form.form_errors(),
            ["Please select one and only one of 'Daily', 'Weekly', or 'Monthly'.".to_string()]
        );
        assert_eq!(form.field("title").unwrap().feedback.as_deref(), Some("This field may not be blank."));

        form.clear_errors();
        assert!(form.form_errors().is_empty());
        assert!(!form.has_errors());
    }

    #[test]
    fn switching_kind_drops_other_kinds_fields() {
        let mut form = TaskForm::new();
        form.set("title", "Gym")
            .set("execution_time", "18:30")
            .set_kind(RecurrenceKind::Weekly)
            .set("execution_day", "Friday");

        form.set_kind(RecurrenceKind::Daily);
        let body = form.payload(1);
        assert_eq!(body["daily"], json!(true));
        assert_eq!(body["weekly"], json!(false));
        assert!(body["execution_day"].is_null());
        assert!(body["execution_date"].is_null());
        assert_eq!(body["execution_time"], json!("18:30"));

        form.set_kind(RecurrenceKind::Monthly).set("execution_date", "15");
        form.set_kind(RecurrenceKind::Weekly);
        let body = form.payload(1);
        assert!(body["execution_date"].is_null());
        assert!(body["execution_day"].is_null());
    }
}
