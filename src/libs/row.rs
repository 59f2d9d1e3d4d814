//! Display rows: the projection of a [`Task`] into the task table.

use super::formatter::{schedule_label, truncate_description};
use super::task::{Task, TaskId};

/// State of the "See More" / "See Less" links of a long description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionToggle {
    /// Preview shown, "See More" visible.
    Collapsed,
    /// Full text shown, "See Less" visible.
    Expanded,
    /// Links exist but the description is short enough to need neither.
    Hidden,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    pub truncated: String,
    pub full: String,
    pub toggle: Option<DescriptionToggle>,
}

impl Description {
    pub fn new(full: &str) -> Self {
        let mut description = Self {
            truncated: String::new(),
            full: String::new(),
            toggle: None,
        };
        description.set(full);
        description
    }

    /// Replaces the text, creating the toggle links if the new text needs them.
    ///
    /// A long text always comes back collapsed. A short one hides links that
    /// already exist and never creates them.
    pub fn set(&mut self, full: &str) {
        let (truncated, cut) = truncate_description(full);
        self.truncated = truncated;
        self.full = full.to_string();
        self.toggle = match (cut, self.toggle) {
            (true, _) => Some(DescriptionToggle::Collapsed),
            (false, Some(_)) => Some(DescriptionToggle::Hidden),
            (false, None) => None,
        };
    }

    /// The text currently on screen.
    pub fn visible(&self) -> &str {
        match self.toggle {
            Some(DescriptionToggle::Expanded) => &self.full,
            _ => &self.truncated,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub id: TaskId,
    /// Value of the row-number column; only meaningful for rows on the current page.
    pub number: usize,
    pub title: String,
    pub schedule: String,
    pub description: Description,
    pub completed: bool,
}

impl DisplayRow {
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id,
            number: 0,
            title: task.title.clone(),
            schedule: schedule_label(&task.schedule),
            description: Description::new(&task.description),
            completed: task.completed,
        }
    }

    /// Re-renders the row from a fresh copy of its task, keeping its place
    /// and completion state.
    pub fn refresh(&mut self, task: &Task) {
        self.title = task.title.clone();
        self.schedule = schedule_label(&task.schedule);
        self.description.set(&task.description);
    }

    /// Label of the row's complete button.
    pub fn action_label(&self) -> &'static str {
        if self.completed {
            "uncomplete"
        } else {
            "complete"
        }
    }

    /// "See More": reveals the full text of a collapsed description.
    pub fn expand(&mut self) {
        if self.description.toggle == Some(DescriptionToggle::Collapsed) {
            self.description.toggle = Some(DescriptionToggle::Expanded);
        }
    }

    /// "See Less": returns an expanded description to its preview.
    pub fn collapse(&mut self) {
        if self.description.toggle == Some(DescriptionToggle::Expanded) {
            self.description.toggle = Some(DescriptionToggle::Collapsed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::formatter::DESCRIPTION_PREVIEW_LEN;

    #[test]
    fn see_more_and_see_less() {
        let long = "word ".repeat(DESCRIPTION_PREVIEW_LEN);
        let mut description = Description::new(&long);
        assert_eq!(description.toggle, Some(DescriptionToggle::Collapsed));
        assert!(description.visible().ends_with("..."));

        let mut row = DisplayRow {
            id: 1,
            number: 1,
            title: "t".into(),
            schedule: "9:00 a.m.".into(),
            description: description.clone(),
            completed: false,
        };
        row.expand();
        assert_eq!(row.description.visible(), long);
        row.collapse();
        assert_eq!(row.description.visible(), description.truncated);

        description.set("short");
        assert_eq!(description.toggle, Some(DescriptionToggle::Hidden));
        assert_eq!(Description::new("short").toggle, None);
    }
}
