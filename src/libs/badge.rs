//! Completion badge shown next to the task table title.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    /// The table is empty.
    Hidden,
    AllComplete { completed: usize, total: usize },
    NotComplete { completed: usize, total: usize },
}

impl Badge {
    pub fn compute(completed: usize, total: usize) -> Self {
        if total == 0 {
            Badge::Hidden
        } else if completed == total {
            Badge::AllComplete { completed, total }
        } else {
            Badge::NotComplete { completed, total }
        }
    }

    /// `(completed/total)`, or `None` when hidden.
    pub fn text(&self) -> Option<String> {
        match self {
            Badge::Hidden => None,
            Badge::AllComplete { completed, total } | Badge::NotComplete { completed, total } => {
                Some(format!("({}/{})", completed, total))
            }
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, self.text()) {
            (Badge::AllComplete { .. }, Some(text)) => write!(f, "{} ✔", text),
            (Badge::NotComplete { .. }, Some(text)) => write!(f, "{} ✘", text),
            _ => Ok(()),
        }
    }
}
