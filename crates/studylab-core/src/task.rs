//! Task types and deadline helpers.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Identifier of a task. Assigned by the store, never reused.
pub type TaskId = u64;

/// Task difficulty, used for gating under low mood/energy/sleep.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Numeric level: easy=1, medium=2, hard=3.
    pub fn level(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    /// All difficulties, in ascending order.
    pub fn all() -> [Difficulty; 3] {
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(s)
    }
}

impl FromStr for Difficulty {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(ValidationError::InvalidValue {
                field: "difficulty",
                message: format!("'{other}' is not one of easy, medium, hard"),
            }),
        }
    }
}

/// A study task.
///
/// `due_date` keeps the raw string the user supplied. An unparseable or
/// empty value means "no due date" and sorts after every dated task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub subject: String,
    pub topic: String,
    pub difficulty: Difficulty,
    pub estimated_minutes: u32,
    pub due_date: String,
    pub completed: bool,
}

impl Task {
    /// Parse the due date, if it is a valid `YYYY-MM-DD` string.
    pub fn due(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.due_date, "%Y-%m-%d").ok()
    }
}

/// Caller-supplied fields for a new task. The store assigns the id and
/// initializes `completed = false`.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub subject: String,
    pub topic: String,
    pub difficulty: Difficulty,
    pub estimated_minutes: u32,
    pub due_date: String,
}

impl TaskDraft {
    /// Check the draft invariants: non-empty subject and topic, positive
    /// estimate. Due dates are not validated; a bad one is data.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.subject.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "subject",
                message: "must not be empty".to_string(),
            });
        }
        if self.topic.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "topic",
                message: "must not be empty".to_string(),
            });
        }
        if self.estimated_minutes == 0 {
            return Err(ValidationError::InvalidValue {
                field: "estimated_minutes",
                message: "must be a positive number of minutes".to_string(),
            });
        }
        Ok(())
    }
}

/// Deadline summary for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeadlineInfo {
    /// Days until due: negative when overdue, absent without a due date.
    pub days_delta: Option<i64>,
    /// Human-readable label ("today", "in 3 days", "2 day(s) overdue", ...).
    pub label: String,
}

/// Deadline info relative to the current local date.
pub fn deadline_info(task: &Task) -> DeadlineInfo {
    deadline_info_on(task, Local::now().date_naive())
}

/// Deadline info relative to an explicit date.
pub fn deadline_info_on(task: &Task, today: NaiveDate) -> DeadlineInfo {
    let Some(due) = task.due() else {
        return DeadlineInfo {
            days_delta: None,
            label: "no due date".to_string(),
        };
    };

    let delta = (due - today).num_days();
    let label = if delta < 0 {
        format!("{} day(s) overdue", -delta)
    } else if delta == 0 {
        "today".to_string()
    } else if delta == 1 {
        "in 1 day".to_string()
    } else {
        format!("in {delta} days")
    };

    DeadlineInfo {
        days_delta: Some(delta),
        label,
    }
}
