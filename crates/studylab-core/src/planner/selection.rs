//! Greedy task selection under a time budget.

use chrono::NaiveDate;

use crate::task::{Difficulty, Task};

/// Outcome of a selection pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    /// Chosen tasks in suggested order.
    pub chosen: Vec<Task>,
    /// Sum of chosen estimates. May exceed the budget on the
    /// single-task fallback path.
    pub total_minutes: u32,
    /// Highest difficulty level among chosen tasks (0 when none).
    pub max_difficulty: u8,
}

/// Pick pending tasks that fit the budget.
///
/// Eligible tasks are sorted by due date (unparseable or missing dates
/// last), estimate as tie-break, then accumulated greedily: a task that
/// does not fit is skipped, not a stopping point, so a later shorter task
/// can still make the cut. When nothing fits, the first task in sorted
/// order is selected anyway so the caller always has one suggestion.
///
/// This is a best-effort heuristic, not bin-packing; callers rely on this
/// exact sequential behavior.
pub fn select_tasks(tasks: &[Task], allowed: &[Difficulty], budget: u32) -> Selection {
    let mut pending: Vec<&Task> = tasks
        .iter()
        .filter(|t| !t.completed && allowed.contains(&t.difficulty))
        .collect();

    if pending.is_empty() {
        return Selection::default();
    }

    // Stable sort: equal keys keep their input order.
    pending.sort_by_key(|t| (t.due().unwrap_or(NaiveDate::MAX), t.estimated_minutes));

    let mut chosen: Vec<Task> = Vec::new();
    let mut total: u32 = 0;
    for task in &pending {
        if total + task.estimated_minutes <= budget {
            total += task.estimated_minutes;
            chosen.push((*task).clone());
        }
    }

    if chosen.is_empty() {
        let first = pending[0].clone();
        total = first.estimated_minutes;
        chosen.push(first);
    }

    let max_difficulty = chosen
        .iter()
        .map(|t| t.difficulty.level())
        .max()
        .unwrap_or(0);

    Selection {
        chosen,
        total_minutes: total,
        max_difficulty,
    }
}
