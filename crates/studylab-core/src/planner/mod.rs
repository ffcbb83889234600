//! Planning decision logic.
//!
//! Everything in this module is a deterministic function of the daily
//! check-in and the task list, except technique suggestion, which draws
//! from an injected random source. The planning transaction
//! ([`plan_today`]) is the only writer: it appends one log entry per
//! invocation that selects at least one task.

pub mod selection;
pub mod suggestion;

pub use selection::{select_tasks, Selection};
pub use suggestion::suggest_technique;

use chrono::{Local, NaiveDate};
use log::info;

use crate::checkin::Checkin;
use crate::error::Result;
use crate::storage::{PlannerStore, PlanningLog};
use crate::task::{Difficulty, Task};

/// Message returned when nothing is eligible today.
pub const NO_TASKS_MESSAGE: &str = "No suitable tasks today. Rest is allowed.";

/// Daily study budget in minutes.
///
/// Sleep deprivation overrides mood and energy entirely: under five hours
/// of sleep the budget is the 45-minute minimum even on a great day.
pub fn daily_budget(checkin: &Checkin) -> u32 {
    if checkin.sleep_hours < 5.0 {
        return 45;
    }
    match checkin.mood + checkin.energy {
        0..=4 => 60,
        5..=6 => 90,
        7..=8 => 120,
        _ => 180,
    }
}

/// Difficulties eligible under the current check-in. Never empty.
///
/// Computed independently of the budget; the two combine downstream in
/// task selection.
pub fn allowed_difficulties(checkin: &Checkin) -> Vec<Difficulty> {
    if checkin.sleep_hours < 5.0 || checkin.mood <= 2 || checkin.energy <= 2 {
        vec![Difficulty::Easy]
    } else if checkin.mood == 3 || checkin.energy == 3 {
        vec![Difficulty::Easy, Difficulty::Medium]
    } else {
        Difficulty::all().to_vec()
    }
}

/// Result of one planning invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanResult {
    /// Study budget for the day in minutes.
    pub budget: u32,
    /// Chosen tasks, in suggested order.
    pub tasks: Vec<Task>,
    /// Human-readable messages for display.
    pub messages: Vec<String>,
    /// Highest difficulty level among chosen tasks (0 when none).
    pub max_difficulty: u8,
}

/// Run the planning transaction for today's local date.
pub fn plan_today(store: &PlannerStore, checkin: &Checkin) -> Result<PlanResult> {
    plan_on(store, checkin, Local::now().date_naive())
}

/// Run the planning transaction for an explicit date.
///
/// Loads the document, derives budget and gating, selects tasks, and --
/// only when something was selected -- appends a planning log and saves
/// before returning. The no-suitable-tasks outcome is a normal result and
/// leaves the store untouched.
pub fn plan_on(store: &PlannerStore, checkin: &Checkin, today: NaiveDate) -> Result<PlanResult> {
    let mut doc = store.load()?;

    let budget = daily_budget(checkin);
    let allowed = allowed_difficulties(checkin);
    let selection = select_tasks(&doc.tasks, &allowed, budget);

    if selection.chosen.is_empty() {
        return Ok(PlanResult {
            budget,
            tasks: Vec::new(),
            messages: vec![NO_TASKS_MESSAGE.to_string()],
            max_difficulty: 0,
        });
    }

    doc.logs.push(PlanningLog {
        date: today,
        mood: checkin.mood,
        energy: checkin.energy,
        sleep_hours: checkin.sleep_hours,
        planned_task_ids: selection.chosen.iter().map(|t| t.id).collect(),
        completed_task_ids: Vec::new(),
        technique_used: None,
    });
    store.save(&doc)?;

    info!(
        "planned {} task(s), {} of {} budget minutes",
        selection.chosen.len(),
        selection.total_minutes,
        budget
    );

    Ok(PlanResult {
        budget,
        messages: vec![format!("Today's budget: ~{budget} minutes.")],
        max_difficulty: selection.max_difficulty,
        tasks: selection.chosen,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskDraft;
    use proptest::prelude::*;
    use tempfile::tempdir;

    fn checkin(mood: u8, energy: u8, sleep: f64) -> Checkin {
        Checkin::new(mood, energy, sleep).unwrap()
    }

    #[test]
    fn budget_table() {
        // Sleep deprivation wins regardless of mood/energy.
        assert_eq!(daily_budget(&checkin(5, 5, 4.5)), 45);
        assert_eq!(daily_budget(&checkin(1, 1, 0.0)), 45);

        assert_eq!(daily_budget(&checkin(2, 2, 8.0)), 60);
        assert_eq!(daily_budget(&checkin(3, 3, 8.0)), 90);
        assert_eq!(daily_budget(&checkin(4, 4, 8.0)), 120);
        assert_eq!(daily_budget(&checkin(5, 4, 8.0)), 180);
        assert_eq!(daily_budget(&checkin(5, 5, 8.0)), 180);
    }

    #[test]
    fn budget_boundary_between_sums_four_and_five() {
        assert_eq!(daily_budget(&checkin(2, 2, 7.0)), 60);
        assert_eq!(daily_budget(&checkin(2, 3, 7.0)), 90);
    }

    #[test]
    fn gating_table() {
        assert_eq!(allowed_difficulties(&checkin(5, 5, 4.0)), vec![Difficulty::Easy]);
        assert_eq!(allowed_difficulties(&checkin(2, 5, 8.0)), vec![Difficulty::Easy]);
        assert_eq!(allowed_difficulties(&checkin(5, 2, 8.0)), vec![Difficulty::Easy]);
        assert_eq!(
            allowed_difficulties(&checkin(3, 5, 8.0)),
            vec![Difficulty::Easy, Difficulty::Medium]
        );
        assert_eq!(
            allowed_difficulties(&checkin(5, 3, 8.0)),
            vec![Difficulty::Easy, Difficulty::Medium]
        );
        assert_eq!(
            allowed_difficulties(&checkin(4, 4, 8.0)),
            vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
        );
    }

    fn draft(subject: &str, difficulty: Difficulty, minutes: u32, due: &str) -> TaskDraft {
        TaskDraft {
            subject: subject.to_string(),
            topic: "Topic".to_string(),
            difficulty,
            estimated_minutes: minutes,
            due_date: due.to_string(),
        }
    }

    #[test]
    fn plan_with_eligible_tasks_appends_one_log() {
        let dir = tempdir().unwrap();
        let store = PlannerStore::with_path(dir.path().join("planner.json"));
        let task = store
            .add_task(draft("Math", Difficulty::Easy, 30, "2099-01-01"))
            .unwrap();

        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let result = plan_on(&store, &checkin(4, 4, 8.0), today).unwrap();

        assert_eq!(result.budget, 120);
        assert_eq!(result.tasks.len(), 1);
        assert_eq!(result.max_difficulty, 1);
        assert_eq!(result.messages, vec!["Today's budget: ~120 minutes."]);

        let logs = store.list_logs().unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].date, today);
        assert_eq!(logs[0].mood, 4);
        assert_eq!(logs[0].energy, 4);
        assert_eq!(logs[0].planned_task_ids, vec![task.id]);
        assert!(logs[0].completed_task_ids.is_empty());
        assert!(logs[0].technique_used.is_none());
    }

    #[test]
    fn plan_without_eligible_tasks_appends_no_log() {
        let dir = tempdir().unwrap();
        let store = PlannerStore::with_path(dir.path().join("planner.json"));
        // A hard task is ineligible under a low-energy check-in.
        store
            .add_task(draft("Physics", Difficulty::Hard, 60, "2099-01-01"))
            .unwrap();

        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let result = plan_on(&store, &checkin(1, 1, 3.0), today).unwrap();

        assert_eq!(result.budget, 45);
        assert!(result.tasks.is_empty());
        assert_eq!(result.max_difficulty, 0);
        assert_eq!(result.messages, vec![NO_TASKS_MESSAGE]);
        assert!(store.list_logs().unwrap().is_empty());
    }

    #[test]
    fn plan_orders_by_due_date_and_takes_all_that_fit() {
        let dir = tempdir().unwrap();
        let store = PlannerStore::with_path(dir.path().join("planner.json"));
        let far = store
            .add_task(draft("Far", Difficulty::Easy, 30, "2099-01-01"))
            .unwrap();
        let near = store
            .add_task(draft("Near", Difficulty::Easy, 20, "2020-01-01"))
            .unwrap();

        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let result = plan_on(&store, &checkin(5, 5, 8.0), today).unwrap();

        assert_eq!(result.budget, 180);
        let ids: Vec<_> = result.tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![near.id, far.id]);
    }

    proptest! {
        #[test]
        fn sleep_deprivation_always_caps_budget(mood in 1u8..=5, energy in 1u8..=5, sleep in 0.0f64..5.0) {
            prop_assert_eq!(daily_budget(&checkin(mood, energy, sleep)), 45);
        }

        #[test]
        fn gating_never_returns_empty(mood in 1u8..=5, energy in 1u8..=5, sleep in 0.0f64..12.0) {
            prop_assert!(!allowed_difficulties(&checkin(mood, energy, sleep)).is_empty());
        }
    }
}
