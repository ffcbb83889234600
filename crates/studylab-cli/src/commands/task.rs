//! Task management commands for CLI.

use clap::Subcommand;
use studylab_core::task::{deadline_info, TaskDraft, TaskId};
use studylab_core::PlannerStore;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task
    Add {
        /// Subject (e.g. "Math")
        subject: String,
        /// Topic within the subject (e.g. "Integrals")
        topic: String,
        /// Difficulty: easy, medium, or hard
        #[arg(long, default_value = "medium")]
        difficulty: String,
        /// Estimated minutes of work
        #[arg(long, default_value_t = 30)]
        minutes: u32,
        /// Due date as YYYY-MM-DD (anything else counts as no due date)
        #[arg(long, default_value = "")]
        due: String,
    },
    /// List tasks
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Only pending tasks
        #[arg(long)]
        pending: bool,
    },
    /// Mark a task completed
    Done {
        /// Task ID
        id: TaskId,
    },
    /// Mark a task pending again
    Undone {
        /// Task ID
        id: TaskId,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: TaskId,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = PlannerStore::open()?;

    match action {
        TaskAction::Add {
            subject,
            topic,
            difficulty,
            minutes,
            due,
        } => {
            let draft = TaskDraft {
                subject,
                topic,
                difficulty: difficulty.parse()?,
                estimated_minutes: minutes,
                due_date: due,
            };
            let task = store.add_task(draft)?;
            println!("Task added: {}", task.id);
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::List { json, pending } => {
            let mut tasks = store.list_tasks()?;
            if pending {
                tasks.retain(|t| !t.completed);
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else if tasks.is_empty() {
                println!("No tasks yet.");
            } else {
                for task in &tasks {
                    let status = if task.completed { "x" } else { " " };
                    let deadline = deadline_info(task);
                    println!(
                        "[{status}] {} {} - {} ({}, {} min, {})",
                        task.id,
                        task.subject,
                        task.topic,
                        task.difficulty,
                        task.estimated_minutes,
                        deadline.label
                    );
                }
            }
        }
        TaskAction::Done { id } => {
            store.set_task_completed(id, true)?;
            println!("Task {id} marked done.");
        }
        TaskAction::Undone { id } => {
            store.set_task_completed(id, false)?;
            println!("Task {id} marked pending.");
        }
        TaskAction::Delete { id } => {
            if store.delete_task(id)? {
                println!("Task deleted: {id}");
            } else {
                println!("Task not found: {id}");
            }
        }
    }
    Ok(())
}
