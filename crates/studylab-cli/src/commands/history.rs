//! Planning history commands for CLI.

use clap::Subcommand;
use studylab_core::PlannerStore;

#[derive(Subcommand)]
pub enum HistoryAction {
    /// Show past planning logs, oldest first
    List {
        /// Only the most recent N entries
        #[arg(long)]
        limit: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: HistoryAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = PlannerStore::open()?;

    match action {
        HistoryAction::List { limit, json } => {
            let mut logs = store.list_logs()?;
            if let Some(n) = limit {
                let skip = logs.len().saturating_sub(n);
                logs.drain(..skip);
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&logs)?);
            } else if logs.is_empty() {
                println!("No planning history yet.");
            } else {
                for log in &logs {
                    let ids: Vec<String> =
                        log.planned_task_ids.iter().map(|id| id.to_string()).collect();
                    println!(
                        "{}  mood {}  energy {}  sleep {:.1}h  planned: [{}]  technique: {}",
                        log.date,
                        log.mood,
                        log.energy,
                        log.sleep_hours,
                        ids.join(", "),
                        log.technique_used.as_deref().unwrap_or("-")
                    );
                }
            }
        }
    }
    Ok(())
}
