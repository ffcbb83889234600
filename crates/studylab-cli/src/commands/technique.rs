//! Study technique commands for CLI.

use clap::Subcommand;
use studylab_core::planner::suggest_technique;
use studylab_core::technique::CATALOG;
use studylab_core::{Checkin, PlannerStore};

#[derive(Subcommand)]
pub enum TechniqueAction {
    /// List the technique catalog
    List,
    /// Suggest a technique for a check-in
    Suggest {
        /// Mood rating, 1 to 5
        #[arg(long)]
        mood: u8,
        /// Energy rating, 1 to 5
        #[arg(long)]
        energy: u8,
        /// Highest difficulty level planned today (0 to 3)
        #[arg(long, default_value_t = 0)]
        max_difficulty: u8,
    },
    /// Log one use of a technique
    Use {
        /// Technique code (see `technique list`)
        code: String,
    },
    /// Show usage counters
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: TechniqueAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TechniqueAction::List => {
            for tech in &CATALOG {
                println!("{} ({})", tech.name, tech.code);
                println!("  {}", tech.how);
            }
        }
        TechniqueAction::Suggest {
            mood,
            energy,
            max_difficulty,
        } => {
            // Reuse check-in validation for the rating ranges; sleep is
            // irrelevant to suggestion.
            Checkin::new(mood, energy, 0.0)?;
            let mut rng = rand::thread_rng();
            let tech = suggest_technique(mood, energy, max_difficulty, &mut rng);
            println!("{} ({})", tech.name, tech.code);
            println!("  {}", tech.how);
        }
        TechniqueAction::Use { code } => {
            let store = PlannerStore::open()?;
            store.log_technique_usage(&code)?;
            println!("Technique logged: {code}");
        }
        TechniqueAction::Stats { json } => {
            let store = PlannerStore::open()?;
            let stats = store.technique_stats()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else if stats.is_empty() {
                println!("No techniques used yet.");
            } else {
                for row in &stats {
                    println!("{}: used {} day(s)", row.name, row.count);
                }
            }
        }
    }
    Ok(())
}
