//! The daily planning command.

use studylab_core::planner;
use studylab_core::task::deadline_info;
use studylab_core::technique::motivation_line;
use studylab_core::{Checkin, Config, PlannerStore};

pub fn run(mood: u8, energy: u8, sleep: f64) -> Result<(), Box<dyn std::error::Error>> {
    let checkin = Checkin::new(mood, energy, sleep)?;
    let store = PlannerStore::open()?;
    let plan = planner::plan_today(&store, &checkin)?;

    println!(
        "Check-in: mood {} ({}), energy {} ({}), slept {:.1}h",
        checkin.mood,
        checkin.mood_label(),
        checkin.energy,
        checkin.energy_label(),
        checkin.sleep_hours
    );
    for msg in &plan.messages {
        println!("{msg}");
    }

    if !plan.tasks.is_empty() {
        println!();
        println!("Suggested tasks:");
        for task in &plan.tasks {
            let deadline = deadline_info(task);
            println!(
                "  [{}] {} - {} ({}, {} min, {})",
                task.id,
                task.subject,
                task.topic,
                task.difficulty,
                task.estimated_minutes,
                deadline.label
            );
        }
    }

    let mut rng = rand::thread_rng();
    let tech = planner::suggest_technique(checkin.mood, checkin.energy, plan.max_difficulty, &mut rng);
    println!();
    println!("Suggested technique: {}", tech.name);
    println!("  {}", tech.how);
    println!("  Log it with: studylab technique use {}", tech.code);

    let config = Config::load_or_default();
    if config.display.show_motivation {
        println!();
        println!("{}", motivation_line(&mut rng));
    }

    Ok(())
}
