//! Terminal focus timer.
//!
//! Pure presentation: a countdown re-rendered once a second. The core
//! has no notion of a running timer, and nothing here is persisted.

use clap::Subcommand;
use std::io::Write;
use std::time::{Duration, Instant};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start a countdown
    Start {
        /// Length in minutes
        #[arg(long, default_value_t = 25)]
        minutes: u64,
        /// Label shown next to the countdown
        #[arg(long, default_value = "Focus block")]
        label: String,
    },
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TimerAction::Start { minutes, label } => {
            let end = Instant::now() + Duration::from_secs(minutes * 60);
            let mut stdout = std::io::stdout();

            loop {
                let remaining = end.saturating_duration_since(Instant::now()).as_secs();
                if remaining == 0 {
                    break;
                }
                let (m, s) = (remaining / 60, remaining % 60);
                print!("\r{label}: {m:02}:{s:02} ");
                stdout.flush()?;
                std::thread::sleep(Duration::from_secs(1));
            }

            println!("\r{label}: 00:00");
            println!("Time's up!");
        }
    }
    Ok(())
}
