use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "studylab", version, about = "Studylab CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan today's study session from a mood/energy/sleep check-in
    Plan {
        /// Mood rating, 1 (very low) to 5 (great)
        #[arg(long)]
        mood: u8,
        /// Energy rating, 1 (very low) to 5 (very high)
        #[arg(long)]
        energy: u8,
        /// Hours slept last night
        #[arg(long)]
        sleep: f64,
    },
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Study technique catalog and usage
    Technique {
        #[command(subcommand)]
        action: commands::technique::TechniqueAction,
    },
    /// Planning history
    History {
        #[command(subcommand)]
        action: commands::history::HistoryAction,
    },
    /// Focus timer
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Plan { mood, energy, sleep } => commands::plan::run(mood, energy, sleep),
        Commands::Task { action } => commands::task::run(action),
        Commands::Technique { action } => commands::technique::run(action),
        Commands::History { action } => commands::history::run(action),
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
