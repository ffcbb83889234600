//! Configuration commands for CLI.

use clap::Subcommand;
use studylab_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the resolved configuration and its path
    Show,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let path = Config::path()?;
            let config = Config::load()?;
            println!("# {}", path.display());
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }
    Ok(())
}
