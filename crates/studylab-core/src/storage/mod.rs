mod config;
pub mod store;

pub use config::Config;
pub use store::{Document, PlannerStore, PlanningLog, TechniqueUsage};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/studylab[-dev]/` based on STUDYLAB_ENV.
///
/// Set STUDYLAB_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("STUDYLAB_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("studylab-dev")
    } else {
        base_dir.join("studylab")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::DataDir(e.to_string()))?;
    Ok(dir)
}
