mod config;

pub use config::{Config, DefaultsConfig, DisplayConfig, ModelConfig, TimeFormat};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the BetterRest data directory, creating it if needed.
///
/// `BETTERREST_HOME` wins when set. Otherwise `~/.config/betterrest`, or
/// `~/.config/betterrest-dev` with `BETTERREST_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("BETTERREST_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("BETTERREST_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("betterrest-dev")
            } else {
                base_dir.join("betterrest")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::SaveFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
