use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::validation::WorkingHours;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub booking: BookingConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BookingConfig {
    pub open_time: Option<String>,
    pub close_time: Option<String>,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self { open_time: Some("09:00".to_string()), close_time: Some("17:00".to_string()) }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { booking: BookingConfig::default() }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        // If config doesn't exist, create default
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save()?;
            return Ok(default_config);
        }

        // Read and parse config file
        let content = fs::read_to_string(&config_path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path()?;

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Serialize and save config
        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content).context("Failed to write config file")?;

        Ok(())
    }

    /// Booking window from config, falling back to 09:00-17:00 for any bound
    /// left unset.
    pub fn working_hours(&self) -> WorkingHours {
        let default = WorkingHours::default();
        WorkingHours {
            open: self.booking.open_time.clone().unwrap_or(default.open),
            close: self.booking.close_time.clone().unwrap_or(default.close),
        }
    }
}

fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "appointly", "appointly")
        .context("Failed to determine config directory")?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.booking.open_time, Some("09:00".to_string()));
        assert_eq!(config.booking.close_time, Some("17:00".to_string()));
        assert_eq!(config.working_hours(), WorkingHours::default());
    }

    #[test]
    fn test_unset_bounds_fall_back_to_defaults() {
        let config = Config { booking: BookingConfig { open_time: None, close_time: None } };
        let hours = config.working_hours();
        assert_eq!(hours.open, "09:00");
        assert_eq!(hours.close, "17:00");
    }

    #[test]
    fn test_config_save_load() -> Result<()> {
        // Create temporary directory
        let temp_dir = tempdir()?;

        // Set up temporary config directory
        env::set_var("XDG_CONFIG_HOME", temp_dir.path());

        // Create and save config
        let config = Config {
            booking: BookingConfig {
                open_time: Some("08:00".to_string()),
                close_time: Some("12:00".to_string()),
            },
        };
        config.save()?;

        // Load config
        let loaded = Config::load()?;

        // Verify loaded config matches saved config
        assert_eq!(loaded.booking.open_time, config.booking.open_time);
        assert_eq!(loaded.working_hours(), WorkingHours::new("08:00", "12:00"));

        Ok(())
    }
}
