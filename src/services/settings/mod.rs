// Settings service
// Resolves and loads the TOML configuration file

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

/// Environment variable naming an explicit configuration file
pub const CONFIG_ENV_VAR: &str = "WEEK_CALENDAR_CONFIG";

const CONFIG_FILE_NAME: &str = "config.toml";

pub struct SettingsService {
    path: Option<PathBuf>,
}

impl SettingsService {
    /// Resolve the configuration path: explicit path, then the environment,
    /// then the platform config directory.
    pub fn new(explicit: Option<PathBuf>) -> Self {
        let path = explicit
            .or_else(|| env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
            .or_else(default_config_path);
        Self { path }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Load settings. A missing file yields the defaults.
    pub fn load(&self) -> Result<Settings> {
        let Some(path) = self.path.as_deref() else {
            log::warn!("No configuration directory available, using default settings");
            return Ok(Settings::default());
        };

        if !path.exists() {
            log::debug!("No configuration at {}, using defaults", path.display());
            return Ok(Settings::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let settings: Settings = toml::from_str(&data)
            .with_context(|| format!("failed to parse settings in {}", path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", path.display(), e))?;

        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "KenBoyle", "WeekCalendar")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
