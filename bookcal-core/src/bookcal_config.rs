//! Global bookcal configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::date::WeekStart;
use crate::error::{CalendarError, CalendarResult};
use crate::grid::GridPolicy;
use crate::view::ViewOptions;

/// Configuration at ~/.config/bookcal/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct BookcalConfig {
    #[serde(default)]
    pub week_start: WeekStart,

    #[serde(default)]
    pub grid_policy: GridPolicy,

    #[serde(default)]
    pub preselect_today: bool,

    /// Scheduling page opened when a date is chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_url: Option<String>,
}

impl BookcalConfig {
    pub fn config_path() -> CalendarResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalendarError::Config("Could not determine config directory".into()))?
            .join("bookcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented-out default on first use.
    pub fn load() -> CalendarResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> CalendarResult<Self> {
        let config: BookcalConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| CalendarError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalendarError::Config(e.to_string()))?;

        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalendarResult<()> {
        let contents = "\
# bookcal configuration

# First column of the month grid (\"monday\" or \"sunday\"):
# week_start = \"monday\"

# \"fit\" pads only to the end of the last week,
# \"fixed\" always shows six weeks including neighbouring months:
# grid_policy = \"fit\"

# Start with today selected:
# preselect_today = false

# Scheduling page opened for a chosen date:
# booking_url = \"https://calendly.com/your-team/intro-call\"
";

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, contents)?;

        Ok(())
    }

    /// Render the effective settings as TOML.
    pub fn to_toml(&self) -> CalendarResult<String> {
        toml::to_string_pretty(self).map_err(|e| CalendarError::Config(e.to_string()))
    }

    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            week_start: self.week_start,
            policy: self.grid_policy,
            preselect_today: self.preselect_today,
        }
    }
}
