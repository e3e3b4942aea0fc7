use anyhow::{Context, Result};
use bookcal_core::date::parse_date;
use bookcal_core::{BookcalConfig, ViewOptions};
use chrono::NaiveDate;

/// Per-invocation flags that take precedence over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub today: Option<String>,
    pub policy: Option<String>,
    pub week_start: Option<String>,
}

/// Everything a command needs to build a calendar view.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Captured once per run.
    pub today: NaiveDate,
    pub options: ViewOptions,
    pub booking_url: Option<String>,
}

impl Settings {
    pub fn resolve(overrides: &Overrides) -> Result<Self> {
        let config = BookcalConfig::load().context("Could not load config")?;
        Self::from_config(&config, overrides)
    }

    pub fn from_config(config: &BookcalConfig, overrides: &Overrides) -> Result<Self> {
        let mut options = config.view_options();

        if let Some(policy) = &overrides.policy {
            options.policy = policy.parse()?;
        }
        if let Some(week_start) = &overrides.week_start {
            options.week_start = week_start.parse()?;
        }

        let today = match &overrides.today {
            Some(s) => parse_date(s)?,
            None => chrono::Local::now().date_naive(),
        };

        tracing::info!(%today, ?options, "resolved settings");

        Ok(Settings {
            today,
            options,
            booking_url: config.booking_url.clone(),
        })
    }
}
