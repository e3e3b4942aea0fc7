use anyhow::Result;
use bookcal_core::BookcalConfig;
use owo_colors::OwoColorize;

use crate::config::{Overrides, Settings};

pub fn run(overrides: &Overrides) -> Result<()> {
    let config_path = BookcalConfig::config_path()?;
    let config = BookcalConfig::load()?;
    let settings = Settings::from_config(&config, overrides)?;

    let effective = BookcalConfig {
        week_start: settings.options.week_start,
        grid_policy: settings.options.policy,
        preselect_today: settings.options.preselect_today,
        booking_url: settings.booking_url.clone(),
    };

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!();

    println!("{}", "Effective settings".bold());
    println!("  today = \"{}\"", settings.today);
    for line in effective.to_toml()?.lines() {
        println!("  {}", line);
    }
    if effective != config {
        println!("  {}", "(some values overridden by command-line flags)".dimmed());
    }

    Ok(())
}
