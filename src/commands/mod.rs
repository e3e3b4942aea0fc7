pub mod book;
pub mod config;
pub mod pick;
pub mod show;

use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use crate::booking;
use crate::config::Settings;

/// Report a chosen date and pass it on to the booking page.
fn confirm_booking(settings: &Settings, date: NaiveDate, open_browser: bool) -> Result<()> {
    println!("{}", format!("  Chosen: {}", date.format("%A %-d %B %Y")).green());

    match booking::hand_off(settings.booking_url.as_deref(), date, open_browser)? {
        Some(url) if open_browser => println!("  {} {}", "Opened".dimmed(), url),
        Some(url) => println!("  {}", url),
        None => println!(
            "  {}",
            "Set booking_url in your config to open a scheduling page.".dimmed()
        ),
    }

    Ok(())
}
