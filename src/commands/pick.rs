use std::cell::Cell;

use anyhow::Result;
use bookcal_core::CalendarView;
use dialoguer::Input;
use owo_colors::OwoColorize;

use crate::config::Settings;
use crate::render::{navigation_hint, Render};

#[derive(Debug, PartialEq, Eq)]
enum Key {
    Next,
    Previous,
    Quit,
    Day(u32),
}

fn parse_key(input: &str) -> Option<Key> {
    match input.trim().to_ascii_lowercase().as_str() {
        "n" | "next" | ">" => Some(Key::Next),
        "p" | "prev" | "previous" | "<" => Some(Key::Previous),
        "q" | "quit" | "exit" => Some(Key::Quit),
        other => other.parse().ok().filter(|d| (1..=31).contains(d)).map(Key::Day),
    }
}

pub fn run(settings: &Settings, open_browser: bool) -> Result<()> {
    let chosen = Cell::new(None);
    let mut view = CalendarView::new(settings.today, settings.options, |d| chosen.set(Some(d)))?;

    loop {
        println!();
        println!("{}", view.visible_grid().render());
        println!("{}", navigation_hint(view.can_go_previous()).dimmed());

        let input: String = Input::new().with_prompt("  Day, n/p or q").interact_text()?;

        match parse_key(&input) {
            Some(Key::Next) => {
                view.go_to_next_month();
            }
            Some(Key::Previous) => {
                if !view.go_to_previous_month() {
                    eprintln!("  {}", "Earlier months are not bookable".yellow());
                }
            }
            Some(Key::Quit) => return Ok(()),
            Some(Key::Day(n)) => {
                let Some(day) = view.visible_grid().day(n).copied() else {
                    eprintln!(
                        "  {}",
                        format!("{} has no day {}", view.displayed_month(), n).red()
                    );
                    continue;
                };

                if !view.select_date(day.date) {
                    eprintln!("  {}", format!("{} is in the past", day.date).red());
                    continue;
                }
            }
            None => {
                eprintln!("  {}", format!("Unrecognised input '{}'", input.trim()).red());
            }
        }

        if let Some(date) = chosen.take() {
            println!();
            println!("{}", view.visible_grid().render());
            println!();
            return super::confirm_booking(settings, date, open_browser);
        }
    }
}
