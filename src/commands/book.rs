use std::cell::Cell;

use anyhow::Result;
use bookcal_core::date::parse_date;
use bookcal_core::CalendarView;

use crate::config::Settings;
use crate::render::Render;

pub fn run(settings: &Settings, date: &str, open_browser: bool) -> Result<()> {
    let date = parse_date(date)?;

    let chosen = Cell::new(None);
    let mut view = CalendarView::new(settings.today, settings.options, |d| chosen.set(Some(d)))?;

    if !view.select_date(date) {
        anyhow::bail!("{} is in the past (today is {})", date, settings.today);
    }

    while !view.displayed_month().contains(date) && view.go_to_next_month() {}
    println!("{}", view.visible_grid().render());
    println!();

    match chosen.take() {
        Some(date) => super::confirm_booking(settings, date, open_browser),
        None => Ok(()),
    }
}
