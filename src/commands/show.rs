use anyhow::Result;
use bookcal_core::{CalendarView, YearMonth};

use crate::config::Settings;
use crate::render::Render;

pub fn run(settings: &Settings, month: Option<&str>, json: bool) -> Result<()> {
    let mut view = CalendarView::new(settings.today, settings.options, |_| {})?;

    if let Some(month) = month {
        let target: YearMonth = month.parse()?;
        if target < view.displayed_month() {
            anyhow::bail!(
                "{} is before the current month ({})",
                target,
                view.displayed_month()
            );
        }
        while view.displayed_month() < target && view.go_to_next_month() {}
    }

    let grid = view.visible_grid();

    if json {
        println!("{}", serde_json::to_string_pretty(&grid)?);
    } else {
        println!("{}", grid.render());
    }

    Ok(())
}
