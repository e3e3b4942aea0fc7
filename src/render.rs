//! Terminal rendering for bookcal-core types.
//!
//! Extension traits that draw grids with owo_colors, following the layout of
//! `cal`: a centred title, two-letter weekday headers, then one row per week.

use bookcal_core::grid::Day;
use bookcal_core::{DayCell, MonthGrid};
use chrono::Datelike;
use owo_colors::OwoColorize;

/// Width of the grid: seven columns of two characters plus separators.
const GRID_WIDTH: usize = 20;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Day {
    fn render(&self) -> String {
        let label = format!("{:>2}", self.date.day());
        let flags = &self.flags;

        if flags.is_selected {
            label.reversed().to_string()
        } else if !flags.is_in_displayed_month {
            label.dimmed().to_string()
        } else if flags.is_past {
            label.dimmed().strikethrough().to_string()
        } else if flags.is_today {
            label.bold().underline().to_string()
        } else if flags.is_weekend {
            label.cyan().to_string()
        } else {
            label
        }
    }
}

impl Render for DayCell {
    fn render(&self) -> String {
        match self {
            DayCell::Empty => "  ".to_string(),
            DayCell::Day(day) => day.render(),
        }
    }
}

impl Render for MonthGrid {
    fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.week_count() + 2);

        let title = self.month().first_day().format("%B %Y").to_string();
        lines.push(format!("{:^width$}", title, width = GRID_WIDTH).bold().to_string());

        let headers: Vec<String> = self
            .week_start()
            .weekdays()
            .iter()
            .map(|w| w.to_string().chars().take(2).collect())
            .collect();
        lines.push(headers.join(" ").dimmed().to_string());

        for week in self.weeks() {
            let row: Vec<String> = week.iter().map(Render::render).collect();
            lines.push(row.join(" ").trim_end().to_string());
        }

        lines.join("\n")
    }
}

/// Keyboard hint shown under the grid in interactive mode.
pub fn navigation_hint(can_go_previous: bool) -> String {
    let previous = if can_go_previous { "p previous" } else { "p (current month)" };
    format!("{}  n next  <day> book  q quit", previous)
}
