//! Month grid generation.
//!
//! A grid is a flat run of cells, seven per row, starting on the configured
//! week start. Leading cells pad the first row so day 1 lands in its weekday
//! column; how the tail is filled depends on the [`GridPolicy`].

use std::iter;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::date::{is_weekend, WeekStart, YearMonth};
use crate::error::{CalendarError, CalendarResult};

pub const DAYS_PER_WEEK: usize = 7;

/// Cell count of a [`GridPolicy::Fixed`] grid (six full weeks).
pub const FIXED_GRID_CELLS: usize = 42;

/// How padding slots around the displayed month are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridPolicy {
    /// Empty cells before day 1 and after the last day, only enough to
    /// complete the final week.
    #[default]
    Fit,
    /// Always six weeks; padding slots show the neighbouring months' days.
    Fixed,
}

impl FromStr for GridPolicy {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fit" => Ok(GridPolicy::Fit),
            "fixed" => Ok(GridPolicy::Fixed),
            other => Err(CalendarError::Config(format!(
                "Unknown grid policy '{other}'. Expected fit or fixed"
            ))),
        }
    }
}

/// Classification of a single day relative to the view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DayFlags {
    pub is_today: bool,
    pub is_weekend: bool,
    /// Strictly before today.
    pub is_past: bool,
    pub is_selected: bool,
    pub is_in_displayed_month: bool,
}

impl DayFlags {
    /// Past days and overflow days from neighbouring months can't be picked.
    pub fn is_disabled(&self) -> bool {
        self.is_past || !self.is_in_displayed_month
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Day {
    pub date: NaiveDate,
    pub flags: DayFlags,
}

/// One grid slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DayCell {
    Empty,
    Day(Day),
}

impl DayCell {
    pub fn day(&self) -> Option<&Day> {
        match self {
            DayCell::Empty => None,
            DayCell::Day(day) => Some(day),
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.day().map(|d| d.date)
    }

    pub fn is_selectable(&self) -> bool {
        self.day().is_some_and(|d| !d.flags.is_disabled())
    }
}

/// The cells for one displayed month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    month: YearMonth,
    week_start: WeekStart,
    policy: GridPolicy,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub fn policy(&self) -> GridPolicy {
        self.policy
    }

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// Rows of seven cells.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    pub fn week_count(&self) -> usize {
        self.cells.len().div_ceil(DAYS_PER_WEEK)
    }

    /// The cell for a day of the displayed month, skipping overflow days.
    pub fn day(&self, day_of_month: u32) -> Option<&Day> {
        self.cells
            .iter()
            .filter_map(DayCell::day)
            .find(|d| d.flags.is_in_displayed_month && d.date.day() == day_of_month)
    }

    /// Days belonging to the displayed month.
    pub fn month_days(&self) -> impl Iterator<Item = &Day> {
        self.cells
            .iter()
            .filter_map(DayCell::day)
            .filter(|d| d.flags.is_in_displayed_month)
    }
}

/// Number of empty slots before day 1 of the month.
pub fn leading_padding(year: i32, month: u32, week_start: WeekStart) -> CalendarResult<u32> {
    Ok(padding_for(YearMonth::new(year, month)?, week_start))
}

fn padding_for(month: YearMonth, week_start: WeekStart) -> u32 {
    // chrono counts from Sunday = 0; remap onto the configured first column.
    let first = month.first_day().weekday().num_days_from_sunday();
    let start = week_start.weekday().num_days_from_sunday();
    (first + 7 - start) % 7
}

/// Every date of the month from the 1st to the last day.
pub fn month_days(year: i32, month: u32) -> CalendarResult<Vec<NaiveDate>> {
    Ok(YearMonth::new(year, month)?.days().collect())
}

pub fn classify(
    date: NaiveDate,
    today: NaiveDate,
    displayed: YearMonth,
    selected: Option<NaiveDate>,
) -> DayFlags {
    DayFlags {
        is_today: date == today,
        is_weekend: is_weekend(date),
        is_past: date < today,
        is_selected: selected == Some(date),
        is_in_displayed_month: displayed.contains(date),
    }
}

/// Build the grid for `displayed` as seen on `today`.
pub fn assemble_grid(
    displayed: YearMonth,
    today: NaiveDate,
    selected: Option<NaiveDate>,
    week_start: WeekStart,
    policy: GridPolicy,
) -> MonthGrid {
    let padding = padding_for(displayed, week_start) as usize;
    let cell = |date: NaiveDate| {
        DayCell::Day(Day {
            date,
            flags: classify(date, today, displayed, selected),
        })
    };

    let mut cells = Vec::with_capacity(FIXED_GRID_CELLS);

    match policy {
        GridPolicy::Fit => cells.extend(iter::repeat(DayCell::Empty).take(padding)),
        GridPolicy::Fixed => {
            let first = displayed.first_day();
            let mut overflow: Vec<NaiveDate> = iter::successors(first.pred_opt(), |d| d.pred_opt())
                .take(padding)
                .collect();
            overflow.reverse();
            cells.extend(overflow.into_iter().map(cell));
        }
    }

    cells.extend(displayed.days().map(cell));

    match policy {
        GridPolicy::Fit => {
            let short = (DAYS_PER_WEEK - cells.len() % DAYS_PER_WEEK) % DAYS_PER_WEEK;
            cells.extend(iter::repeat(DayCell::Empty).take(short));
        }
        GridPolicy::Fixed => {
            let remaining = FIXED_GRID_CELLS - cells.len();
            let after = displayed.last_day().iter_days().skip(1).take(remaining);
            cells.extend(after.map(cell));
        }
    }

    tracing::trace!(month = %displayed, ?policy, cells = cells.len(), "assembled month grid");

    MonthGrid {
        month: displayed,
        week_start,
        policy,
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    // --- leading_padding ---

    #[test]
    fn padding_for_every_first_weekday_monday_start() {
        // First days of the month in 2024 cover all seven weekdays.
        let cases = [
            (1, Weekday::Mon, 0),
            (10, Weekday::Tue, 1),
            (5, Weekday::Wed, 2),
            (2, Weekday::Thu, 3),
            (3, Weekday::Fri, 4),
            (6, Weekday::Sat, 5),
            (9, Weekday::Sun, 6),
        ];
        for (month, weekday, expected) in cases {
            assert_eq!(ym(2024, month).first_day().weekday(), weekday);
            assert_eq!(
                leading_padding(2024, month, WeekStart::Monday).unwrap(),
                expected,
                "2024-{month:02} starts on {weekday}"
            );
        }
    }

    #[test]
    fn padding_for_every_first_weekday_sunday_start() {
        let cases = [
            (9, Weekday::Sun, 0),
            (1, Weekday::Mon, 1),
            (10, Weekday::Tue, 2),
            (5, Weekday::Wed, 3),
            (2, Weekday::Thu, 4),
            (3, Weekday::Fri, 5),
            (6, Weekday::Sat, 6),
        ];
        for (month, weekday, expected) in cases {
            assert_eq!(ym(2024, month).first_day().weekday(), weekday);
            assert_eq!(leading_padding(2024, month, WeekStart::Sunday).unwrap(), expected);
        }
    }

    #[test]
    fn padding_rejects_invalid_month() {
        assert!(matches!(
            leading_padding(2024, 0, WeekStart::Monday),
            Err(CalendarError::InvalidMonth(0))
        ));
        assert!(month_days(2024, 13).is_err());
    }

    // --- classify ---

    #[test]
    fn classify_today_and_past() {
        let today = date(2024, 2, 15);
        let feb = ym(2024, 2);

        let flags = classify(today, today, feb, None);
        assert!(flags.is_today);
        assert!(!flags.is_past);

        let yesterday = classify(date(2024, 2, 14), today, feb, None);
        assert!(yesterday.is_past);
        assert!(!yesterday.is_today);
        assert!(yesterday.is_disabled());
    }

    #[test]
    fn classify_selection_and_month_membership() {
        let today = date(2024, 2, 15);
        let feb = ym(2024, 2);
        let chosen = date(2024, 2, 20);

        assert!(classify(chosen, today, feb, Some(chosen)).is_selected);
        assert!(!classify(date(2024, 2, 21), today, feb, Some(chosen)).is_selected);

        let overflow = classify(date(2024, 3, 1), today, feb, None);
        assert!(!overflow.is_in_displayed_month);
        assert!(overflow.is_disabled());
    }

    // --- assemble_grid ---

    #[test]
    fn fit_grid_is_whole_weeks() {
        let today = date(2024, 1, 1);
        for month in 1..=12 {
            let grid = assemble_grid(ym(2024, month), today, None, WeekStart::Monday, GridPolicy::Fit);
            assert_eq!(grid.cells().len() % DAYS_PER_WEEK, 0);
            assert_eq!(grid.month_days().count() as u32, ym(2024, month).num_days());
            assert!(grid.cells().iter().all(|c| match c {
                DayCell::Empty => true,
                DayCell::Day(d) => d.flags.is_in_displayed_month,
            }));
        }
    }

    #[test]
    fn fit_grid_for_month_starting_monday_has_no_leading_padding() {
        // 2024-04-01 is a Monday; April has 30 days so the last row is short.
        let grid = assemble_grid(ym(2024, 4), date(2024, 4, 1), None, WeekStart::Monday, GridPolicy::Fit);
        assert_eq!(grid.cells()[0].date(), Some(date(2024, 4, 1)));
        assert_eq!(grid.week_count(), 5);
        assert_eq!(grid.cells()[34], DayCell::Empty);
    }

    #[test]
    fn fit_grid_february_without_padding_is_four_weeks() {
        // 2027-02-01 is a Monday and 2027 is not a leap year.
        let grid = assemble_grid(ym(2027, 2), date(2027, 1, 1), None, WeekStart::Monday, GridPolicy::Fit);
        assert_eq!(grid.cells().len(), 28);
        assert_eq!(grid.week_count(), 4);
    }

    #[test]
    fn fixed_grid_has_42_cells_with_overflow_days() {
        let grid = assemble_grid(ym(2024, 2), date(2024, 2, 15), None, WeekStart::Monday, GridPolicy::Fixed);
        assert_eq!(grid.cells().len(), FIXED_GRID_CELLS);
        assert_eq!(grid.week_count(), 6);

        // Feb 1 2024 is a Thursday: Mon 29, Tue 30, Wed 31 January lead in.
        assert_eq!(grid.cells()[0].date(), Some(date(2024, 1, 29)));
        assert_eq!(grid.cells()[3].date(), Some(date(2024, 2, 1)));
        assert!(!grid.cells()[0].is_selectable());

        let last = grid.cells()[41].day().unwrap();
        assert_eq!(last.date, date(2024, 3, 10));
        assert!(!last.flags.is_in_displayed_month);
    }

    #[test]
    fn fixed_grid_dates_are_consecutive() {
        let grid = assemble_grid(ym(2025, 8), date(2025, 8, 1), None, WeekStart::Sunday, GridPolicy::Fixed);
        let dates: Vec<NaiveDate> = grid.cells().iter().filter_map(DayCell::date).collect();
        assert_eq!(dates.len(), FIXED_GRID_CELLS);
        assert!(dates.windows(2).all(|w| w[0].succ_opt() == Some(w[1])));
        assert_eq!(dates[0].weekday(), Weekday::Sun);
    }

    #[test]
    fn columns_match_weekdays() {
        let today = date(2024, 1, 1);
        for week_start in [WeekStart::Monday, WeekStart::Sunday] {
            let columns = week_start.weekdays();
            for month in 1..=12 {
                let grid = assemble_grid(ym(2025, month), today, None, week_start, GridPolicy::Fit);
                for week in grid.weeks() {
                    for (col, cell) in week.iter().enumerate() {
                        if let Some(d) = cell.date() {
                            assert_eq!(d.weekday(), columns[col]);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn weekend_flags_follow_weekday_not_column() {
        let grid = assemble_grid(ym(2024, 6), date(2024, 6, 1), None, WeekStart::Sunday, GridPolicy::Fit);
        for day in grid.month_days() {
            let weekend = matches!(day.date.weekday(), Weekday::Sat | Weekday::Sun);
            assert_eq!(day.flags.is_weekend, weekend, "{}", day.date);
        }
    }

    #[test]
    fn day_lookup_ignores_overflow() {
        let grid = assemble_grid(ym(2024, 2), date(2024, 2, 15), None, WeekStart::Monday, GridPolicy::Fixed);
        // Day 1 appears twice (Feb 1 and Mar 1); only February's is returned.
        assert_eq!(grid.day(1).unwrap().date, date(2024, 2, 1));
        assert!(grid.day(30).is_none());
    }

    #[test]
    fn grid_serializes_to_json() {
        let grid = assemble_grid(ym(2024, 2), date(2024, 2, 15), None, WeekStart::Monday, GridPolicy::Fit);
        let json = serde_json::to_value(&grid).unwrap();

        assert_eq!(json["month"], "2024-02");
        assert_eq!(json["week_start"], "monday");
        assert_eq!(json["policy"], "fit");

        let cells = json["cells"].as_array().unwrap();
        assert_eq!(cells.len(), grid.cells().len());
        assert_eq!(cells[0], serde_json::json!({ "kind": "empty" }));
        assert_eq!(cells[3]["kind"], "day");
        assert_eq!(cells[3]["date"], "2024-02-01");
        assert_eq!(cells[3]["flags"]["is_past"], true);
        assert_eq!(cells[17]["flags"]["is_today"], true);
    }

    #[test]
    fn policy_parses_from_str() {
        assert_eq!("fit".parse::<GridPolicy>().unwrap(), GridPolicy::Fit);
        assert_eq!("FIXED".parse::<GridPolicy>().unwrap(), GridPolicy::Fixed);
        assert!("weekly".parse::<GridPolicy>().is_err());
    }
}
