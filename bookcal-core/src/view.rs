//! View-state controller for a booking calendar.
//!
//! `CalendarView` owns the displayed month and the selected day. `today` is
//! captured at construction and never re-read, so cells don't flip between
//! enabled and disabled while the view is open.

use chrono::NaiveDate;

use crate::date::{WeekStart, YearMonth};
use crate::error::CalendarResult;
use crate::grid::{assemble_grid, GridPolicy, MonthGrid};

/// Layout and selection settings for a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewOptions {
    pub week_start: WeekStart,
    pub policy: GridPolicy,
    /// Start with today selected instead of nothing.
    pub preselect_today: bool,
}

pub struct CalendarView<F> {
    today: NaiveDate,
    home: YearMonth,
    displayed: YearMonth,
    selected: Option<NaiveDate>,
    options: ViewOptions,
    on_date_chosen: F,
}

impl<F> CalendarView<F>
where
    F: FnMut(NaiveDate),
{
    /// Opens on the month containing `today`.
    ///
    /// `on_date_chosen` runs once for every accepted [`select_date`](Self::select_date).
    pub fn new(today: NaiveDate, options: ViewOptions, on_date_chosen: F) -> CalendarResult<Self> {
        let home = YearMonth::containing(today)?;

        Ok(CalendarView {
            today,
            home,
            displayed: home,
            selected: options.preselect_today.then_some(today),
            options,
            on_date_chosen,
        })
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn displayed_month(&self) -> YearMonth {
        self.displayed
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn options(&self) -> ViewOptions {
        self.options
    }

    /// False while today's month is displayed; earlier months are unreachable.
    pub fn can_go_previous(&self) -> bool {
        self.displayed > self.home
    }

    /// Returns whether the displayed month changed.
    pub fn go_to_next_month(&mut self) -> bool {
        let Some(next) = self.displayed.next() else {
            tracing::debug!(month = %self.displayed, "no month after the supported range");
            return false;
        };

        self.displayed = next;
        tracing::debug!(month = %self.displayed, "moved to next month");
        true
    }

    /// Returns whether the displayed month changed.
    pub fn go_to_previous_month(&mut self) -> bool {
        if !self.can_go_previous() {
            tracing::debug!(month = %self.displayed, "previous month is before today, ignoring");
            return false;
        }

        match self.displayed.previous() {
            Some(previous) => {
                self.displayed = previous;
                tracing::debug!(month = %self.displayed, "moved to previous month");
                true
            }
            None => false,
        }
    }

    /// Select `date` if it is today or later and notify the caller.
    ///
    /// Past dates are ignored and leave the current selection untouched.
    pub fn select_date(&mut self, date: NaiveDate) -> bool {
        if date < self.today {
            tracing::debug!(%date, today = %self.today, "rejected past date");
            return false;
        }

        self.selected = Some(date);
        tracing::debug!(%date, "date chosen");
        (self.on_date_chosen)(date);
        true
    }

    pub fn visible_grid(&self) -> MonthGrid {
        assemble_grid(
            self.displayed,
            self.today,
            self.selected,
            self.options.week_start,
            self.options.policy,
        )
    }
}
