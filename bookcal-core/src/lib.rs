//! Core types for bookcal.
//!
//! This crate holds everything the booking calendar needs apart from I/O:
//! - `date`: validated months, week start and date parsing
//! - `grid`: month grid generation and day classification
//! - `view`: the controller that owns the displayed month and selection
//! - `bookcal_config`: the user's config file

pub mod bookcal_config;
pub mod date;
pub mod error;
pub mod grid;
pub mod view;

pub use bookcal_config::BookcalConfig;
pub use date::{WeekStart, YearMonth};
pub use error::{CalendarError, CalendarResult};
pub use grid::{Day, DayCell, DayFlags, GridPolicy, MonthGrid};
pub use view::{CalendarView, ViewOptions};
