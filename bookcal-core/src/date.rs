//! Calendar month values and date parsing.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{CalendarError, CalendarResult};

/// Earliest year a [`YearMonth`] may hold.
pub const MIN_YEAR: i32 = 1;
/// Latest year a [`YearMonth`] may hold.
pub const MAX_YEAR: i32 = 9999;

/// A validated year and month, with no day component.
///
/// Internally this is the first day of the month, so ordering and equality
/// follow the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    /// Rejects months outside 1..=12 and years outside `MIN_YEAR..=MAX_YEAR`.
    pub fn new(year: i32, month: u32) -> CalendarResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::InvalidYear(year));
        }

        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| YearMonth { first })
            .ok_or(CalendarError::InvalidYear(year))
    }

    /// The month a date falls in.
    pub fn containing(date: NaiveDate) -> CalendarResult<Self> {
        Self::new(date.year(), date.month())
    }

    pub fn year(self) -> i32 {
        self.first.year()
    }

    pub fn month(self) -> u32 {
        self.first.month()
    }

    pub fn first_day(self) -> NaiveDate {
        self.first
    }

    pub fn last_day(self) -> NaiveDate {
        self.days().last().unwrap_or(self.first)
    }

    /// Every day of the month in ascending order.
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        let month = self.first.month();
        self.first.iter_days().take_while(move |d| d.month() == month)
    }

    pub fn num_days(self) -> u32 {
        self.days().count() as u32
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// The following month, or `None` past December of `MAX_YEAR`.
    pub fn next(self) -> Option<Self> {
        match self.month() {
            12 => Self::new(self.year() + 1, 1).ok(),
            m => Self::new(self.year(), m + 1).ok(),
        }
    }

    /// The preceding month, or `None` before January of `MIN_YEAR`.
    pub fn previous(self) -> Option<Self> {
        match self.month() {
            1 => Self::new(self.year() - 1, 12).ok(),
            m => Self::new(self.year(), m - 1).ok(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = CalendarError;

    /// Parses `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidDate {
            input: s.to_string(),
            expected: "YYYY-MM",
        };

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Self::new(year, month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> CalendarResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| CalendarError::InvalidDate {
        input: s.to_string(),
        expected: "YYYY-MM-DD",
    })
}

/// The weekday shown in the first grid column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Sunday => Weekday::Sun,
        }
    }

    /// Weekdays in column order.
    pub fn weekdays(self) -> [Weekday; 7] {
        let mut days = [self.weekday(); 7];
        for i in 1..days.len() {
            days[i] = days[i - 1].succ();
        }
        days
    }
}

impl FromStr for WeekStart {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monday" | "mon" => Ok(WeekStart::Monday),
            "sunday" | "sun" => Ok(WeekStart::Sunday),
            other => Err(CalendarError::Config(format!(
                "Unknown week start '{other}'. Expected monday or sunday"
            ))),
        }
    }
}

/// Saturday and Sunday, whatever column they land in.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
