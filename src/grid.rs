use crate::config::ConfigError;
use std::fmt;
use std::iter::successors;
use time::{error::ComponentRange, Date, Month};

/// A single month of a single year, as shown in one block of the calendar
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct MonthRef {
    // Invariant: always the first day of the month
    first: Date,
}

impl MonthRef {
    pub(crate) fn new(year: i32, month: Month) -> Result<MonthRef, ComponentRange> {
        Date::from_calendar_date(year, month, 1).map(|first| MonthRef { first })
    }

    /// Construct from a zero-based month index (0 = January) and a year
    pub(crate) fn from_index(index: u8, year: i32) -> Result<MonthRef, ConfigError> {
        let month = index
            .checked_add(1)
            .and_then(|n| Month::try_from(n).ok())
            .ok_or(ConfigError::MonthIndex(index))?;
        Ok(MonthRef::new(year, month)?)
    }

    pub(crate) fn year(self) -> i32 {
        self.first.year()
    }

    pub(crate) fn month(self) -> Month {
        self.first.month()
    }

    pub(crate) fn first_day(self) -> Date {
        self.first
    }

    /// Returns `None` at the end of time
    pub(crate) fn next(self) -> Option<MonthRef> {
        let year = match self.month() {
            Month::December => self.year().checked_add(1)?,
            _ => self.year(),
        };
        MonthRef::new(year, self.month().next()).ok()
    }

    pub(crate) fn days(self) -> Vec<Day> {
        generate_days(self)
    }
}

impl fmt::Display for MonthRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month(), self.year())
    }
}

/// One cell of a month grid.  A `date` of `None` is padding before the first
/// of the month.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Day {
    pub(crate) date: Option<Date>,
}

impl Day {
    pub(crate) const BLANK: Day = Day { date: None };
}

/// Lay out the days of `month` as they appear in a Sunday-first grid: one
/// blank for each weekday before the 1st, then every day of the month in
/// order.
pub(crate) fn generate_days(month: MonthRef) -> Vec<Day> {
    let first = month.first_day();
    let leading = usize::from(first.weekday().number_days_from_sunday());
    let mut days = vec![Day::BLANK; leading];
    days.extend(
        successors(Some(first), |d| d.next_day())
            .take_while(|d| d.month() == first.month())
            .map(|date| Day { date: Some(date) }),
    );
    days
}
