use crate::grid::MonthRef;
use std::fmt;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use thiserror::Error;
use time::{
    error::ComponentRange,
    format_description::FormatItem,
    macros::format_description,
    parsing::Parsed,
};

static YM_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]");

/// Zero-based index of the month in which the default span starts (May)
pub(crate) const DEFAULT_START_MONTH_INDEX: u8 = 4;

pub(crate) const DEFAULT_MONTH_QTY: NonZeroUsize = match NonZeroUsize::new(6) {
    Some(n) => n,
    None => unreachable!(),
};

/// Settings for a run of the calendar, as gathered from the command line
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Config {
    pub(crate) start: Option<MonthRef>,
    pub(crate) month_qty: NonZeroUsize,
    pub(crate) log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            start: None,
            month_qty: DEFAULT_MONTH_QTY,
            log_file: None,
        }
    }
}

impl Config {
    /// Build the span of months to display.  Without an explicit start month,
    /// the span starts in May of `current_year`.
    pub(crate) fn month_span(&self, current_year: i32) -> Result<MonthSpan, ConfigError> {
        let start = match self.start {
            Some(start) => start,
            None => MonthRef::from_index(DEFAULT_START_MONTH_INDEX, current_year)?,
        };
        MonthSpan::starting(start, self.month_qty.get())
    }
}

/// The ordered sequence of months shown by the calendar
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthSpan(
    // Invariant: nonempty
    Vec<MonthRef>,
);

impl MonthSpan {
    pub(crate) fn starting(first: MonthRef, qty: usize) -> Result<MonthSpan, ConfigError> {
        if qty == 0 {
            return Err(ConfigError::NoMonths);
        }
        let mut months = Vec::with_capacity(qty);
        months.push(first);
        let mut current = first;
        while months.len() < qty {
            current = current.next().ok_or(ConfigError::EndOfTime)?;
            months.push(current);
        }
        Ok(MonthSpan(months))
    }

    pub(crate) fn months(&self) -> &[MonthRef] {
        &self.0
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for MonthSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) if first != last => write!(f, "{first} through {last}"),
            (Some(first), _) => write!(f, "{first}"),
            _ => Ok(()),
        }
    }
}

impl TryFrom<Vec<MonthRef>> for MonthSpan {
    type Error = ConfigError;

    fn try_from(months: Vec<MonthRef>) -> Result<MonthSpan, ConfigError> {
        if months.is_empty() {
            Err(ConfigError::NoMonths)
        } else {
            Ok(MonthSpan(months))
        }
    }
}

/// Parse a `YYYY-MM` string into a month
pub(crate) fn parse_year_month(s: &str) -> Result<MonthRef, ConfigError> {
    let mut parsed = Parsed::new();
    let rest = parsed
        .parse_items(s.as_bytes(), YM_FMT)
        .map_err(|_| ConfigError::Parse(s.to_owned()))?;
    if !rest.is_empty() {
        return Err(ConfigError::Parse(s.to_owned()));
    }
    match (parsed.year(), parsed.month()) {
        (Some(year), Some(month)) => Ok(MonthRef::new(year, month)?),
        _ => Err(ConfigError::Parse(s.to_owned())),
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub(crate) enum ConfigError {
    #[error("at least one month must be displayed")]
    NoMonths,
    #[error("invalid month index {0}; expected 0 through 11")]
    MonthIndex(u8),
    #[error("month is outside the supported range of dates")]
    OutOfRange(#[from] ComponentRange),
    #[error("month span runs past the end of time")]
    EndOfTime,
    #[error("invalid month {0:?}; expected YYYY-MM")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    #[test]
    fn test_default_span() {
        let span = Config::default().month_span(2024).unwrap();
        let names = span
            .months()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            [
                "May 2024",
                "June 2024",
                "July 2024",
                "August 2024",
                "September 2024",
                "October 2024"
            ]
        );
    }

    #[test]
    fn test_default_span_out_of_range() {
        assert_eq!(
            Config::default().month_span(100_000).map(|s| s.len()),
            Err(ConfigError::OutOfRange(
                MonthRef::new(100_000, Month::May).unwrap_err()
            ))
        );
    }

    #[test]
    fn test_span_across_year() {
        let start = MonthRef::new(2024, Month::November).unwrap();
        let span = MonthSpan::starting(start, 4).unwrap();
        assert_eq!(span.len(), 4);
        assert_eq!(span.months()[0], start);
        assert_eq!(span.months()[2], MonthRef::new(2025, Month::January).unwrap());
        assert_eq!(span.months()[3], MonthRef::new(2025, Month::February).unwrap());
        assert_eq!(span.to_string(), "November 2024 through February 2025");
    }

    #[test]
    fn test_span_end_of_time() {
        let start = MonthRef::new(9999, Month::November).unwrap();
        assert_eq!(MonthSpan::starting(start, 2).map(|s| s.len()), Ok(2));
        assert_eq!(MonthSpan::starting(start, 3), Err(ConfigError::EndOfTime));
    }

    #[test]
    fn test_empty_span() {
        let start = MonthRef::new(2024, Month::May).unwrap();
        assert_eq!(MonthSpan::starting(start, 0), Err(ConfigError::NoMonths));
        assert_eq!(MonthSpan::try_from(Vec::new()), Err(ConfigError::NoMonths));
    }

    #[test]
    fn test_explicit_months() {
        let months = (0..6)
            .map(|i| MonthRef::from_index(i, 2024).unwrap())
            .collect::<Vec<_>>();
        let span = MonthSpan::try_from(months).unwrap();
        assert_eq!(span.len(), 6);
        assert_eq!(span.months()[0], MonthRef::new(2024, Month::January).unwrap());
        assert_eq!(span.months()[5], MonthRef::new(2024, Month::June).unwrap());
    }

    #[test]
    fn test_explicit_start() {
        let cfg = Config {
            start: Some(MonthRef::new(2023, Month::December).unwrap()),
            month_qty: NonZeroUsize::new(2).unwrap(),
            log_file: None,
        };
        let span = cfg.month_span(2030).unwrap();
        assert_eq!(
            span.months(),
            [
                MonthRef::new(2023, Month::December).unwrap(),
                MonthRef::new(2024, Month::January).unwrap(),
            ]
        );
    }

    #[test]
    fn test_parse_year_month() {
        assert_eq!(
            parse_year_month("2024-05"),
            Ok(MonthRef::new(2024, Month::May).unwrap())
        );
        assert_eq!(
            parse_year_month("2024-13"),
            Err(ConfigError::Parse(String::from("2024-13")))
        );
        assert_eq!(
            parse_year_month("2024-05-01"),
            Err(ConfigError::Parse(String::from("2024-05-01")))
        );
        assert_eq!(
            parse_year_month("May 2024"),
            Err(ConfigError::Parse(String::from("May 2024")))
        );
    }
}
