use std::fmt;
use time::Date;

/// Maximum number of days between the two ends of a range
pub(crate) const MAX_RANGE_DAYS: u64 = 7;

/// The user's current date selection, updated one click at a time.
///
/// A range is only formed when the second click lands within
/// [`MAX_RANGE_DAYS`] of the first; otherwise the second click starts a new
/// selection.  Clicking while a range is selected always starts over.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Selection {
    #[default]
    Empty,
    One(Date),
    // Stored in click order; may be chronologically reversed
    Range {
        first: Date,
        second: Date,
    },
}

impl Selection {
    pub(crate) fn new() -> Selection {
        Selection::default()
    }

    pub(crate) fn click(&mut self, date: Date) {
        let next = match *self {
            Selection::One(first) if days_apart(first, date) <= MAX_RANGE_DAYS => {
                Selection::Range {
                    first,
                    second: date,
                }
            }
            _ => Selection::One(date),
        };
        log::debug!("Selection changed: {self} -> {next}");
        *self = next;
    }

    /// Returns the chronologically earliest and latest selected dates
    pub(crate) fn bounds(&self) -> Option<(Date, Date)> {
        match *self {
            Selection::Empty => None,
            Selection::One(date) => Some((date, date)),
            Selection::Range { first, second } => Some((first.min(second), first.max(second))),
        }
    }

    pub(crate) fn is_in_range(&self, date: Date) -> bool {
        match *self {
            Selection::Empty => false,
            Selection::One(first) => date == first,
            Selection::Range { .. } => self.bounds().is_some_and(|(start, end)| {
                days_apart(start, end) <= MAX_RANGE_DAYS && start <= date && date <= end
            }),
        }
    }

    pub(crate) fn is_head(&self, date: Date) -> bool {
        self.bounds().is_some_and(|(start, _)| date == start)
    }

    pub(crate) fn is_end(&self, date: Date) -> bool {
        self.bounds().is_some_and(|(_, end)| date == end)
    }

    /// Number of days covered by the selection, counting both ends
    pub(crate) fn day_count(&self) -> u64 {
        self.bounds()
            .map_or(0, |(start, end)| days_apart(start, end) + 1)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bounds() {
            None => write!(f, "no dates"),
            Some((start, end)) if start == end => write!(f, "{start}"),
            Some((start, end)) => write!(f, "{start} to {end}"),
        }
    }
}

fn days_apart(a: Date, b: Date) -> u64 {
    (b - a).whole_days().unsigned_abs()
}
