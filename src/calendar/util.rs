use crate::grid::Day;
use crate::selection::Selection;
use crate::theme::{EDGE_STYLE, HIGHLIGHT_STYLE, SUNDAY_STYLE};
use ratatui::{style::Style, text::Span};
use time::{Date, Weekday};

pub(super) const DAYS_IN_WEEK: usize = 7;

pub(super) trait WeekdayExt {
    fn index0(&self) -> u16;
}

impl WeekdayExt for Weekday {
    fn index0(&self) -> u16 {
        self.number_days_from_sunday().into()
    }
}

/// Returns the days making up week number `week` (zero-based) of a month
/// grid.  The final week of a month may be short.
pub(super) fn grid_week(days: &[Day], week: usize) -> &[Day] {
    days.chunks(DAYS_IN_WEEK).nth(week).unwrap_or_default()
}

pub(super) fn week_qty(days: &[Day]) -> usize {
    days.len().div_ceil(DAYS_IN_WEEK)
}

/// Render a single day cell, marking the head of the selection with `[` and
/// the end with `]`
pub(super) fn show_day(date: Date, selection: &Selection) -> Span<'static> {
    let is_head = selection.is_head(date);
    let is_end = selection.is_end(date);
    let s = format!(
        "{}{:2}{}",
        if is_head { '[' } else { ' ' },
        date.day(),
        if is_end { ']' } else { ' ' },
    );
    let mut style = Style::new();
    if date.weekday() == Weekday::Sunday {
        style = style.patch(SUNDAY_STYLE);
    }
    if selection.is_in_range(date) {
        style = style.patch(HIGHLIGHT_STYLE);
    }
    if is_head || is_end {
        style = style.patch(EDGE_STYLE);
    }
    Span::styled(s, style)
}
