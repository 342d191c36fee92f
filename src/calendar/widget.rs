use super::util::{grid_week, show_day, WeekdayExt};
use super::view::{CalendarView, Row};
use crate::grid::{generate_days, Day, MonthRef};
use crate::selection::Selection;
use crate::theme::{MONTH_STYLE, STATUS_STYLE, SUNDAY_STYLE, WEEKDAY_STYLE};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    widgets::StatefulWidget,
};
use time::Date;

static HEADER: &str = " Su  Mo  Tu  We  Th  Fr  Sa ";

/// Number of columns per day of week
const DAY_WIDTH: u16 = 4;

/// Width of the day grid in columns
const MAIN_WIDTH: u16 = DAY_WIDTH * 7;

/// Columns between the left edge of the grid and a month's title
const TITLE_INDENT: u16 = 1;

/// Number of lines taken up by the header and its rule
const HEADER_LINES: u16 = 2;

/// Number of lines at the bottom of the screen used for the status bar
const STATUS_LINES: u16 = 1;

const ACS_HLINE: char = '─';

/// Scrollable view of a span of months with the current selection
/// highlighted
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Calendar<'a> {
    selection: &'a Selection,
}

impl<'a> Calendar<'a> {
    pub(crate) fn new(selection: &'a Selection) -> Calendar<'a> {
        Calendar { selection }
    }

    /// Returns the date of the day cell drawn at screen position (`x`, `y`)
    /// when the calendar was last rendered in `area`
    pub(crate) fn locate(area: Rect, state: &CalendarView, x: u16, y: u16) -> Option<Date> {
        let geometry = Geometry::new(area);
        let body = geometry.body;
        if !body.contains(Position { x, y }) {
            return None;
        }
        let Some(Row::Week { month, week }) = state.row_at(usize::from(y - body.y)) else {
            return None;
        };
        let col = usize::from((x - body.x) / DAY_WIDTH);
        let days = generate_days(month);
        grid_week(&days, week).get(col).and_then(|day| day.date)
    }

    fn status_text(&self) -> String {
        match self.selection {
            Selection::Empty => String::from("No dates selected"),
            Selection::One(_) => format!("Selected {}", self.selection),
            Selection::Range { .. } => {
                let qty = self.selection.day_count();
                let plural = if qty == 1 { "" } else { "s" };
                format!("Selected {} ({qty} day{plural})", self.selection)
            }
        }
    }
}

impl StatefulWidget for Calendar<'_> {
    type State = CalendarView;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let geometry = Geometry::new(area);
        let mut canvas = BufferCanvas::new(area, buf);
        let left = geometry.body.x - area.x;
        canvas.draw_header(left);
        let rows = state.ensure_rows(geometry.body.height.into());
        // Each month's days are generated once per render, not once per week
        let mut grid: Option<(MonthRef, Vec<Day>)> = None;
        for (i, row) in std::iter::zip(HEADER_LINES.., rows) {
            match row {
                Row::Title(month) => canvas.draw_title(i, left, month),
                Row::Week { month, week } => {
                    if !matches!(grid, Some((m, _)) if m == month) {
                        grid = Some((month, generate_days(month)));
                    }
                    let days = grid
                        .as_ref()
                        .map(|(_, days)| days.as_slice())
                        .unwrap_or_default();
                    canvas.draw_week(i, left, grid_week(days, week), self.selection);
                }
                Row::Spacer => (),
            }
        }
        if geometry.status.height > 0 {
            canvas.draw_status(geometry.status.y - area.y, self.status_text());
        }
    }
}

/// Screen regions of the calendar within the area it's drawn in
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Geometry {
    body: Rect,
    status: Rect,
}

impl Geometry {
    fn new(area: Rect) -> Geometry {
        let left = area.width.saturating_sub(MAIN_WIDTH) / 2;
        let header_height = HEADER_LINES.min(area.height);
        let status_height = STATUS_LINES.min(area.height - header_height);
        let body = Rect {
            x: area.x + left,
            y: area.y + header_height,
            width: MAIN_WIDTH.min(area.width),
            height: area.height - header_height - status_height,
        };
        let status = Rect {
            x: area.x,
            y: body.bottom(),
            width: area.width,
            height: status_height,
        };
        Geometry { body, status }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    fn draw_header(&mut self, left: u16) {
        self.mvprint(0, left, HEADER, WEEKDAY_STYLE);
        let sunday = &HEADER[..usize::from(DAY_WIDTH)];
        self.mvprint(0, left, sunday, WEEKDAY_STYLE.patch(SUNDAY_STYLE));
        self.hline(1, left, ACS_HLINE, MAIN_WIDTH);
    }

    fn draw_title(&mut self, y: u16, left: u16, month: MonthRef) {
        self.mvprint(y, left + TITLE_INDENT, month.to_string(), MONTH_STYLE);
    }

    fn draw_week(&mut self, y: u16, left: u16, days: &[Day], selection: &Selection) {
        for date in days.iter().filter_map(|d| d.date) {
            let s = show_day(date, selection);
            let x = left + DAY_WIDTH * date.weekday().index0();
            self.mvprint(y, x, s.content, s.style);
        }
    }

    fn draw_status(&mut self, y: u16, text: String) {
        let width = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        let x = self.area.width.saturating_sub(width) / 2;
        self.mvprint(y, x, text, STATUS_STYLE);
    }

    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Style) {
        if y < self.area.height && x < self.area.width {
            self.buf.set_stringn(
                x + self.area.x,
                y + self.area.y,
                s,
                usize::from(self.area.width - x),
                style,
            );
        }
    }

    fn hline(&mut self, y: u16, x: u16, ch: char, length: u16) {
        self.mvprint(y, x, String::from(ch).repeat(length.into()), Style::new());
    }
}
