use super::util::week_qty;
use crate::config::MonthSpan;
use crate::grid::MonthRef;
use thiserror::Error;

/// One line of the scrollable calendar body
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Row {
    Title(MonthRef),
    Week { month: MonthRef, week: usize },
    Spacer,
}

/// Scroll state of the calendar body
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct CalendarView {
    rows: Vec<Row>,
    top: usize,
    // Number of body rows drawn by the last render; `None` until the first
    // render
    visible: Option<usize>,
}

impl CalendarView {
    pub(crate) fn new(months: &MonthSpan) -> Self {
        let mut rows = Vec::new();
        for (i, &month) in months.months().iter().enumerate() {
            if i > 0 {
                rows.push(Row::Spacer);
            }
            rows.push(Row::Title(month));
            let weeks = week_qty(&month.days());
            rows.extend((0..weeks).map(|week| Row::Week { month, week }));
        }
        CalendarView {
            rows,
            top: 0,
            visible: None,
        }
    }

    #[cfg(test)]
    pub(super) fn top(&self) -> usize {
        self.top
    }

    /// Record the height of the body and return the rows that fit in it,
    /// pulling the window back up if a resize left it past the end
    pub(super) fn ensure_rows(&mut self, height: usize) -> Vec<Row> {
        self.visible = Some(height);
        self.top = self.top.min(self.max_top(height));
        (0..height).map_while(|offset| self.row_at(offset)).collect()
    }

    /// Returns the row drawn `offset` lines below the top of the body.  When
    /// the top line falls within a month's weeks, it shows that month's title
    /// instead.
    pub(super) fn row_at(&self, offset: usize) -> Option<Row> {
        if self.visible.is_some_and(|h| offset >= h) {
            return None;
        }
        let row = self
            .top
            .checked_add(offset)
            .and_then(|i| self.rows.get(i))
            .copied()?;
        match row {
            Row::Week { month, .. } if offset == 0 => Some(Row::Title(month)),
            r => Some(r),
        }
    }

    fn max_top(&self, height: usize) -> usize {
        self.rows.len().saturating_sub(height)
    }

    pub(crate) fn scroll_to_top(&mut self) {
        self.top = 0;
    }

    pub(crate) fn one_line_forwards(&mut self) -> Result<(), EdgeError> {
        self.scroll_forwards(1)
    }

    pub(crate) fn one_line_backwards(&mut self) -> Result<(), EdgeError> {
        self.scroll_backwards(1)
    }

    pub(crate) fn one_page_forwards(&mut self) -> Result<(), EdgeError> {
        let page = self.visible.unwrap_or_default().max(1);
        self.scroll_forwards(page)
    }

    pub(crate) fn one_page_backwards(&mut self) -> Result<(), EdgeError> {
        let page = self.visible.unwrap_or_default().max(1);
        self.scroll_backwards(page)
    }

    fn scroll_forwards(&mut self, qty: usize) -> Result<(), EdgeError> {
        let Some(height) = self.visible else {
            return Ok(());
        };
        let max_top = self.max_top(height);
        if self.top < max_top {
            self.top = self.top.saturating_add(qty).min(max_top);
            Ok(())
        } else {
            Err(EdgeError)
        }
    }

    fn scroll_backwards(&mut self, qty: usize) -> Result<(), EdgeError> {
        if self.visible.is_none() {
            return Ok(());
        }
        if self.top > 0 {
            self.top = self.top.saturating_sub(qty);
            Ok(())
        } else {
            Err(EdgeError)
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the edge of the calendar")]
pub(crate) struct EdgeError;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use time::Month;

    fn default_view() -> CalendarView {
        CalendarView::new(&Config::default().month_span(2024).unwrap())
    }

    #[test]
    fn test_rows() {
        let view = default_view();
        // 31 weeks, 6 titles, 5 spacers
        assert_eq!(view.rows.len(), 42);
        let may = MonthRef::new(2024, Month::May).unwrap();
        let june = MonthRef::new(2024, Month::June).unwrap();
        assert_eq!(view.rows[0], Row::Title(may));
        assert_eq!(view.rows[1], Row::Week { month: may, week: 0 });
        assert_eq!(view.rows[5], Row::Week { month: may, week: 4 });
        assert_eq!(view.rows[6], Row::Spacer);
        assert_eq!(view.rows[7], Row::Title(june));
        assert_eq!(view.rows[13], Row::Week { month: june, week: 5 });
    }

    #[test]
    fn test_scroll_before_render() {
        let mut view = default_view();
        assert_eq!(view.one_line_forwards(), Ok(()));
        assert_eq!(view.one_page_backwards(), Ok(()));
        assert_eq!(view.top(), 0);
    }

    #[test]
    fn test_scroll_lines() {
        let mut view = default_view();
        assert_eq!(view.ensure_rows(10).len(), 10);
        assert_eq!(view.one_line_backwards(), Err(EdgeError));
        assert_eq!(view.one_line_forwards(), Ok(()));
        assert_eq!(view.top(), 1);
        assert_eq!(view.row_at(1), Some(view.rows[2]));
        assert_eq!(view.row_at(9), Some(view.rows[10]));
        assert_eq!(view.row_at(10), None);
        assert_eq!(view.one_line_backwards(), Ok(()));
        assert_eq!(view.top(), 0);
    }

    #[test]
    fn test_scroll_pages() {
        let mut view = default_view();
        view.ensure_rows(10);
        for top in [10, 20, 30, 32] {
            assert_eq!(view.one_page_forwards(), Ok(()));
            assert_eq!(view.top(), top);
        }
        assert_eq!(view.one_page_forwards(), Err(EdgeError));
        assert_eq!(view.one_line_forwards(), Err(EdgeError));
        assert_eq!(view.ensure_rows(10).len(), 10);
        assert_eq!(view.one_page_backwards(), Ok(()));
        assert_eq!(view.top(), 22);
        view.scroll_to_top();
        assert_eq!(view.top(), 0);
    }

    #[test]
    fn test_month_title_pinned() {
        let mut view = default_view();
        let may = MonthRef::new(2024, Month::May).unwrap();
        let june = MonthRef::new(2024, Month::June).unwrap();
        assert_eq!(view.ensure_rows(4)[0], Row::Title(may));
        view.one_line_forwards().unwrap();
        let rows = view.ensure_rows(4);
        assert_eq!(rows[0], Row::Title(may));
        assert_eq!(rows[1], Row::Week { month: may, week: 1 });
        assert_eq!(view.row_at(0), Some(Row::Title(may)));
        // Scrolled to the spacer between May and June
        for _ in 0..5 {
            view.one_line_forwards().unwrap();
        }
        assert_eq!(view.top(), 6);
        assert_eq!(view.row_at(0), Some(Row::Spacer));
        assert_eq!(view.row_at(1), Some(Row::Title(june)));
        view.one_line_forwards().unwrap();
        view.one_line_forwards().unwrap();
        assert_eq!(view.row_at(0), Some(Row::Title(june)));
        assert_eq!(view.row_at(1), Some(Row::Week { month: june, week: 1 }));
    }

    #[test]
    fn test_resize_clamps_top() {
        let mut view = default_view();
        view.ensure_rows(10);
        view.one_page_forwards().unwrap();
        view.one_page_forwards().unwrap();
        view.one_page_forwards().unwrap();
        assert_eq!(view.top(), 30);
        assert_eq!(view.ensure_rows(20).len(), 20);
        assert_eq!(view.top(), 22);
        assert_eq!(view.ensure_rows(100).len(), 42);
        assert_eq!(view.top(), 0);
        assert_eq!(view.one_line_forwards(), Err(EdgeError));
    }
}
