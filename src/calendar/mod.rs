mod util;
mod view;
mod widget;
pub(crate) use self::view::CalendarView;
pub(crate) use self::widget::Calendar;
