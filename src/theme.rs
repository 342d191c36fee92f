use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const MONTH_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const STATUS_STYLE: Style = BASE_STYLE.add_modifier(Modifier::ITALIC);

// The styles below are patched on top of whatever a cell already has, so they
// only set the attributes they are responsible for.

pub(crate) const SUNDAY_STYLE: Style = Style::new().fg(Color::LightRed);

/// Days inside the selected range
pub(crate) const HIGHLIGHT_STYLE: Style = Style::new().bg(Color::Blue);

/// First and last days of the selected range
pub(crate) const EDGE_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);
