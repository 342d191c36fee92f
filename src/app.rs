use crate::calendar::{Calendar, CalendarView};
use crate::help::Help;
use crate::selection::Selection;
use crate::theme::BASE_STYLE;
use crossterm::event::{
    read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::Rect,
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    view: CalendarView,
    selection: Selection,
    state: AppState,
    // Area the calendar was last drawn in, for mapping clicks to days
    area: Rect,
}

impl App {
    pub(crate) fn new(view: CalendarView) -> App {
        App {
            view,
            selection: Selection::new(),
            state: AppState::Calendar,
            area: Rect::default(),
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        log::info!("Exiting with selection: {}", self.selection);
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        match read()? {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) => {
                if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                    self.state = AppState::Quitting;
                } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                    self.beep()?;
                }
            }
            Event::Mouse(event) => self.handle_mouse(event),
            // Redraw on resize, and we might as well redraw on other stuff
            // too
            _ => (),
        }
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.state {
            AppState::Calendar => match key {
                KeyCode::Char('j') | KeyCode::Down => self.view.one_line_forwards().is_ok(),
                KeyCode::Char('k') | KeyCode::Up => self.view.one_line_backwards().is_ok(),
                KeyCode::Char('z') | KeyCode::PageDown => self.view.one_page_forwards().is_ok(),
                KeyCode::Char('w') | KeyCode::PageUp => self.view.one_page_backwards().is_ok(),
                KeyCode::Char('0') | KeyCode::Home => {
                    self.view.scroll_to_top();
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Calendar;
                true
            }
            AppState::Quitting => false,
        }
    }

    fn handle_mouse(&mut self, event: MouseEvent) {
        if self.state != AppState::Calendar {
            return;
        }
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(date) =
                    Calendar::locate(self.area, &self.view, event.column, event.row)
                {
                    self.selection.click(date);
                }
            }
            // Hitting either end of the calendar with the wheel isn't worth a
            // beep
            MouseEventKind::ScrollDown => self.view.one_line_forwards().unwrap_or_default(),
            MouseEventKind::ScrollUp => self.view.one_line_backwards().unwrap_or_default(),
            _ => (),
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        self.area = area;
        Calendar::new(&self.selection).render(area, buf, &mut self.view);
        if self.state == AppState::Helping {
            Help.render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Calendar,
    Helping,
    Quitting,
}
