use crate::calendar::{MonthView, GRID_WIDTH};
use crate::help::Help;
use crate::meetings::MeetingSource;
use crate::schedule::Schedule;
use crate::state::{Event, UiState};
use crate::theme::Theme;
use crossterm::event::{read, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};
use time::{Date, Duration};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App<S> {
    state: UiState,
    roster: S,
    mode: Mode,
}

impl<S: MeetingSource> App<S> {
    pub(crate) fn new(today: Date, roster: S) -> App<S> {
        App {
            state: UiState::new(today),
            roster,
            mode: Mode::Calendar,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.mode = Mode::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.mode {
            Mode::Calendar => match key {
                KeyCode::Char('h') | KeyCode::Left => self.move_selection(Duration::days(-1)),
                KeyCode::Char('l') | KeyCode::Right => self.move_selection(Duration::days(1)),
                KeyCode::Char('k') | KeyCode::Up => self.move_selection(Duration::weeks(-1)),
                KeyCode::Char('j') | KeyCode::Down => self.move_selection(Duration::weeks(1)),
                KeyCode::Char('p') | KeyCode::PageUp => self.state.apply(Event::PreviousMonth),
                KeyCode::Char('n') | KeyCode::PageDown => self.state.apply(Event::NextMonth),
                KeyCode::Char('t') | KeyCode::Home => self.state.apply(Event::GoToToday),
                KeyCode::Char('d') => self.state.apply(Event::ToggleDarkMode),
                KeyCode::Char('?') => {
                    self.mode = Mode::Helping;
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.mode = Mode::Quitting;
                    true
                }
                _ => false,
            },
            Mode::Helping => {
                self.mode = Mode::Calendar;
                true
            }
            Mode::Quitting => false,
        }
    }

    // Selection moves are SelectDay events: the grid never follows the
    // selection.  Fails only at the representable limits of Date.
    fn move_selection(&mut self, delta: Duration) -> bool {
        match self.state.selected_day.checked_add(delta) {
            Some(day) => self.state.apply(Event::SelectDay(day)),
            None => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.mode == Mode::Quitting
    }
}

impl<S: MeetingSource> Widget for &mut App<S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let App {
            state,
            roster,
            mode,
        } = self;
        let theme = Theme::of(state.dark_mode);
        buf.set_style(area, theme.base);
        if area.height == 0 || area.width < 2 {
            return;
        }
        buf.set_string(area.x + 1, area.y, "Upcoming Meetings", theme.title);
        let glyph = if state.dark_mode { "\u{263e}" } else { "\u{2600}" };
        buf.set_string(area.x + area.width - 2, area.y, glyph, theme.title);
        let [_, body] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);
        let [_, grid_area, _, schedule_area] = Layout::horizontal([
            Constraint::Length(2),
            Constraint::Length(GRID_WIDTH),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .areas(body);
        MonthView::new(&*roster).render(grid_area, buf, state);
        Schedule::new(state.selected_day, roster.on_day(state.selected_day), theme)
            .render(schedule_area, buf);
        if *mode == Mode::Helping {
            Help(theme.base).render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Mode {
    Calendar,
    Helping,
    Quitting,
}
