use super::grid::{build_grid, weekday_initials};
use crate::meetings::MeetingSource;
use crate::state::UiState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Text,
    widgets::{Paragraph, StatefulWidget, Widget},
};

/// Number of columns per day of week
const DAY_WIDTH: u16 = 7;

/// Width of the grid in columns (the last cell has no trailing gap)
pub(crate) const GRID_WIDTH: u16 = DAY_WIDTH * 6 + 4;

/// Lines taken up by the title, the weekday initials, and their rule
const HEADER_LINES: u16 = 3;

/// Lines taken up by each week: the day numbers and the presence dots
const WEEK_LINES: u16 = 2;

/// Column of the units digit within a cell; the weekday initial and the
/// presence dot line up under it
const MARK_OFFSET: u16 = 2;

const ACS_HLINE: char = '─';
const DOT: char = '•';

/// The month grid: title, weekday initials, then one week per two lines
/// (day numbers above, presence dots below).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MonthView<'a, S> {
    meetings: &'a S,
}

impl<'a, S> MonthView<'a, S> {
    pub(crate) fn new(meetings: &'a S) -> MonthView<'a, S> {
        MonthView { meetings }
    }
}

impl<S: MeetingSource> StatefulWidget for MonthView<'_, S> {
    type State = UiState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut UiState) {
        let theme = Theme::of(state.dark_mode);
        let days = build_grid(state.month_label, state.today, state.selected_day);
        let mut canvas = Canvas { area, buf };
        let title = state.month_label.title();
        let title_width = u16::try_from(title.len()).unwrap_or(u16::MAX);
        canvas.print(
            0,
            GRID_WIDTH.saturating_sub(title_width) / 2,
            &title,
            theme.title,
        );
        for (i, letter) in std::iter::zip(0u16.., weekday_initials(state.today)) {
            canvas.print(
                1,
                i * DAY_WIDTH + MARK_OFFSET,
                String::from(letter),
                theme.weekday,
            );
        }
        canvas.hline(2, 0, GRID_WIDTH, theme.weekday);
        for (row, week) in std::iter::zip(0u16.., days.chunks(7)) {
            let y = HEADER_LINES + row * WEEK_LINES;
            for (col, day) in std::iter::zip(0u16.., week) {
                canvas.print(y, col * DAY_WIDTH, day.show(), theme.day_style(day));
                if self.meetings.any_on(day.date) {
                    canvas.print(
                        y + 1,
                        col * DAY_WIDTH + MARK_OFFSET,
                        String::from(DOT),
                        theme.dot,
                    );
                }
            }
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn print<T: AsRef<str>>(&mut self, y: u16, x: u16, s: T, style: Style) {
        if y < self.area.height && x < self.area.width {
            let text = Text::styled(s.as_ref(), style);
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            // A Paragraph truncates text that extends beyond the grid's
            // area; the Rect passed to it must stay within the frame lest a
            // panic result.
            Paragraph::new(text).render(
                Rect {
                    x: self.area.x + x,
                    y: self.area.y + y,
                    width: (self.area.width - x).min(width),
                    height: 1,
                },
                self.buf,
            );
        }
    }

    fn hline(&mut self, y: u16, x: u16, length: u16, style: Style) {
        self.print(y, x, String::from(ACS_HLINE).repeat(length.into()), style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meetings::Roster;
    use ratatui::style::{Color, Modifier};
    use time::macros::{date, datetime};

    fn buffer_lines(buf: &Buffer) -> Vec<String> {
        let area = *buf.area();
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn renders_march_2024() {
        let roster = Roster::seeded(datetime!(2024-03-15 9:00 UTC));
        let mut state = UiState::new(date!(2024 - 03 - 15));
        let area = Rect::new(0, 0, 46, 15);
        let mut buffer = Buffer::empty(area);
        MonthView::new(&roster).render(area, &mut buffer, &mut state);
        assert_eq!(
            buffer_lines(&buffer),
            [
                "                  March 2024                  ",
                "  S      M      T      W      T      F      S ",
                "──────────────────────────────────────────────",
                " 25     26     27     28     29      1      2 ",
                "                                              ",
                "  3      4      5      6      7      8      9 ",
                "                                              ",
                " 10     11     12     13     14    [15]    16 ",
                "                                     •      • ",
                " 17     18     19     20     21     22     23 ",
                "         •                                    ",
                " 24     25     26     27     28     29     30 ",
                "                                              ",
                " 31      1      2      3      4      5      6 ",
                "                                              ",
            ]
        );
        // selected & today cell
        let cell = &buffer[(36, 7)];
        assert_eq!(cell.fg, Color::White);
        assert_eq!(cell.bg, Color::Red);
        assert!(cell.modifier.contains(Modifier::BOLD));
        // presence dot
        assert_eq!(buffer[(37, 8)].fg, Color::Blue);
    }

    #[test]
    fn selection_in_adjacent_month_is_marked_without_moving_the_grid() {
        let roster = Roster::seeded(datetime!(2024-03-15 9:00 UTC));
        let mut state = UiState::new(date!(2024 - 03 - 15));
        state.selected_day = date!(2024 - 02 - 27);
        let area = Rect::new(0, 0, 46, 15);
        let mut buffer = Buffer::empty(area);
        MonthView::new(&roster).render(area, &mut buffer, &mut state);
        let lines = buffer_lines(&buffer);
        assert_eq!(lines[0], "                  March 2024                  ");
        assert_eq!(lines[3], " 25     26    [27]    28     29      1      2 ");
        // still marked as today, just not selected
        assert_eq!(lines[7], " 10     11     12     13     14     15     16 ");
        let today_cell = &buffer[(36, 7)];
        assert_eq!(today_cell.fg, Color::Red);
        assert!(today_cell.modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn no_dots_without_meetings() {
        let roster = Roster::seeded(datetime!(2024-06-01 9:00 UTC));
        let mut state = UiState::new(date!(2024 - 03 - 15));
        let area = Rect::new(0, 0, 46, 15);
        let mut buffer = Buffer::empty(area);
        MonthView::new(&roster).render(area, &mut buffer, &mut state);
        assert!(
            buffer_lines(&buffer)
                .iter()
                .all(|line| !line.contains('•')),
            "no meetings fall in March"
        );
    }
}
