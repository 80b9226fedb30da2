use crate::calendar::CalendarDay;
use ratatui::style::{Color, Modifier, Style};

/// One palette per mode.  Every style carries only the deltas it needs on
/// top of `base`, which is applied to the whole frame first.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Theme {
    pub(crate) base: Style,
    pub(crate) title: Style,
    pub(crate) weekday: Style,
    pub(crate) normal: Style,
    pub(crate) muted: Style,
    pub(crate) today: Style,
    pub(crate) selected: Style,
    pub(crate) selected_today: Style,
    pub(crate) dot: Style,
    pub(crate) avatar: Style,
    pub(crate) inert: Style,
}

pub(crate) const LIGHT: Theme = Theme {
    base: Style::new().fg(Color::Black).bg(Color::White),
    title: Style::new().fg(Color::Black).add_modifier(Modifier::BOLD),
    weekday: Style::new().fg(Color::DarkGray),
    normal: Style::new().fg(Color::Black),
    muted: Style::new().fg(Color::DarkGray),
    today: Style::new().fg(Color::Red),
    selected: Style::new().fg(Color::White).bg(Color::Black),
    selected_today: Style::new().fg(Color::White).bg(Color::Red),
    dot: Style::new().fg(Color::Blue),
    avatar: Style::new().fg(Color::White).bg(Color::Blue),
    inert: Style::new().fg(Color::Gray),
};

pub(crate) const DARK: Theme = Theme {
    base: Style::new().fg(Color::Gray).bg(Color::Black),
    title: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
    weekday: Style::new().fg(Color::DarkGray),
    normal: Style::new().fg(Color::Gray),
    muted: Style::new().fg(Color::DarkGray),
    today: Style::new().fg(Color::LightRed),
    selected: Style::new().fg(Color::White).bg(Color::DarkGray),
    selected_today: Style::new().fg(Color::White).bg(Color::LightRed),
    dot: Style::new().fg(Color::LightBlue),
    avatar: Style::new().fg(Color::Black).bg(Color::LightBlue),
    inert: Style::new().fg(Color::DarkGray),
};

impl Theme {
    pub(crate) fn of(dark_mode: bool) -> &'static Theme {
        if dark_mode {
            &DARK
        } else {
            &LIGHT
        }
    }

    /// Day-cell style resolution.  Selection wins over today, today wins
    /// over in-month, and adjacent-month days are muted; the cell is bold
    /// whenever it is selected or today.
    pub(crate) fn day_style(&self, day: &CalendarDay) -> Style {
        let style = match (day.is_selected, day.is_today, day.in_month) {
            (true, true, _) => self.selected_today,
            (true, false, _) => self.selected,
            (false, true, _) => self.today,
            (false, false, true) => self.normal,
            (false, false, false) => self.muted,
        };
        if day.is_selected || day.is_today {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}
