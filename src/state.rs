use crate::calendar::MonthLabel;
use time::Date;

/// One user action, applied synchronously and to completion before the next
/// input is read.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Event {
    SelectDay(Date),
    PreviousMonth,
    NextMonth,
    GoToToday,
    ToggleDarkMode,
}

/// All mutable UI state.  The displayed month and the selected day are
/// independent: month navigation never moves the selection, and selecting a
/// day never changes the grid.  Only `GoToToday` touches both.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct UiState {
    pub(crate) today: Date,
    pub(crate) selected_day: Date,
    pub(crate) month_label: MonthLabel,
    pub(crate) dark_mode: bool,
}

impl UiState {
    pub(crate) fn new(today: Date) -> UiState {
        UiState {
            today,
            selected_day: today,
            month_label: MonthLabel::of(today),
            dark_mode: false,
        }
    }

    // Returns `false` if the event cannot apply (month navigation past the
    // representable range of `Date`).
    pub(crate) fn apply(&mut self, event: Event) -> bool {
        match event {
            Event::SelectDay(day) => {
                self.selected_day = day;
                true
            }
            Event::PreviousMonth => match self.month_label.previous() {
                Some(label) => {
                    self.month_label = label;
                    true
                }
                None => false,
            },
            Event::NextMonth => match self.month_label.next() {
                Some(label) => {
                    self.month_label = label;
                    true
                }
                None => false,
            },
            Event::GoToToday => {
                self.selected_day = self.today;
                self.month_label = MonthLabel::of(self.today);
                true
            }
            Event::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
                true
            }
        }
    }
}
