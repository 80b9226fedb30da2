mod grid;
mod widget;
pub(crate) use self::grid::{short_month, CalendarDay, MonthLabel};
pub(crate) use self::widget::{MonthView, GRID_WIDTH};
