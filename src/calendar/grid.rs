use std::fmt;
use std::iter::successors;
use std::str::FromStr;
use thiserror::Error;
use time::{Date, Duration, Month, Weekday};

const DAYS_IN_WEEK: usize = 7;

/// The month currently shown in the grid, independent of the day selection.
///
/// `Display` produces the compact label used for state round-tripping
/// (`Mar-2024`); `FromStr` parses it back.  Labels are only ever produced by
/// our own formatter, never typed by the user.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MonthLabel {
    month: Month,
    year: i32,
}

impl MonthLabel {
    pub(crate) fn of(date: Date) -> MonthLabel {
        MonthLabel {
            month: date.month(),
            year: date.year(),
        }
    }

    /// The long header form, e.g. `March 2024`.
    pub(crate) fn title(&self) -> String {
        format!("{} {}", self.month, self.year)
    }

    pub(crate) fn first_day(&self) -> Date {
        Date::from_calendar_date(self.year, self.month, 1)
            .expect("MonthLabel year should be within Date's range")
    }

    pub(crate) fn last_day(&self) -> Date {
        Date::from_calendar_date(self.year, self.month, self.month.length(self.year))
            .expect("MonthLabel year should be within Date's range")
    }

    pub(crate) fn contains(&self, date: Date) -> bool {
        date.month() == self.month && date.year() == self.year
    }

    // Returns `None` if the previous month lies outside Date's range.
    pub(crate) fn previous(self) -> Option<MonthLabel> {
        let year = if self.month == Month::January {
            self.year.checked_sub(1)?
        } else {
            self.year
        };
        MonthLabel {
            month: self.month.previous(),
            year,
        }
        .in_range()
    }

    // Returns `None` if the next month lies outside Date's range.
    pub(crate) fn next(self) -> Option<MonthLabel> {
        let year = if self.month == Month::December {
            self.year.checked_add(1)?
        } else {
            self.year
        };
        MonthLabel {
            month: self.month.next(),
            year,
        }
        .in_range()
    }

    fn in_range(self) -> Option<MonthLabel> {
        Date::from_calendar_date(self.year, self.month, 1)
            .ok()
            .map(|_| self)
    }
}

impl fmt::Display for MonthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", short_month(self.month), self.year)
    }
}

impl FromStr for MonthLabel {
    type Err = ParseMonthLabelError;

    fn from_str(s: &str) -> Result<MonthLabel, ParseMonthLabelError> {
        let Some((month, year)) = s.split_once('-') else {
            return Err(ParseMonthLabelError::Malformed(s.to_owned()));
        };
        let month = parse_short_month(month)
            .ok_or_else(|| ParseMonthLabelError::Month(month.to_owned()))?;
        let year = year
            .parse::<i32>()
            .map_err(|_| ParseMonthLabelError::Malformed(s.to_owned()))?;
        MonthLabel { month, year }
            .in_range()
            .ok_or(ParseMonthLabelError::YearOutOfRange(year))
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub(crate) enum ParseMonthLabelError {
    #[error("malformed month label: {0:?}")]
    Malformed(String),
    #[error("unknown month abbreviation: {0:?}")]
    Month(String),
    #[error("year {0} is out of range")]
    YearOutOfRange(i32),
}

pub(crate) fn short_month(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

fn parse_short_month(s: &str) -> Option<Month> {
    match s {
        "Jan" => Some(Month::January),
        "Feb" => Some(Month::February),
        "Mar" => Some(Month::March),
        "Apr" => Some(Month::April),
        "May" => Some(Month::May),
        "Jun" => Some(Month::June),
        "Jul" => Some(Month::July),
        "Aug" => Some(Month::August),
        "Sep" => Some(Month::September),
        "Oct" => Some(Month::October),
        "Nov" => Some(Month::November),
        "Dec" => Some(Month::December),
        _ => None,
    }
}

/// A grid cell: a concrete date plus the predicates the renderer needs,
/// recomputed on every render from the current state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct CalendarDay {
    pub(crate) date: Date,
    pub(crate) in_month: bool,
    pub(crate) is_today: bool,
    pub(crate) is_selected: bool,
}

impl CalendarDay {
    // The selected day is bracketed; everything else gets matching padding.
    pub(crate) fn show(&self) -> String {
        let day = self.date.day();
        if self.is_selected {
            format!("[{day:2}]")
        } else {
            format!(" {day:2} ")
        }
    }
}

/// Ordered dates from the Sunday on or before the first of the month through
/// the Saturday on or after its last day, so the grid always renders complete
/// weeks, including days from adjacent months.
pub(crate) fn month_grid(label: MonthLabel) -> Vec<Date> {
    let start = start_of_week(label.first_day());
    let end = end_of_week(label.last_day());
    successors(Some(start), |&d| d.next_day())
        .take_while(move |&d| d <= end)
        .collect()
}

pub(crate) fn build_grid(label: MonthLabel, today: Date, selected: Date) -> Vec<CalendarDay> {
    month_grid(label)
        .into_iter()
        .map(|date| CalendarDay {
            date,
            in_month: label.contains(date),
            is_today: date == today,
            is_selected: date == selected,
        })
        .collect()
}

/// One-letter abbreviations for the week containing `today`, Sunday first.
pub(crate) fn weekday_initials(today: Date) -> [char; DAYS_IN_WEEK] {
    let mut letters = [' '; DAYS_IN_WEEK];
    let days = successors(Some(start_of_week(today)), |&d| d.next_day());
    for (slot, date) in letters.iter_mut().zip(days) {
        *slot = initial(date.weekday());
    }
    letters
}

fn initial(wd: Weekday) -> char {
    match wd {
        Weekday::Sunday | Weekday::Saturday => 'S',
        Weekday::Monday => 'M',
        Weekday::Tuesday | Weekday::Thursday => 'T',
        Weekday::Wednesday => 'W',
        Weekday::Friday => 'F',
    }
}

fn start_of_week(date: Date) -> Date {
    let back = i64::from(date.weekday().number_days_from_sunday());
    date.checked_sub(Duration::days(back)).unwrap_or(date)
}

fn end_of_week(date: Date) -> Date {
    let forward = 6 - i64::from(date.weekday().number_days_from_sunday());
    date.checked_add(Duration::days(forward)).unwrap_or(date)
}
