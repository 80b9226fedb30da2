use time::{Date, Duration, OffsetDateTime, Time};

/// A meeting record.  Immutable after creation; the whole set is fixed at
/// startup.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Meeting {
    pub(crate) id: u32,
    pub(crate) name: String,
    pub(crate) image_url: String,
    pub(crate) start: OffsetDateTime,
    pub(crate) end: OffsetDateTime,
}

impl Meeting {
    /// Calendar-day equality on the start instant: the meeting belongs to
    /// `day` if its start falls on that local date, ignoring time-of-day.
    pub(crate) fn starts_on(&self, day: Date) -> bool {
        self.start.date() == day
    }

    // Terminal stand-in for the avatar image
    pub(crate) fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect()
    }

    pub(crate) fn avatar_host(&self) -> &str {
        let rest = self
            .image_url
            .split_once("://")
            .map_or(self.image_url.as_str(), |(_, rest)| rest);
        rest.split('/').next().unwrap_or(rest)
    }

    pub(crate) fn time_range(&self) -> String {
        format!(
            "{} - {}",
            clock_time(self.start.time()),
            clock_time(self.end.time())
        )
    }
}

fn clock_time(t: Time) -> String {
    let (hour, period) = match t.hour() {
        0 => (12, "AM"),
        h @ 1..=11 => (h, "AM"),
        12 => (12, "PM"),
        h => (h - 12, "PM"),
    };
    format!("{hour}:{minute:02} {period}", minute = t.minute())
}

/// Where meetings come from.  Injected so the day filter can be exercised
/// against a fixed clock instead of wall-clock drift.
pub(crate) trait MeetingSource {
    fn all(&self) -> &[Meeting];

    fn on_day(&self, day: Date) -> Vec<&Meeting> {
        let mut meetings: Vec<&Meeting> =
            self.all().iter().filter(|m| m.starts_on(day)).collect();
        // stable listing order: by start instant, id as the tie-break
        meetings.sort_by_key(|m| (m.start, m.id));
        meetings
    }

    fn any_on(&self, day: Date) -> bool {
        self.all().iter().any(|m| m.starts_on(day))
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Roster(Vec<Meeting>);

impl Roster {
    /// The five fixture meetings, offset from the injected `now`.
    pub(crate) fn seeded(now: OffsetDateTime) -> Roster {
        let meeting = |id, name: &str, image_url: &str, start, end| Meeting {
            id,
            name: name.to_owned(),
            image_url: image_url.to_owned(),
            start,
            end,
        };
        Roster(vec![
            meeting(
                1,
                "Leslie Alexander",
                "https://images.unsplash.com/photo-1494790108377-be9c29b29330?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80",
                now,
                now + Duration::hours(1),
            ),
            meeting(
                2,
                "Michael Foster",
                "https://images.unsplash.com/photo-1519244703995-f4e0f30006d5?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80",
                now + Duration::minutes(90),
                now + Duration::minutes(150),
            ),
            meeting(
                3,
                "Dries Vincent",
                "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80",
                now + Duration::hours(3),
                now + Duration::hours(4),
            ),
            meeting(
                4,
                "Lindsay Walton",
                "https://images.unsplash.com/photo-1517841905240-472988babdf9?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80",
                now + Duration::days(1),
                now + Duration::days(1) + Duration::hours(1),
            ),
            meeting(
                5,
                "Courtney Henry",
                "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80",
                now + Duration::days(3),
                now + Duration::weeks(1) + Duration::hours(1),
            ),
        ])
    }
}

impl MeetingSource for Roster {
    fn all(&self) -> &[Meeting] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use time::macros::{date, datetime};

    fn roster() -> Roster {
        Roster::seeded(datetime!(2024-03-15 9:00 UTC))
    }

    #[test]
    fn seeded_roster_is_well_formed() {
        let roster = roster();
        let meetings = roster.all();
        assert_eq!(meetings.len(), 5);
        let ids = meetings.iter().map(|m| m.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), 5);
        for m in meetings {
            assert!(m.end > m.start, "{}", m.name);
            assert!(!m.image_url.is_empty(), "{}", m.name);
        }
    }

    #[test]
    fn on_day_filters_by_start_date() {
        let roster = roster();
        let names = |day| {
            roster
                .on_day(day)
                .into_iter()
                .map(|m| m.name.as_str())
                .collect::<Vec<_>>()
        };
        assert_eq!(
            names(date!(2024 - 03 - 15)),
            ["Leslie Alexander", "Michael Foster", "Dries Vincent"]
        );
        assert_eq!(names(date!(2024 - 03 - 16)), ["Lindsay Walton"]);
        assert_eq!(names(date!(2024 - 03 - 18)), ["Courtney Henry"]);
        assert_eq!(names(date!(2024 - 03 - 17)), Vec::<&str>::new());
    }

    #[test]
    fn end_date_does_not_mark_a_day() {
        // Courtney's meeting runs Mar 18 through Mar 22, but only the start
        // day counts
        let roster = roster();
        assert!(roster.any_on(date!(2024 - 03 - 18)));
        assert!(!roster.any_on(date!(2024 - 03 - 22)));
    }

    #[test]
    fn presence_dot_predicate() {
        let roster = roster();
        assert!(roster.any_on(date!(2024 - 03 - 15)));
        assert!(roster.any_on(date!(2024 - 03 - 16)));
        assert!(!roster.any_on(date!(2024 - 03 - 14)));
    }

    #[test]
    fn time_range_uses_twelve_hour_clock() {
        let roster = roster();
        assert_eq!(roster.all()[0].time_range(), "9:00 AM - 10:00 AM");
        assert_eq!(roster.all()[2].time_range(), "12:00 PM - 1:00 PM");
        let midnight = Meeting {
            start: datetime!(2024-03-15 0:00 UTC),
            end: datetime!(2024-03-15 0:30 UTC),
            ..roster.all()[0].clone()
        };
        assert_eq!(midnight.time_range(), "12:00 AM - 12:30 AM");
    }

    #[test]
    fn avatar_helpers() {
        let roster = roster();
        let leslie = &roster.all()[0];
        assert_eq!(leslie.initials(), "LA");
        assert_eq!(leslie.avatar_host(), "images.unsplash.com");
    }
}
