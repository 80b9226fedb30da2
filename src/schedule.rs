use crate::calendar::short_month;
use crate::meetings::Meeting;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget},
};
use time::Date;

static EMPTY_PLACEHOLDER: &str = "No Meetings for Today";

/// The side panel listing the selected day's meetings, or the empty-state
/// placeholder.
#[derive(Clone, Debug)]
pub(crate) struct Schedule<'a> {
    day: Date,
    meetings: Vec<&'a Meeting>,
    theme: &'static Theme,
}

impl<'a> Schedule<'a> {
    pub(crate) fn new(
        day: Date,
        meetings: Vec<&'a Meeting>,
        theme: &'static Theme,
    ) -> Schedule<'a> {
        Schedule {
            day,
            meetings,
            theme,
        }
    }

    fn to_text(&self) -> Text<'static> {
        let mut lines = vec![
            Line::from(Span::styled(
                format!(
                    "Schedule for {} {:02}, {}",
                    short_month(self.day.month()),
                    self.day.day(),
                    self.day.year()
                ),
                self.theme.title,
            )),
            Line::raw(""),
        ];
        if self.meetings.is_empty() {
            lines.push(Line::from(Span::styled(
                EMPTY_PLACEHOLDER,
                self.theme.muted,
            )));
        } else {
            for meeting in &self.meetings {
                lines.push(Line::from_iter([
                    Span::styled(format!(" {} ", meeting.initials()), self.theme.avatar),
                    Span::raw(" "),
                    Span::styled(meeting.name.clone(), self.theme.normal),
                ]));
                lines.push(Line::from_iter([
                    Span::raw("     "),
                    Span::styled(meeting.time_range(), self.theme.muted),
                ]));
                // Edit and Cancel are placeholders with no bound keys
                lines.push(Line::from_iter([
                    Span::raw("     "),
                    Span::styled(
                        format!("{} · Edit · Cancel", meeting.avatar_host()),
                        self.theme.inert,
                    ),
                ]));
                lines.push(Line::raw(""));
            }
        }
        Text::from(lines)
    }
}

impl Widget for Schedule<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.to_text()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meetings::{MeetingSource, Roster};
    use crate::theme::LIGHT;
    use time::macros::{date, datetime};

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn lists_meetings_for_the_day() {
        let roster = Roster::seeded(datetime!(2024-03-15 9:00 UTC));
        let day = date!(2024 - 03 - 15);
        let panel = Schedule::new(day, roster.on_day(day), &LIGHT);
        let text = panel.to_text();
        let lines = text.lines.iter().map(line_text).collect::<Vec<_>>();
        assert_eq!(lines[0], "Schedule for Mar 15, 2024");
        assert_eq!(lines[2], " LA  Leslie Alexander");
        assert_eq!(lines[3], "     9:00 AM - 10:00 AM");
        assert_eq!(lines[4], "     images.unsplash.com · Edit · Cancel");
        assert_eq!(lines[6], " MF  Michael Foster");
        assert_eq!(lines[10], " DV  Dries Vincent");
        assert!(
            !lines.iter().any(|l| l.contains(EMPTY_PLACEHOLDER)),
            "placeholder should not appear alongside meetings"
        );
    }

    #[test]
    fn empty_day_shows_the_placeholder() {
        let roster = Roster::seeded(datetime!(2024-03-15 9:00 UTC));
        let day = date!(2024 - 03 - 17);
        let panel = Schedule::new(day, roster.on_day(day), &LIGHT);
        let text = panel.to_text();
        let lines = text.lines.iter().map(line_text).collect::<Vec<_>>();
        assert_eq!(lines[0], "Schedule for Mar 17, 2024");
        assert_eq!(lines[2], EMPTY_PLACEHOLDER);
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn title_zero_pads_the_day() {
        let panel = Schedule::new(date!(2024 - 04 - 05), Vec::new(), &LIGHT);
        let text = panel.to_text();
        assert_eq!(line_text(&text.lines[0]), "Schedule for Apr 05, 2024");
    }
}
