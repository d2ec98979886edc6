use chrono::{DateTime, Utc};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::schedule::talk::{ScheduleData, Talk};
use crate::schedule::time::{self, TalkStatus, TimeFormatter};
use crate::ui::theme::Theme;

/// Full view of a single talk, with hints for paging to its neighbours.
pub struct TalkDetail<'a> {
    data: &'a ScheduleData,
    talk_index: usize,
    now: DateTime<Utc>,
    formatter: &'a TimeFormatter,
    theme: &'a Theme,
}

impl<'a> TalkDetail<'a> {
    pub fn new(
        data: &'a ScheduleData,
        talk_index: usize,
        now: DateTime<Utc>,
        formatter: &'a TimeFormatter,
        theme: &'a Theme,
    ) -> Self {
        Self {
            data,
            talk_index,
            now,
            formatter,
            theme,
        }
    }

    fn neighbour_title(&self, index: Option<usize>) -> Option<String> {
        index
            .and_then(|i| self.data.entry(i))
            .map(|entry| entry.title().to_string())
    }

    fn body(&self, talk: &Talk) -> Vec<Line<'static>> {
        let colors = &self.theme.colors;
        let status = time::status(self.now, talk.start, talk.end);
        let (status_text, status_color) = match status {
            TalkStatus::Present => ("Happening now", colors.present()),
            TalkStatus::Future => ("Upcoming", colors.future()),
            TalkStatus::Past => ("Finished", colors.past()),
        };

        let mut tags = Vec::new();
        if talk.keynote {
            tags.push(Span::styled(
                "KEYNOTE  ",
                Style::default()
                    .fg(colors.keynote())
                    .add_modifier(Modifier::BOLD),
            ));
        }
        if talk.lightning {
            tags.push(Span::styled(
                "\u{26a1} LIGHTNING  ",
                Style::default().fg(colors.lightning()),
            ));
        }
        tags.push(Span::styled(status_text, Style::default().fg(status_color)));

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                talk.title.clone(),
                Style::default()
                    .fg(colors.fg())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(
                    "{}, {}",
                    self.formatter.format_day(talk.start),
                    self.formatter.format_range(talk.start, talk.end)
                ),
                Style::default().fg(colors.accent()),
            )),
            Line::from(tags),
            Line::from(""),
        ];

        if !talk.speakers.is_empty() {
            lines.push(Line::from(Span::styled(
                talk.speakers.join(", "),
                Style::default().fg(colors.fg()),
            )));
            lines.push(Line::from(""));
        }

        if let Some(description) = &talk.description {
            lines.push(Line::from(Span::styled(
                description.clone(),
                Style::default().fg(colors.muted()),
            )));
        }
        lines
    }
}

impl Widget for TalkDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Talk ")
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(talk) = self.data.entry(self.talk_index).and_then(|e| e.as_talk()) else {
            Paragraph::new("This talk is no longer on the schedule.")
                .style(Style::default().fg(colors.muted()))
                .render(inner, buf);
            return;
        };

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(2)])
            .split(inner);

        Paragraph::new(self.body(talk))
            .wrap(Wrap { trim: false })
            .render(layout[0], buf);

        let prev = self.neighbour_title(self.data.previous_talk(self.talk_index));
        let next = self.neighbour_title(self.data.next_talk(self.talk_index));
        let mut nav = Vec::new();
        if let Some(title) = prev {
            nav.push(Span::styled(
                format!("\u{2190} {title}   "),
                Style::default().fg(colors.muted()),
            ));
        }
        if let Some(title) = next {
            nav.push(Span::styled(
                format!("{title} \u{2192}"),
                Style::default().fg(colors.muted()),
            ));
        }
        Paragraph::new(vec![Line::from(""), Line::from(nav)]).render(layout[1], buf);
    }
}
