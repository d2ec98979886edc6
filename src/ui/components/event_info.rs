use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::schedule::talk::EventInfo;
use crate::ui::theme::Theme;

pub struct EventInfoView<'a> {
    event: &'a EventInfo,
    theme: &'a Theme,
}

impl<'a> EventInfoView<'a> {
    pub fn new(event: &'a EventInfo, theme: &'a Theme) -> Self {
        Self { event, theme }
    }
}

impl Widget for EventInfoView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Event Info ")
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.event.name.as_str(),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::from(Span::styled(
                self.event.venue.as_str(),
                Style::default().fg(colors.fg()),
            ))
            .alignment(Alignment::Center),
            Line::from(Span::styled(
                format!("Times shown in {}", self.event.time_zone),
                Style::default().fg(colors.muted()),
            ))
            .alignment(Alignment::Center),
            Line::from(""),
        ];

        for paragraph in &self.event.description {
            lines.push(Line::from(Span::styled(
                paragraph.as_str(),
                Style::default().fg(colors.fg()),
            )));
            lines.push(Line::from(""));
        }

        if let Some(website) = &self.event.website {
            lines.push(Line::from(Span::styled(
                website.as_str(),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::UNDERLINED),
            )));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
