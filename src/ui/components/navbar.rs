use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::ui::theme::Theme;

pub struct Navbar<'a> {
    title: &'a str,
    subtitle: &'a str,
    right_button: &'a str,
    theme: &'a Theme,
}

impl<'a> Navbar<'a> {
    pub fn new(title: &'a str, subtitle: &'a str, right_button: &'a str, theme: &'a Theme) -> Self {
        Self {
            title,
            subtitle,
            right_button,
            theme,
        }
    }
}

impl Widget for Navbar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.header_bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let title = Paragraph::new(Line::from(Span::styled(
            self.title,
            Style::default()
                .fg(colors.header_fg())
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        title.render(Rect::new(inner.x, inner.y, inner.width, 1), buf);

        let button = Paragraph::new(Line::from(Span::styled(
            format!("{} ", self.right_button),
            Style::default().fg(colors.accent()),
        )))
        .alignment(Alignment::Right);
        button.render(Rect::new(inner.x, inner.y, inner.width, 1), buf);

        if inner.height > 1 {
            let subtitle = Paragraph::new(Line::from(Span::styled(
                self.subtitle,
                Style::default().fg(colors.muted()),
            )))
            .alignment(Alignment::Center);
            subtitle.render(Rect::new(inner.x, inner.y + 1, inner.width, 1), buf);
        }
    }
}
