use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::schedule::talk::EventInfo;
use crate::ui::theme::Theme;

const LOGO: [&str; 3] = [
    "\u{2584}\u{2580}\u{2580} \u{2584}\u{2580}\u{2580} \u{2584}\u{2580}\u{2580}",
    "\u{2580}\u{2580}\u{2584} \u{2580}\u{2580}\u{2584} \u{2580}\u{2580}\u{2584}",
    "\u{2580}\u{2580}  \u{2580}\u{2580}  \u{2580}\u{2580} ",
];

/// Logo overlay drawn over the blank header of the list.
pub struct Splash<'a> {
    event: &'a EventInfo,
    dates: &'a str,
    theme: &'a Theme,
}

impl<'a> Splash<'a> {
    pub fn new(event: &'a EventInfo, dates: &'a str, theme: &'a Theme) -> Self {
        Self {
            event,
            dates,
            theme,
        }
    }
}

impl Widget for Splash<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let logo_style = Style::default().fg(colors.splash_fg());

        let mut lines = vec![Line::from("")];
        lines.extend(LOGO.iter().map(|row| Line::from(Span::styled(*row, logo_style))));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            self.event.name.as_str(),
            Style::default()
                .fg(colors.fg())
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            self.dates,
            Style::default().fg(colors.accent()),
        )));
        lines.push(Line::from(Span::styled(
            self.event.venue.as_str(),
            Style::default().fg(colors.muted()),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "[i] Event Info",
            Style::default().fg(colors.muted()),
        )));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().bg(colors.splash_bg()))
            .render(area, buf);
    }
}
