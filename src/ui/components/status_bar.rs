use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::screen::scroll::{BarStyle, StatusBar};
use crate::ui::theme::Theme;

/// The single top row standing in for a device status bar.
pub struct StatusBarLine<'a> {
    chrome: &'a StatusBar,
    clock: &'a str,
    label: &'a str,
    theme: &'a Theme,
}

impl<'a> StatusBarLine<'a> {
    pub fn new(chrome: &'a StatusBar, clock: &'a str, label: &'a str, theme: &'a Theme) -> Self {
        Self {
            chrome,
            clock,
            label,
            theme,
        }
    }
}

impl Widget for StatusBarLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        if self.chrome.hidden {
            buf.set_style(area, Style::default().bg(colors.bg()));
            return;
        }

        let style = match self.chrome.style {
            BarStyle::LightContent => Style::default()
                .fg(colors.status_light_fg())
                .bg(colors.status_light_bg()),
            BarStyle::Default => Style::default()
                .fg(colors.status_default_fg())
                .bg(colors.status_default_bg()),
        };

        Paragraph::new(Line::from(Span::styled(format!(" {}", self.clock), style)))
            .style(style)
            .render(area, buf);
        Paragraph::new(Line::from(Span::styled(format!("{} ", self.label), style)))
            .alignment(Alignment::Right)
            .render(area, buf);
    }
}
