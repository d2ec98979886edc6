use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::ui::theme::Theme;

pub const NOW_BUTTON_WIDTH: u16 = 12;
pub const NOW_BUTTON_HEIGHT: u16 = 3;

pub struct NowButton<'a> {
    /// Whether the current talk is above the viewport.
    above: bool,
    theme: &'a Theme,
}

impl<'a> NowButton<'a> {
    pub fn new(above: bool, theme: &'a Theme) -> Self {
        Self { above, theme }
    }
}

impl Widget for NowButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let style = Style::default().fg(colors.button_fg()).bg(colors.button_bg());

        let block = Block::bordered()
            .border_style(style)
            .style(style);
        let inner = block.inner(area);
        block.render(area, buf);

        let arrow = if self.above { "\u{25b2}" } else { "\u{25bc}" };
        Paragraph::new(Line::from(Span::styled(
            format!("{arrow} Now"),
            style.add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(inner, buf);
    }
}
