use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::screen::list_layout::{ListRow, RowKind};
use crate::screen::schedule::ScheduleScreen;
use crate::screen::scroll::StatusBar;
use crate::ui::components::navbar::Navbar;
use crate::ui::components::now_button::{NOW_BUTTON_HEIGHT, NOW_BUTTON_WIDTH, NowButton};
use crate::ui::components::splash::Splash;
use crate::ui::components::status_bar::StatusBarLine;
use crate::ui::components::talk_row::RowModel;
use crate::ui::layout::{clip_band, render_offset};
use crate::ui::theme::Theme;

/// Where each piece of the schedule screen lands for a given frame. Shared by
/// rendering and mouse hit testing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduleAreas {
    pub status_bar: Option<Rect>,
    pub list: Rect,
    pub navbar: Option<Rect>,
    pub now_button: Option<Rect>,
}

impl ScheduleAreas {
    pub fn new(area: Rect, screen: &ScheduleScreen) -> Self {
        let (status_bar, list) = if screen.options().status_bar_overlay && area.height > 1 {
            (
                Some(Rect::new(area.x, area.y, area.width, 1)),
                Rect::new(area.x, area.y + 1, area.width, area.height - 1),
            )
        } else {
            (None, area)
        };

        let signals = screen.signals();
        let navbar = clip_band(
            list,
            screen.points_to_rows(signals.navbar_offset),
            screen.options().navbar_rows() as u16,
        );

        Self {
            status_bar,
            list,
            navbar,
            now_button: now_button_band(list, screen.now_button_progress()),
        }
    }
}

/// The button slides up from below the list's bottom edge as `progress`
/// goes from 0 to 1.
fn now_button_band(list: Rect, progress: f32) -> Option<Rect> {
    if progress <= 0.0 || list.width < NOW_BUTTON_WIDTH + 2 {
        return None;
    }
    let column = Rect::new(
        list.right() - NOW_BUTTON_WIDTH - 2,
        list.y,
        NOW_BUTTON_WIDTH,
        list.height,
    );
    clip_band(column, now_button_top(list, progress), NOW_BUTTON_HEIGHT)
}

fn now_button_top(list: Rect, progress: f32) -> i32 {
    let travel = f32::from(NOW_BUTTON_HEIGHT + 1);
    i32::from(list.height) - (progress * travel).round() as i32
}

pub struct ScheduleView<'a> {
    screen: &'a ScheduleScreen,
    chrome: &'a StatusBar,
    theme: &'a Theme,
}

impl<'a> ScheduleView<'a> {
    pub fn new(screen: &'a ScheduleScreen, chrome: &'a StatusBar, theme: &'a Theme) -> Self {
        Self {
            screen,
            chrome,
            theme,
        }
    }

    fn row_lines(&self, row: &ListRow) -> Vec<Line<'static>> {
        let colors = &self.theme.colors;
        let screen = self.screen;
        match row.kind {
            RowKind::Header => vec![Line::from(""); row.height as usize],
            RowKind::Heading { group } => vec![Line::from(""), self.heading_line(group)],
            RowKind::Entry { index } => match screen.data().entry(index) {
                Some(entry) => RowModel::from_entry(
                    entry,
                    screen.state().current_time,
                    screen.formatter(),
                )
                .lines(screen.selected() == Some(index), self.theme),
                None => Vec::new(),
            },
            RowKind::Footer => vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Event Info",
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::UNDERLINED),
                ))
                .alignment(Alignment::Center),
                Line::from(""),
            ],
        }
    }

    fn heading_line(&self, group: usize) -> Line<'static> {
        let colors = &self.theme.colors;
        let screen = self.screen;
        let Some(day) = screen.groups().get(group) else {
            return Line::from("");
        };
        let date = day
            .entries
            .first()
            .and_then(|&index| screen.data().entry(index))
            .map(|entry| screen.formatter().format_day(entry.start()))
            .unwrap_or_default();
        Line::from(vec![
            Span::styled(
                format!(" {}", day.key.to_uppercase()),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {date}"), Style::default().fg(colors.muted())),
        ])
    }

    fn render_list(&self, list: Rect, buf: &mut Buffer) {
        let top = self.screen.state().scroll_offset.floor() as u32;
        let bottom = top + u32::from(list.height);

        for row in self.screen.layout().rows() {
            if row.bottom() <= top || row.y >= bottom {
                continue;
            }
            let selected = matches!(row.kind, RowKind::Entry { index } if self.screen.selected() == Some(index));
            for (offset, line) in self.row_lines(row).iter().enumerate() {
                let y = row.y + offset as u32;
                if y < top || y >= bottom {
                    continue;
                }
                let screen_y = list.y + (y - top) as u16;
                let line_area = Rect::new(list.x, screen_y, list.width, 1);
                if selected && offset + 1 < row.height as usize {
                    buf.set_style(line_area, Style::default().bg(self.theme.colors.selected_bg()));
                }
                Paragraph::new(line.clone()).render(line_area, buf);
            }
        }
    }

    /// Keep the current day's heading pinned once its own row scrolls away.
    fn render_sticky_heading(&self, list: Rect, navbar: Option<Rect>, buf: &mut Buffer) {
        let top = self.screen.state().scroll_offset.floor() as u32;
        let layout = self.screen.layout();
        let Some(group) = layout.heading_above(top) else {
            return;
        };
        let heading_row = layout
            .rows()
            .iter()
            .find(|row| row.kind == RowKind::Heading { group });
        if heading_row.is_some_and(|row| row.y + 1 >= top) {
            return;
        }
        let y = navbar.map_or(list.y, |r| r.bottom());
        if y >= list.bottom() {
            return;
        }
        let area = Rect::new(list.x, y, list.width, 1);
        buf.set_style(area, Style::default().bg(self.theme.colors.bg()));
        Paragraph::new(self.heading_line(group)).render(area, buf);
    }

    fn splash_dates(&self) -> String {
        let data = self.screen.data();
        let formatter = self.screen.formatter();
        let (Some(first), Some(last)) = (data.entries().first(), data.entries().last()) else {
            return String::new();
        };
        let first_day = formatter.format_day(first.start());
        let last_day = formatter.format_day(last.start());
        if first_day == last_day {
            first_day
        } else {
            format!("{first_day} \u{2013} {last_day}")
        }
    }
}

impl Widget for ScheduleView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let screen = self.screen;
        let areas = ScheduleAreas::new(area, screen);
        let signals = screen.signals();
        let list = areas.list;

        buf.set_style(area, Style::default().bg(colors.bg()).fg(colors.fg()));
        self.render_list(list, buf);

        let dates = self.splash_dates();
        let splash = Splash::new(screen.data().event(), &dates, self.theme);
        let header_rows = screen.options().header_rows() as u16;
        render_offset(
            splash,
            list,
            screen.points_to_rows(signals.splash_offset),
            list.width,
            header_rows,
            buf,
        );

        self.render_sticky_heading(list, areas.navbar, buf);

        let navbar_rows = screen.options().navbar_rows() as u16;
        let navbar = Navbar::new("Schedule", &screen.data().event().name, "About [i]", self.theme);
        render_offset(
            navbar,
            list,
            screen.points_to_rows(signals.navbar_offset),
            list.width,
            navbar_rows,
            buf,
        );

        if let Some(button_area) = areas.now_button {
            let above = screen
                .state()
                .active_talk_layout
                .is_some_and(|layout| layout.position < screen.state().scroll_offset);
            let column = Rect::new(button_area.x, list.y, NOW_BUTTON_WIDTH, list.height);
            render_offset(
                NowButton::new(above, self.theme),
                column,
                now_button_top(list, screen.now_button_progress()),
                NOW_BUTTON_WIDTH,
                NOW_BUTTON_HEIGHT,
                buf,
            );
        }

        if let Some(bar_area) = areas.status_bar {
            let formatter = screen.formatter();
            let clock = format!(
                "{}  {}",
                formatter.format(screen.state().current_time),
                formatter.time_zone().name()
            );
            StatusBarLine::new(self.chrome, &clock, &screen.data().event().name, self.theme)
                .render(bar_area, buf);
        }
    }
}
