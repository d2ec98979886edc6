use chrono::{DateTime, Utc};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::schedule::talk::Entry;
use crate::schedule::time::{self, TalkStatus, TimeFormatter};
use crate::ui::theme::Theme;

/// What a schedule row shows, computed from an entry at a given instant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowModel {
    Break {
        start: String,
        title: String,
    },
    Talk {
        status: TalkStatus,
        start: String,
        title: String,
        speakers: String,
        keynote: bool,
        lightning: bool,
    },
}

impl RowModel {
    pub fn from_entry(entry: &Entry, now: DateTime<Utc>, formatter: &TimeFormatter) -> Self {
        match entry {
            Entry::Break(brk) => RowModel::Break {
                start: formatter.format(brk.start),
                title: brk.title.clone(),
            },
            Entry::Talk(talk) => RowModel::Talk {
                status: time::status(now, talk.start, talk.end),
                start: formatter.format(talk.start),
                title: talk.title.clone(),
                speakers: talk.speakers.join(", "),
                keynote: talk.keynote,
                lightning: talk.lightning,
            },
        }
    }

    /// Lines for this row; the count matches the row height in the list
    /// layout.
    pub fn lines(&self, selected: bool, theme: &Theme) -> Vec<Line<'static>> {
        let colors = &theme.colors;
        let row_bg = if selected {
            Style::default().bg(colors.selected_bg())
        } else {
            Style::default()
        };

        match self {
            RowModel::Break { start, title } => vec![
                Line::from(vec![
                    Span::styled("   ", row_bg),
                    Span::styled(format!("{start}  "), row_bg.fg(colors.muted())),
                    Span::styled(
                        title.clone(),
                        row_bg.fg(colors.break_fg()).add_modifier(Modifier::ITALIC),
                    ),
                ]),
                Line::from(""),
            ],
            RowModel::Talk {
                status,
                start,
                title,
                speakers,
                keynote,
                lightning,
            } => {
                let (marker, status_color) = match status {
                    TalkStatus::Present => ("\u{25cf}", colors.present()),
                    TalkStatus::Future => ("\u{25cb}", colors.future()),
                    TalkStatus::Past => ("\u{00b7}", colors.past()),
                };
                let title_style = match status {
                    TalkStatus::Past => row_bg.fg(colors.past()),
                    _ => row_bg.fg(colors.fg()).add_modifier(Modifier::BOLD),
                };

                let mut first = vec![
                    Span::styled(if selected { ">" } else { " " }, row_bg.fg(colors.accent())),
                    Span::styled(format!("{marker} "), row_bg.fg(status_color)),
                    Span::styled(format!("{start}  "), row_bg.fg(status_color)),
                    Span::styled(title.clone(), title_style),
                ];
                if *keynote {
                    first.push(Span::styled(
                        "  KEYNOTE",
                        row_bg.fg(colors.keynote()).add_modifier(Modifier::BOLD),
                    ));
                }
                if *lightning {
                    first.push(Span::styled("  \u{26a1}", row_bg.fg(colors.lightning())));
                }

                let mut second = vec![Span::styled("          ", row_bg)];
                if !speakers.is_empty() {
                    second.push(Span::styled(speakers.clone(), row_bg.fg(colors.muted())));
                }
                if *status == TalkStatus::Present {
                    second.push(Span::styled("  now", row_bg.fg(colors.present())));
                }

                vec![Line::from(first), Line::from(second), Line::from("")]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::talk::{Break, Talk};
    use crate::screen::list_layout::{BREAK_ROWS, TALK_ROWS};
    use chrono::TimeZone;

    fn formatter() -> TimeFormatter {
        TimeFormatter::new(chrono_tz::Europe::Berlin)
    }

    fn talk() -> Entry {
        Entry::Talk(Talk {
            id: "t".to_string(),
            title: "Inside an Async Runtime".to_string(),
            start: Utc.with_ymd_and_hms(2026, 5, 18, 7, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2026, 5, 18, 7, 30, 0).unwrap(),
            speakers: vec!["Jonas".to_string(), "Ana".to_string()],
            keynote: true,
            lightning: false,
            description: None,
        })
    }

    #[test]
    fn test_talk_row_model() {
        let now = Utc.with_ymd_and_hms(2026, 5, 18, 7, 15, 0).unwrap();
        let model = RowModel::from_entry(&talk(), now, &formatter());
        assert_eq!(
            model,
            RowModel::Talk {
                status: TalkStatus::Present,
                start: "09:00".to_string(),
                title: "Inside an Async Runtime".to_string(),
                speakers: "Jonas, Ana".to_string(),
                keynote: true,
                lightning: false,
            }
        );
    }

    #[test]
    fn test_break_row_model() {
        let brk = Entry::Break(Break {
            id: "b".to_string(),
            title: "Lunch".to_string(),
            start: Utc.with_ymd_and_hms(2026, 5, 18, 10, 15, 0).unwrap(),
        });
        let model = RowModel::from_entry(&brk, Utc::now(), &formatter());
        assert_eq!(
            model,
            RowModel::Break {
                start: "12:15".to_string(),
                title: "Lunch".to_string(),
            }
        );
    }

    #[test]
    fn test_line_counts_match_layout_heights() {
        let theme = Theme::default();
        let now = Utc.with_ymd_and_hms(2026, 5, 18, 6, 0, 0).unwrap();
        let talk_lines = RowModel::from_entry(&talk(), now, &formatter()).lines(false, &theme);
        assert_eq!(talk_lines.len() as u32, TALK_ROWS);
        let brk = RowModel::Break {
            start: "12:00".to_string(),
            title: "Lunch".to_string(),
        };
        assert_eq!(brk.lines(true, &theme).len() as u32, BREAK_ROWS);
    }
}
