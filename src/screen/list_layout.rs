use crate::schedule::grouping::DayGroup;
use crate::schedule::talk::Entry;

pub const HEADING_ROWS: u32 = 2;
pub const TALK_ROWS: u32 = 3;
pub const BREAK_ROWS: u32 = 2;
pub const FOOTER_ROWS: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowKind {
    /// Blank space the splash overlay sits in.
    Header,
    Heading { group: usize },
    Entry { index: usize },
    Footer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListRow {
    pub kind: RowKind,
    pub y: u32,
    pub height: u32,
}

impl ListRow {
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    fn contains(&self, y: u32) -> bool {
        y >= self.y && y < self.bottom()
    }
}

/// Vertical position and height of a row, in terminal rows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowLayout {
    pub position: f32,
    pub height: f32,
}

/// Geometry of the whole scrollable list. Built once per data set and
/// queried by the screen; rows never report their own position.
#[derive(Clone, Debug, Default)]
pub struct ListLayout {
    rows: Vec<ListRow>,
    entry_rows: Vec<Option<usize>>,
    content_length: u32,
}

impl ListLayout {
    pub fn build(groups: &[DayGroup], entries: &[Entry], header_rows: u32) -> Self {
        let mut rows = Vec::with_capacity(entries.len() + groups.len() + 2);
        let mut entry_rows = vec![None; entries.len()];
        let mut y = 0;

        let mut push = |rows: &mut Vec<ListRow>, kind: RowKind, height: u32| {
            rows.push(ListRow { kind, y, height });
            y += height;
        };

        push(&mut rows, RowKind::Header, header_rows);
        for (group_index, group) in groups.iter().enumerate() {
            push(&mut rows, RowKind::Heading { group: group_index }, HEADING_ROWS);
            for &index in &group.entries {
                let height = match entries.get(index) {
                    Some(Entry::Break(_)) => BREAK_ROWS,
                    _ => TALK_ROWS,
                };
                if let Some(slot) = entry_rows.get_mut(index) {
                    *slot = Some(rows.len());
                }
                push(&mut rows, RowKind::Entry { index }, height);
            }
        }
        push(&mut rows, RowKind::Footer, FOOTER_ROWS);

        let content_length = rows.last().map(ListRow::bottom).unwrap_or(0);
        Self {
            rows,
            entry_rows,
            content_length,
        }
    }

    pub fn rows(&self) -> &[ListRow] {
        &self.rows
    }

    pub fn content_length(&self) -> u32 {
        self.content_length
    }

    /// Largest scroll offset that still fills the viewport.
    pub fn max_scroll(&self, viewport_height: u32) -> f32 {
        self.content_length.saturating_sub(viewport_height) as f32
    }

    pub fn measure(&self, entry_index: usize) -> Option<RowLayout> {
        let row = self.rows[(*self.entry_rows.get(entry_index)?)?];
        Some(RowLayout {
            position: row.y as f32,
            height: row.height as f32,
        })
    }

    pub fn row_at(&self, y: u32) -> Option<&ListRow> {
        let idx = self.rows.partition_point(|row| row.bottom() <= y);
        self.rows.get(idx).filter(|row| row.contains(y))
    }

    /// Group whose heading has scrolled past `y`, for the sticky heading.
    pub fn heading_above(&self, y: u32) -> Option<usize> {
        self.rows
            .iter()
            .take_while(|row| row.y <= y)
            .filter_map(|row| match row.kind {
                RowKind::Heading { group } => Some(group),
                _ => None,
            })
            .last()
    }
}
