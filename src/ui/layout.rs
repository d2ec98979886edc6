use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

pub fn pack_hint_lines(hints: &[&str], width: usize) -> Vec<String> {
    if width == 0 || hints.is_empty() {
        return Vec::new();
    }

    let prefix = " ";
    let separator = "  ";
    let mut out: Vec<String> = Vec::new();
    let mut current = prefix.to_string();
    let mut has_hint = false;

    for hint in hints {
        if hint.is_empty() {
            continue;
        }
        let candidate = if has_hint {
            format!("{current}{separator}{hint}")
        } else {
            format!("{current}{hint}")
        };
        if candidate.chars().count() <= width {
            current = candidate;
            has_hint = true;
        } else {
            if has_hint {
                out.push(current);
            }
            current = format!("{prefix}{hint}");
            has_hint = true;
        }
    }

    if has_hint {
        out.push(current);
    }
    out
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    const MIN_POPUP_WIDTH: u16 = 48;
    const MIN_POPUP_HEIGHT: u16 = 12;

    let requested_w = area.width.saturating_mul(percent_x.min(100)) / 100;
    let requested_h = area.height.saturating_mul(percent_y.min(100)) / 100;

    let target_w = requested_w.max(MIN_POPUP_WIDTH).min(area.width);
    let target_h = requested_h.max(MIN_POPUP_HEIGHT).min(area.height);

    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area
        .y
        .saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}

/// Visible part of a `height`-row band whose top sits `top` rows below
/// `area.y` (negative: above it), clipped to `area`.
pub fn clip_band(area: Rect, top: i32, height: u16) -> Option<Rect> {
    let band_top = i32::from(area.y) + top;
    let band_bottom = band_top + i32::from(height);
    let visible_top = band_top.max(i32::from(area.y));
    let visible_bottom = band_bottom.min(i32::from(area.bottom()));
    if visible_bottom <= visible_top || area.width == 0 {
        return None;
    }
    Some(Rect::new(
        area.x,
        visible_top as u16,
        area.width,
        (visible_bottom - visible_top) as u16,
    ))
}

/// Render `widget` at full `width`×`height` off-screen, then copy the rows
/// that land inside `area` when the widget's top is `top` rows below
/// `area.y`. Lets overlays slide partly off the edge.
pub fn render_offset<W: Widget>(widget: W, area: Rect, top: i32, width: u16, height: u16, buf: &mut Buffer) {
    let Some(visible) = clip_band(area, top, height) else {
        return;
    };
    let width = width.min(area.width);
    let mut scratch = Buffer::empty(Rect::new(0, 0, width, height));
    widget.render(scratch.area, &mut scratch);

    let band_top = i32::from(area.y) + top;
    for y in visible.y..visible.bottom() {
        let src_y = (i32::from(y) - band_top) as u16;
        for dx in 0..width {
            buf[(area.x + dx, y)] = scratch[(dx, src_y)].clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_hint_lines_wraps() {
        let lines = pack_hint_lines(&["[j/k] Move", "[Enter] Open", "[q] Quit"], 24);
        assert_eq!(lines, vec![" [j/k] Move", " [Enter] Open  [q] Quit"]);
    }

    #[test]
    fn test_clip_band_partially_above() {
        let area = Rect::new(0, 1, 40, 20);
        assert_eq!(clip_band(area, -2, 4), Some(Rect::new(0, 1, 40, 2)));
        assert_eq!(clip_band(area, -4, 4), None);
        assert_eq!(clip_band(area, 18, 4), Some(Rect::new(0, 19, 40, 2)));
    }

    #[test]
    fn test_render_offset_copies_visible_rows() {
        use ratatui::text::Line;
        use ratatui::widgets::Paragraph;

        let area = Rect::new(0, 0, 6, 3);
        let mut buf = Buffer::empty(area);
        let widget = Paragraph::new(vec![Line::from("one"), Line::from("two"), Line::from("three")]);
        render_offset(widget, area, -1, 6, 3, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "t");
        assert_eq!(buf[(1, 0)].symbol(), "w");
        assert_eq!(buf[(2, 1)].symbol(), "r");
        assert_eq!(buf[(0, 2)].symbol(), " ");
    }
}
