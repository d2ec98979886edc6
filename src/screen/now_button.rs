use crate::screen::list_layout::RowLayout;

/// True when the in-progress talk's row is not fully inside the viewport.
/// Without an in-progress talk there is nothing to jump to.
pub fn is_visible(active: Option<RowLayout>, scroll: f32, viewport_height: f32) -> bool {
    let Some(layout) = active else {
        return false;
    };
    let top = layout.position;
    let bottom = layout.position + layout.height;
    top < scroll || bottom > scroll + viewport_height
}

/// Scroll offset that brings the in-progress talk into view, never past the
/// end of the content.
pub fn scroll_target(layout: RowLayout, content_length: f32, viewport_height: f32) -> f32 {
    let max_scroll = content_length - viewport_height;
    layout.position.min(max_scroll).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(position: f32) -> RowLayout {
        RowLayout {
            position,
            height: 3.0,
        }
    }

    #[test]
    fn test_hidden_without_active_talk() {
        assert!(!is_visible(None, 0.0, 20.0));
    }

    #[test]
    fn test_hidden_when_row_fully_in_view() {
        assert!(!is_visible(Some(row(5.0)), 0.0, 20.0));
        assert!(!is_visible(Some(row(17.0)), 0.0, 20.0));
    }

    #[test]
    fn test_shown_when_row_partially_or_fully_out_of_view() {
        assert!(is_visible(Some(row(18.0)), 0.0, 20.0));
        assert!(is_visible(Some(row(40.0)), 0.0, 20.0));
        assert!(is_visible(Some(row(4.0)), 5.0, 20.0));
    }

    #[test]
    fn test_scroll_target_clamps_to_content_end() {
        assert_eq!(scroll_target(row(30.0), 100.0, 20.0), 30.0);
        assert_eq!(scroll_target(row(95.0), 100.0, 20.0), 80.0);
    }

    #[test]
    fn test_scroll_target_never_negative() {
        assert_eq!(scroll_target(row(-2.0), 100.0, 20.0), 0.0);
        assert_eq!(scroll_target(row(10.0), 10.0, 20.0), 0.0);
    }
}
