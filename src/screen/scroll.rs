//! Chrome derived from the list's scroll offset.
//!
//! Everything here works in points, the unit the thresholds were designed in.
//! The terminal renderer converts rows to points with `points_per_row`.

pub const NAVBAR_SHOW_START: f32 = 80.0;
pub const NAVBAR_SHOW_END: f32 = 120.0;
pub const NAVBAR_HEIGHT: f32 = 64.0;

const SPLASH_INPUT: (f32, f32) = (-200.0, 400.0);
const SPLASH_OUTPUT: (f32, f32) = (200.0, -400.0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarStyle {
    /// Dark text, used once the navbar has slid in.
    Default,
    /// Light text over the splash artwork.
    LightContent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusBarState {
    Hidden,
    Shown(BarStyle),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSignals {
    pub navbar_offset: f32,
    pub splash_offset: f32,
    pub status_bar: StatusBarState,
}

/// Linear map of `value` from `input` onto `output`, clamped at both ends.
pub fn interpolate(value: f32, input: (f32, f32), output: (f32, f32)) -> f32 {
    let (in_lo, in_hi) = input;
    let (out_lo, out_hi) = output;
    if value <= in_lo {
        return out_lo;
    }
    if value >= in_hi {
        return out_hi;
    }
    let t = (value - in_lo) / (in_hi - in_lo);
    out_lo + t * (out_hi - out_lo)
}

pub fn navbar_offset(scroll: f32) -> f32 {
    interpolate(
        scroll,
        (NAVBAR_SHOW_START, NAVBAR_SHOW_END),
        (-NAVBAR_HEIGHT, 0.0),
    )
}

pub fn splash_offset(scroll: f32) -> f32 {
    interpolate(scroll, SPLASH_INPUT, SPLASH_OUTPUT)
}

/// The band between the two thresholds keeps the bar hidden so it does not
/// flip styles while the navbar is mid-slide.
pub fn status_bar_for(scroll: f32) -> StatusBarState {
    if scroll > NAVBAR_SHOW_END {
        StatusBarState::Shown(BarStyle::Default)
    } else if scroll < NAVBAR_SHOW_START {
        StatusBarState::Shown(BarStyle::LightContent)
    } else {
        StatusBarState::Hidden
    }
}

pub fn derive(scroll: f32) -> ScrollSignals {
    ScrollSignals {
        navbar_offset: navbar_offset(scroll),
        splash_offset: splash_offset(scroll),
        status_bar: status_bar_for(scroll),
    }
}

/// The status bar overlay the screen styles. Other screens reset it too.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusBar {
    pub style: BarStyle,
    pub hidden: bool,
}

impl Default for StatusBar {
    fn default() -> Self {
        Self {
            style: BarStyle::LightContent,
            hidden: false,
        }
    }
}

impl StatusBar {
    pub fn set_style(&mut self, style: BarStyle) {
        self.style = style;
    }

    pub fn apply(&mut self, state: StatusBarState) {
        match state {
            StatusBarState::Hidden => self.hidden = true,
            StatusBarState::Shown(style) => {
                self.style = style;
                self.hidden = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(80.0, -64.0)]
    #[case(120.0, 0.0)]
    #[case(60.0, -64.0)]
    #[case(200.0, 0.0)]
    #[case(100.0, -32.0)]
    fn test_navbar_offset(#[case] scroll: f32, #[case] expected: f32) {
        assert!((navbar_offset(scroll) - expected).abs() < f32::EPSILON);
    }

    #[test]
    fn test_splash_offset_endpoints() {
        assert_eq!(splash_offset(-200.0), 200.0);
        assert_eq!(splash_offset(400.0), -400.0);
        assert_eq!(splash_offset(-1000.0), 200.0);
        assert_eq!(splash_offset(1000.0), -400.0);
    }

    #[test]
    fn test_splash_offset_midrange_is_strictly_inside() {
        let mid = splash_offset(0.0);
        assert!(mid > -400.0 && mid < 200.0, "got {mid}");
    }

    #[rstest]
    #[case(0.0, StatusBarState::Shown(BarStyle::LightContent))]
    #[case(79.9, StatusBarState::Shown(BarStyle::LightContent))]
    #[case(80.0, StatusBarState::Hidden)]
    #[case(100.0, StatusBarState::Hidden)]
    #[case(120.0, StatusBarState::Hidden)]
    #[case(120.1, StatusBarState::Shown(BarStyle::Default))]
    fn test_status_bar_band(#[case] scroll: f32, #[case] expected: StatusBarState) {
        assert_eq!(status_bar_for(scroll), expected);
    }

    #[test]
    fn test_apply_hidden_keeps_previous_style() {
        let mut bar = StatusBar::default();
        bar.apply(StatusBarState::Shown(BarStyle::Default));
        bar.apply(StatusBarState::Hidden);
        assert!(bar.hidden);
        assert_eq!(bar.style, BarStyle::Default);
    }
}
