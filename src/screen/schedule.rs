use std::rc::Rc;

use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::navigation::{Navigator, Route};
use crate::schedule::grouping::{self, DayGroup};
use crate::schedule::talk::{Entry, ScheduleData};
use crate::schedule::time::{self, TalkStatus, TimeFormatter};
use crate::screen::animation::{ScrollAnimation, Transition};
use crate::screen::lifecycle::{AppState, Lifecycle, ListenerTable, Subscriptions};
use crate::screen::list_layout::{ListLayout, RowKind, RowLayout};
use crate::screen::now_button;
use crate::screen::scroll::{self, BarStyle, NAVBAR_HEIGHT, NAVBAR_SHOW_END, ScrollSignals, StatusBar};

/// Height of the blank list header the splash overlay occupies, in points.
pub const LIST_HEADER_POINTS: f32 = 190.0;

const SCROLL_ANIMATION_MS: i64 = 300;
const NOW_BUTTON_FADE_MS: i64 = 250;

#[derive(Clone, Copy, Debug)]
pub struct ScreenOptions {
    pub refresh_interval: TimeDelta,
    /// Whether the host exposes a status bar overlay worth restyling.
    pub status_bar_overlay: bool,
    pub points_per_row: f32,
}

impl Default for ScreenOptions {
    fn default() -> Self {
        Self {
            refresh_interval: TimeDelta::seconds(60),
            status_bar_overlay: true,
            points_per_row: 16.0,
        }
    }
}

impl ScreenOptions {
    pub fn header_rows(&self) -> u32 {
        (LIST_HEADER_POINTS / self.points_per_row).ceil() as u32
    }

    pub fn navbar_rows(&self) -> f32 {
        (NAVBAR_HEIGHT / self.points_per_row).round()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenState {
    pub current_time: DateTime<Utc>,
    /// In rows.
    pub scroll_offset: f32,
    pub active_talk_layout: Option<RowLayout>,
    pub show_now_button: bool,
}

/// The schedule list: owns "now", scroll position and the mount-scoped
/// subscriptions. Chrome (status bar) and navigation are passed in by the
/// caller on the operations that touch them.
pub struct ScheduleScreen {
    data: Rc<ScheduleData>,
    clock: Box<dyn Clock>,
    formatter: TimeFormatter,
    groups: Vec<DayGroup>,
    layout: ListLayout,
    options: ScreenOptions,
    state: ScreenState,
    lifecycle: Lifecycle,
    subscriptions: Subscriptions,
    viewport_height: u32,
    scroll_animation: Option<ScrollAnimation>,
    now_button: Transition,
    selected: Option<usize>,
    active_talk: Option<usize>,
}

impl ScheduleScreen {
    pub fn new(data: Rc<ScheduleData>, clock: Box<dyn Clock>, options: ScreenOptions) -> Self {
        let formatter = TimeFormatter::new(data.time_zone());
        let groups = grouping::group(data.entries(), &formatter);
        let layout = ListLayout::build(&groups, data.entries(), options.header_rows());
        let now = clock.now();
        debug!(
            entries = data.len(),
            groups = groups.len(),
            rows = layout.content_length(),
            "schedule laid out"
        );

        let mut screen = Self {
            data,
            clock,
            formatter,
            groups,
            layout,
            options,
            state: ScreenState {
                current_time: now,
                scroll_offset: 0.0,
                active_talk_layout: None,
                show_now_button: false,
            },
            lifecycle: Lifecycle::Constructed,
            subscriptions: Subscriptions::default(),
            viewport_height: 0,
            scroll_animation: None,
            now_button: Transition::new(TimeDelta::milliseconds(NOW_BUTTON_FADE_MS)),
            selected: None,
            active_talk: None,
        };
        screen.refresh_active_talk();
        screen.selected = screen.active_talk.or_else(|| screen.first_talk());
        screen
    }

    /// Register this screen's listeners in a host-owned table. Only takes
    /// effect before `mount`.
    pub fn with_listeners(mut self, table: ListenerTable) -> Self {
        if self.lifecycle == Lifecycle::Constructed {
            self.subscriptions = Subscriptions::new(table);
        }
        self
    }

    pub fn mount(&mut self) {
        if self.lifecycle != Lifecycle::Constructed {
            warn!(lifecycle = ?self.lifecycle, "schedule screen mounted twice");
            return;
        }
        let now = self.clock.now();
        self.subscriptions.acquire(
            self.options.refresh_interval,
            now,
            self.options.status_bar_overlay,
        );
        self.lifecycle = Lifecycle::Mounted;
        info!(
            subscriptions = self.subscriptions.active_count(),
            "schedule screen mounted"
        );
    }

    /// Release everything acquired at mount. Safe to call repeatedly.
    pub fn unmount(&mut self) {
        self.subscriptions.release();
        self.scroll_animation = None;
        if self.lifecycle != Lifecycle::Unmounted {
            self.lifecycle = Lifecycle::Unmounted;
            info!("schedule screen unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        matches!(
            self.lifecycle,
            Lifecycle::Mounted | Lifecycle::Foregrounded | Lifecycle::Backgrounded
        )
    }

    pub fn handle_app_state(&mut self, app_state: AppState) {
        if !self.subscriptions.listens_to_app_state() {
            return;
        }
        match app_state {
            AppState::Active => {
                self.lifecycle = Lifecycle::Foregrounded;
                self.refresh_now();
            }
            AppState::Background => self.lifecycle = Lifecycle::Backgrounded,
        }
        debug!(?app_state, "app state changed");
    }

    /// Called when the schedule becomes the visible route again.
    pub fn focus_regained(&mut self, chrome: &mut StatusBar) {
        if !self.is_mounted() {
            return;
        }
        if self.scroll_points() < NAVBAR_SHOW_END {
            chrome.set_style(BarStyle::LightContent);
        }
        self.refresh_now();
    }

    /// Advance timers and animations. Driven by the event loop's tick.
    pub fn tick(&mut self, chrome: &mut StatusBar) {
        if !self.is_mounted() {
            return;
        }
        let now = self.clock.now();

        let due = self
            .subscriptions
            .interval_mut()
            .is_some_and(|interval| interval.poll(now));
        if due {
            self.refresh_now();
        }

        if let Some(animation) = self.scroll_animation {
            let (offset, done) = animation.sample(now);
            self.apply_scroll(offset, chrome);
            if done {
                self.scroll_animation = None;
            }
        }

        self.now_button.advance(now);
    }

    pub fn refresh_now(&mut self) {
        self.state.current_time = self.clock.now();
        self.refresh_active_talk();
    }

    pub fn set_viewport(&mut self, height: u32, chrome: &mut StatusBar) {
        if height == self.viewport_height {
            return;
        }
        self.viewport_height = height;
        self.apply_scroll(self.state.scroll_offset, chrome);
    }

    pub fn scroll_by(&mut self, delta: f32, chrome: &mut StatusBar) {
        self.scroll_to(self.state.scroll_offset + delta, chrome);
    }

    pub fn scroll_to(&mut self, offset: f32, chrome: &mut StatusBar) {
        self.scroll_animation = None;
        self.apply_scroll(offset, chrome);
    }

    pub fn page_down(&mut self, chrome: &mut StatusBar) {
        let page = self.viewport_height.saturating_sub(2).max(1) as f32;
        self.scroll_by(page, chrome);
    }

    pub fn page_up(&mut self, chrome: &mut StatusBar) {
        let page = self.viewport_height.saturating_sub(2).max(1) as f32;
        self.scroll_by(-page, chrome);
    }

    /// Jump to the in-progress talk. Nothing to do when no talk is running.
    pub fn press_now_button(&mut self) {
        let Some(row) = self.state.active_talk_layout else {
            return;
        };
        // Land the row just under the sticky navbar.
        let layout = RowLayout {
            position: (row.position - self.options.navbar_rows() / 2.0).max(0.0),
            height: row.height,
        };
        let target = now_button::scroll_target(
            layout,
            self.layout.content_length() as f32,
            self.viewport_height as f32,
        );
        debug!(from = self.state.scroll_offset, to = target, "scrolling to current talk");
        self.scroll_animation = Some(ScrollAnimation::new(
            self.state.scroll_offset,
            target,
            self.clock.now(),
            TimeDelta::milliseconds(SCROLL_ANIMATION_MS),
        ));
        self.selected = self.active_talk.or(self.selected);
    }

    pub fn select_next(&mut self, chrome: &mut StatusBar) {
        let next = match self.selected {
            Some(index) => self.data.next_talk(index),
            None => self.first_talk(),
        };
        if let Some(index) = next {
            self.selected = Some(index);
            self.ensure_visible(index, chrome);
        }
    }

    pub fn select_previous(&mut self, chrome: &mut StatusBar) {
        let previous = match self.selected {
            Some(index) => self.data.previous_talk(index),
            None => self.first_talk(),
        };
        if let Some(index) = previous {
            self.selected = Some(index);
            self.ensure_visible(index, chrome);
        }
    }

    /// Activate the row for entry `index`. Breaks are not interactive.
    pub fn press(&mut self, index: usize, chrome: &mut StatusBar, nav: &mut dyn Navigator) -> bool {
        match self.data.entry(index) {
            Some(Entry::Talk(_)) => {
                self.selected = Some(index);
                self.scroll_animation = None;
                chrome.set_style(BarStyle::Default);
                nav.navigate(Route::Talk { talk_index: index });
                true
            }
            _ => false,
        }
    }

    pub fn press_selected(&mut self, chrome: &mut StatusBar, nav: &mut dyn Navigator) -> bool {
        match self.selected {
            Some(index) => self.press(index, chrome, nav),
            None => false,
        }
    }

    /// Activate whatever is drawn at `row` rows below the top of the list
    /// viewport: a talk, the footer link or the splash logo.
    pub fn press_at(&mut self, row: u16, chrome: &mut StatusBar, nav: &mut dyn Navigator) -> bool {
        let y = self.state.scroll_offset.floor() as u32 + u32::from(row);
        let Some(hit) = self.layout.row_at(y).copied() else {
            return false;
        };
        match hit.kind {
            RowKind::Entry { index } => self.press(index, chrome, nav),
            RowKind::Footer | RowKind::Header => {
                self.open_event_info(chrome, nav);
                true
            }
            RowKind::Heading { .. } => false,
        }
    }

    pub fn open_event_info(&mut self, chrome: &mut StatusBar, nav: &mut dyn Navigator) {
        self.scroll_animation = None;
        chrome.set_style(BarStyle::Default);
        nav.navigate(Route::Info);
    }

    pub fn status_of(&self, index: usize) -> Option<TalkStatus> {
        let talk = self.data.entry(index)?.as_talk()?;
        Some(time::status(self.state.current_time, talk.start, talk.end))
    }

    pub fn signals(&self) -> ScrollSignals {
        scroll::derive(self.scroll_points())
    }

    pub fn scroll_points(&self) -> f32 {
        self.state.scroll_offset * self.options.points_per_row
    }

    /// Convert a point offset from the scroll signals into whole rows.
    pub fn points_to_rows(&self, points: f32) -> i32 {
        (points / self.options.points_per_row).round() as i32
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn data(&self) -> &Rc<ScheduleData> {
        &self.data
    }

    pub fn groups(&self) -> &[DayGroup] {
        &self.groups
    }

    pub fn layout(&self) -> &ListLayout {
        &self.layout
    }

    pub fn formatter(&self) -> &TimeFormatter {
        &self.formatter
    }

    pub fn options(&self) -> &ScreenOptions {
        &self.options
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn subscriptions(&self) -> &Subscriptions {
        &self.subscriptions
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn active_talk(&self) -> Option<usize> {
        self.active_talk
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    /// Eased 0..1 visibility of the now button.
    pub fn now_button_progress(&self) -> f32 {
        self.now_button.value()
    }

    pub fn is_animating(&self) -> bool {
        self.scroll_animation.is_some() || !self.now_button.is_settled()
    }

    fn first_talk(&self) -> Option<usize> {
        self.data.entries().iter().position(|entry| !entry.is_break())
    }

    fn apply_scroll(&mut self, offset: f32, chrome: &mut StatusBar) {
        let max = self.layout.max_scroll(self.viewport_height);
        self.state.scroll_offset = offset.clamp(0.0, max);
        if self.subscriptions.listens_to_scroll() {
            chrome.apply(scroll::status_bar_for(self.scroll_points()));
        }
        self.update_now_button();
    }

    fn ensure_visible(&mut self, index: usize, chrome: &mut StatusBar) {
        let Some(row) = self.layout.measure(index) else {
            return;
        };
        let top = self.state.scroll_offset;
        let viewport = self.viewport_height as f32;
        // Keep the row clear of the sticky navbar once it is showing.
        let covered = if self.signals().navbar_offset > -NAVBAR_HEIGHT {
            self.options.navbar_rows()
        } else {
            0.0
        };
        if row.position < top + covered {
            self.scroll_to(row.position - covered, chrome);
        } else if row.position + row.height > top + viewport {
            self.scroll_to(row.position + row.height - viewport, chrome);
        }
    }

    /// Recompute which talk is running and where its row sits. Runs on every
    /// time refresh so a finished talk never keeps the layout.
    fn refresh_active_talk(&mut self) {
        let active = self.data.present_talk(self.state.current_time);
        if active != self.active_talk {
            debug!(?active, "in-progress talk changed");
        }
        self.active_talk = active;
        self.state.active_talk_layout = active.and_then(|index| self.layout.measure(index));
        self.update_now_button();
    }

    fn update_now_button(&mut self) {
        let visible = now_button::is_visible(
            self.state.active_talk_layout,
            self.state.scroll_offset,
            self.viewport_height as f32,
        );
        self.state.show_now_button = visible;
        self.now_button.set_target(visible, self.clock.now());
    }
}

impl Drop for ScheduleScreen {
    fn drop(&mut self) {
        self.unmount();
    }
}
