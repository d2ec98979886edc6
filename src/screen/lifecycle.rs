use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Constructed,
    Mounted,
    Foregrounded,
    Backgrounded,
    Unmounted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppState {
    Active,
    Background,
}

/// Recurring deadline polled from the event loop.
#[derive(Clone, Copy, Debug)]
pub struct Interval {
    period: TimeDelta,
    next_due: DateTime<Utc>,
}

impl Interval {
    pub fn start(period: TimeDelta, now: DateTime<Utc>) -> Self {
        Self {
            period,
            next_due: now + period,
        }
    }

    /// Fires at most once per call; missed periods collapse into one.
    pub fn poll(&mut self, now: DateTime<Utc>) -> bool {
        if now < self.next_due {
            return false;
        }
        if self.period <= TimeDelta::zero() {
            self.next_due = now;
            return true;
        }
        while self.next_due <= now {
            self.next_due += self.period;
        }
        true
    }
}

/// Host-side count of live listeners. Screens register into it on mount and
/// deregister on release, so the host can tell when nothing is left behind.
/// Clones share the same count.
#[derive(Clone, Debug, Default)]
pub struct ListenerTable {
    live: Rc<Cell<usize>>,
}

impl ListenerTable {
    pub fn live(&self) -> usize {
        self.live.get()
    }

    fn register(&self, count: usize) {
        self.live.set(self.live.get() + count);
    }

    fn deregister(&self, count: usize) {
        self.live.set(self.live.get().saturating_sub(count));
    }
}

/// Everything the screen acquires at mount. Each slot is released at most
/// once; releasing an empty slot does nothing.
#[derive(Debug, Default)]
pub struct Subscriptions {
    interval: Option<Interval>,
    app_state: bool,
    scroll_listener: bool,
    table: ListenerTable,
}

impl Subscriptions {
    pub fn new(table: ListenerTable) -> Self {
        Self {
            table,
            ..Self::default()
        }
    }

    pub fn acquire(&mut self, period: TimeDelta, now: DateTime<Utc>, scroll_listener: bool) {
        self.release();
        self.interval = Some(Interval::start(period, now));
        self.app_state = true;
        self.scroll_listener = scroll_listener;
        self.table.register(self.active_count());
        debug!(scroll_listener, live = self.table.live(), "schedule subscriptions acquired");
    }

    pub fn release(&mut self) {
        self.table.deregister(self.active_count());
        if self.interval.take().is_some() {
            debug!("refresh interval cancelled");
        }
        if std::mem::take(&mut self.app_state) {
            debug!("app state listener removed");
        }
        if std::mem::take(&mut self.scroll_listener) {
            debug!("scroll listener removed");
        }
    }

    pub fn interval_mut(&mut self) -> Option<&mut Interval> {
        self.interval.as_mut()
    }

    pub fn listens_to_app_state(&self) -> bool {
        self.app_state
    }

    pub fn listens_to_scroll(&self) -> bool {
        self.scroll_listener
    }

    pub fn active_count(&self) -> usize {
        usize::from(self.interval.is_some())
            + usize::from(self.app_state)
            + usize::from(self.scroll_listener)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 18, 7, 0, 0).unwrap()
    }

    #[test]
    fn test_interval_fires_once_per_period() {
        let mut interval = Interval::start(TimeDelta::seconds(60), t0());
        assert!(!interval.poll(t0() + TimeDelta::seconds(59)));
        assert!(interval.poll(t0() + TimeDelta::seconds(60)));
        assert!(!interval.poll(t0() + TimeDelta::seconds(61)));
        assert!(interval.poll(t0() + TimeDelta::seconds(120)));
    }

    #[test]
    fn test_interval_collapses_missed_periods() {
        let mut interval = Interval::start(TimeDelta::seconds(60), t0());
        assert!(interval.poll(t0() + TimeDelta::seconds(610)));
        assert!(!interval.poll(t0() + TimeDelta::seconds(611)));
        assert!(!interval.poll(t0() + TimeDelta::seconds(659)));
        assert!(interval.poll(t0() + TimeDelta::seconds(660)));
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut subs = Subscriptions::default();
        subs.acquire(TimeDelta::seconds(60), t0(), true);
        assert_eq!(subs.active_count(), 3);
        subs.release();
        assert_eq!(subs.active_count(), 0);
        subs.release();
        assert_eq!(subs.active_count(), 0);
    }

    #[test]
    fn test_table_tracks_acquire_and_release() {
        let table = ListenerTable::default();
        let mut subs = Subscriptions::new(table.clone());
        subs.acquire(TimeDelta::seconds(60), t0(), false);
        assert_eq!(table.live(), 2);
        subs.release();
        subs.release();
        assert_eq!(table.live(), 0);
    }

    #[test]
    fn test_release_without_acquire_is_noop() {
        let mut subs = Subscriptions::default();
        subs.release();
        assert!(!subs.listens_to_app_state());
        assert!(subs.interval_mut().is_none());
    }
}
