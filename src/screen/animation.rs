use chrono::{DateTime, TimeDelta, Utc};

/// Smooth ease-in-out cubic curve
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

fn progress(started_at: DateTime<Utc>, now: DateTime<Utc>, duration: TimeDelta) -> f32 {
    let total = duration.num_milliseconds().max(1) as f32;
    let elapsed = (now - started_at).num_milliseconds().max(0) as f32;
    (elapsed / total).min(1.0)
}

/// Eased 0..1 value that follows a boolean target, used for show/hide
/// affordances so they slide instead of popping.
#[derive(Clone, Copy, Debug)]
pub struct Transition {
    from: f32,
    target: f32,
    started_at: Option<DateTime<Utc>>,
    duration: TimeDelta,
    value: f32,
}

impl Transition {
    pub fn new(duration: TimeDelta) -> Self {
        Self {
            from: 0.0,
            target: 0.0,
            started_at: None,
            duration,
            value: 0.0,
        }
    }

    pub fn set_target(&mut self, visible: bool, now: DateTime<Utc>) {
        let target = if visible { 1.0 } else { 0.0 };
        if (target - self.target).abs() < f32::EPSILON {
            return;
        }
        self.from = self.value;
        self.target = target;
        self.started_at = Some(now);
    }

    pub fn advance(&mut self, now: DateTime<Utc>) {
        let Some(started_at) = self.started_at else {
            return;
        };
        let t = progress(started_at, now, self.duration);
        self.value = self.from + (self.target - self.from) * ease_in_out(t);
        if t >= 1.0 {
            self.value = self.target;
            self.started_at = None;
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_settled(&self) -> bool {
        self.started_at.is_none()
    }
}

/// Animated scroll from one offset to another.
#[derive(Clone, Copy, Debug)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    started_at: DateTime<Utc>,
    duration: TimeDelta,
}

impl ScrollAnimation {
    pub fn new(from: f32, to: f32, started_at: DateTime<Utc>, duration: TimeDelta) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    /// Offset at `now` and whether the animation has finished.
    pub fn sample(&self, now: DateTime<Utc>) -> (f32, bool) {
        let t = progress(self.started_at, now, self.duration);
        if t >= 1.0 {
            return (self.to, true);
        }
        (self.from + (self.to - self.from) * ease_in_out(t), false)
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
    fn test_ease_in_out_boundaries() {
        assert!(ease_in_out(0.0).abs() < 1e-6);
        assert!((ease_in_out(1.0) - 1.0).abs() < 1e-6);
        assert!((ease_in_out(0.5) - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_ease_in_out_monotonic() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let val = ease_in_out(i as f32 / 100.0);
            assert!(val >= prev, "not monotonic at step {i}");
            prev = val;
        }
    }

    #[test]
    fn test_transition_reaches_target_after_duration() {
        let mut tr = Transition::new(TimeDelta::milliseconds(200));
        tr.set_target(true, t0());
        tr.advance(t0() + TimeDelta::milliseconds(100));
        assert!(tr.value() > 0.0 && tr.value() < 1.0);
        assert!(!tr.is_settled());
        tr.advance(t0() + TimeDelta::milliseconds(250));
        assert_eq!(tr.value(), 1.0);
        assert!(tr.is_settled());
    }

    #[test]
    fn test_transition_reverses_from_current_value() {
        let mut tr = Transition::new(TimeDelta::milliseconds(200));
        tr.set_target(true, t0());
        tr.advance(t0() + TimeDelta::milliseconds(100));
        let midway = tr.value();
        tr.set_target(false, t0() + TimeDelta::milliseconds(100));
        tr.advance(t0() + TimeDelta::milliseconds(101));
        assert!(tr.value() <= midway);
        tr.advance(t0() + TimeDelta::milliseconds(400));
        assert_eq!(tr.value(), 0.0);
    }

    #[test]
    fn test_scroll_animation_samples() {
        let anim = ScrollAnimation::new(0.0, 40.0, t0(), TimeDelta::milliseconds(300));
        assert_eq!(anim.sample(t0()), (0.0, false));
        let (mid, done) = anim.sample(t0() + TimeDelta::milliseconds(150));
        assert!(!done);
        assert!((mid - 20.0).abs() < 0.5);
        assert_eq!(anim.sample(t0() + TimeDelta::seconds(1)), (40.0, true));
    }
}
