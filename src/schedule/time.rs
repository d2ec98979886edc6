use chrono::{DateTime, Utc};
use chrono_tz::Tz;

pub const TIME_FORMAT: &str = "%H:%M";
const WEEKDAY_FORMAT: &str = "%A";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TalkStatus {
    Future,
    Present,
    Past,
}

/// Present iff `start <= now < end`.
pub fn status(now: DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc>) -> TalkStatus {
    if now < start {
        TalkStatus::Future
    } else if now < end {
        TalkStatus::Present
    } else {
        TalkStatus::Past
    }
}

/// Renders instants in a fixed zone, independent of the machine's locale and
/// local offset.
#[derive(Clone, Copy, Debug)]
pub struct TimeFormatter {
    time_zone: Tz,
}

impl TimeFormatter {
    pub fn new(time_zone: Tz) -> Self {
        Self { time_zone }
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    pub fn format(&self, instant: DateTime<Utc>) -> String {
        instant.with_timezone(&self.time_zone).format(TIME_FORMAT).to_string()
    }

    pub fn weekday(&self, instant: DateTime<Utc>) -> String {
        instant
            .with_timezone(&self.time_zone)
            .format(WEEKDAY_FORMAT)
            .to_string()
    }

    pub fn format_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> String {
        format!("{} \u{2013} {}", self.format(start), self.format(end))
    }

    pub fn format_day(&self, instant: DateTime<Utc>) -> String {
        instant
            .with_timezone(&self.time_zone)
            .format("%A, %-d %B")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};
    use rstest::rstest;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 18, h, m, 0).unwrap()
    }

    #[rstest]
    #[case(at(6, 59), TalkStatus::Future)]
    #[case(at(7, 0), TalkStatus::Present)]
    #[case(at(7, 15), TalkStatus::Present)]
    #[case(at(7, 30), TalkStatus::Past)]
    #[case(at(9, 0), TalkStatus::Past)]
    fn test_status_boundaries(#[case] now: DateTime<Utc>, #[case] expected: TalkStatus) {
        assert_eq!(status(now, at(7, 0), at(7, 30)), expected);
    }

    #[test]
    fn test_status_just_before_end_is_present() {
        let end = at(7, 30);
        assert_eq!(
            status(end - TimeDelta::milliseconds(1), at(7, 0), end),
            TalkStatus::Present
        );
    }

    #[test]
    fn test_format_uses_configured_zone() {
        // 07:00 UTC in May is 09:00 in Berlin (CEST).
        let berlin = TimeFormatter::new(chrono_tz::Europe::Berlin);
        assert_eq!(berlin.format(at(7, 0)), "09:00");

        let tokyo = TimeFormatter::new(chrono_tz::Asia::Tokyo);
        assert_eq!(tokyo.format(at(7, 0)), "16:00");
    }

    #[test]
    fn test_format_is_zero_padded() {
        let utc = TimeFormatter::new(chrono_tz::UTC);
        assert_eq!(utc.format(at(5, 5)), "05:05");
    }

    #[test]
    fn test_weekday_follows_zone_not_utc() {
        // 23:30 UTC on Monday is already Tuesday in Berlin.
        let late = Utc.with_ymd_and_hms(2026, 5, 18, 23, 30, 0).unwrap();
        assert_eq!(TimeFormatter::new(chrono_tz::UTC).weekday(late), "Monday");
        assert_eq!(
            TimeFormatter::new(chrono_tz::Europe::Berlin).weekday(late),
            "Tuesday"
        );
    }
}
