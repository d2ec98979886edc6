use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::schedule::time::{self, TalkStatus};

#[derive(Embed)]
#[folder = "assets/data/"]
struct ScheduleAssets;

const BUNDLED_SCHEDULE: &str = "schedule.toml";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Talk {
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub speakers: Vec<String>,
    #[serde(default)]
    pub keynote: bool,
    #[serde(default)]
    pub lightning: bool,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Break {
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
}

/// One row of the schedule, either a talk or a break.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Entry {
    Talk(Talk),
    Break(Break),
}

impl Entry {
    pub fn id(&self) -> &str {
        match self {
            Entry::Talk(talk) => &talk.id,
            Entry::Break(brk) => &brk.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Entry::Talk(talk) => &talk.title,
            Entry::Break(brk) => &brk.title,
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        match self {
            Entry::Talk(talk) => talk.start,
            Entry::Break(brk) => brk.start,
        }
    }

    pub fn as_talk(&self) -> Option<&Talk> {
        match self {
            Entry::Talk(talk) => Some(talk),
            Entry::Break(_) => None,
        }
    }

    pub fn is_break(&self) -> bool {
        matches!(self, Entry::Break(_))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventInfo {
    pub name: String,
    #[serde(default)]
    pub venue: String,
    pub time_zone: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub description: Vec<String>,
}

#[derive(Deserialize)]
struct ScheduleFile {
    event: EventInfo,
    #[serde(default)]
    entries: Vec<Entry>,
}

/// The ordered, validated list of talks and breaks plus event metadata.
#[derive(Clone, Debug)]
pub struct ScheduleData {
    event: EventInfo,
    entries: Vec<Entry>,
    time_zone: Tz,
}

impl ScheduleData {
    pub fn new(event: EventInfo, entries: Vec<Entry>) -> Result<Self, ScheduleError> {
        let time_zone: Tz = event
            .time_zone
            .parse()
            .map_err(|_| ScheduleError::UnknownTimeZone(event.time_zone.clone()))?;

        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id()) {
                return Err(ScheduleError::DuplicateId(entry.id().to_string()));
            }
            if let Entry::Talk(talk) = entry {
                if talk.end <= talk.start {
                    return Err(ScheduleError::InvertedTimeRange {
                        id: talk.id.clone(),
                    });
                }
            }
        }

        Ok(Self {
            event,
            entries,
            time_zone,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ScheduleError> {
        let file: ScheduleFile = toml::from_str(content)?;
        Self::new(file.event, file.entries)
    }

    pub fn from_path(path: &Path) -> Result<Self, ScheduleError> {
        let content = fs::read_to_string(path).map_err(|source| ScheduleError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn bundled() -> Result<Self, ScheduleError> {
        let file = ScheduleAssets::get(BUNDLED_SCHEDULE)
            .ok_or_else(|| ScheduleError::MissingAsset(BUNDLED_SCHEDULE.to_string()))?;
        let content = String::from_utf8_lossy(file.data.as_ref());
        Self::from_toml_str(&content)
    }

    /// Load from `path` when given, falling back to the bundled schedule.
    pub fn load(path: Option<&Path>) -> Result<Self, ScheduleError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::bundled(),
        }
    }

    /// Display zone override. The event's own zone is kept in `event()`.
    pub fn with_time_zone(mut self, time_zone: Tz) -> Self {
        self.time_zone = time_zone;
        self
    }

    pub fn event(&self) -> &EventInfo {
        &self.event
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// The talk in progress at `now`. Breaks have no duration and are never
    /// in progress; with overlapping talks the earliest listed wins.
    pub fn present_talk(&self, now: DateTime<Utc>) -> Option<usize> {
        self.entries.iter().position(|entry| {
            entry
                .as_talk()
                .is_some_and(|talk| time::status(now, talk.start, talk.end) == TalkStatus::Present)
        })
    }

    /// Index of the first talk after `index`, skipping breaks.
    pub fn next_talk(&self, index: usize) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .skip(index + 1)
            .find(|(_, entry)| !entry.is_break())
            .map(|(i, _)| i)
    }

    /// Index of the closest talk before `index`, skipping breaks.
    pub fn previous_talk(&self, index: usize) -> Option<usize> {
        self.entries[..index.min(self.entries.len())]
            .iter()
            .rposition(|entry| !entry.is_break())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[event]
name = "Sample Conf"
time_zone = "Europe/Berlin"

[[entries]]
kind = "talk"
id = "a"
title = "Talk A"
start = "2026-05-18T07:00:00Z"
end = "2026-05-18T07:30:00Z"
speakers = ["Ada"]

[[entries]]
kind = "break"
id = "coffee"
title = "Coffee"
start = "2026-05-18T07:30:00Z"

[[entries]]
kind = "talk"
id = "b"
title = "Talk B"
start = "2026-05-19T07:30:00Z"
end = "2026-05-19T08:00:00Z"
keynote = true
"#;

    #[test]
    fn test_parse_sample_schedule() {
        let data = ScheduleData::from_toml_str(SAMPLE).unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data.time_zone(), chrono_tz::Europe::Berlin);
        assert!(data.entries()[1].is_break());
        let b = data.entries()[2].as_talk().unwrap();
        assert!(b.keynote);
        assert!(!b.lightning);
        assert!(b.speakers.is_empty());
    }

    #[test]
    fn test_bundled_schedule_loads() {
        let data = ScheduleData::bundled().unwrap();
        assert!(!data.is_empty());
        assert!(!data.event().name.is_empty());
    }

    #[test]
    fn test_next_and_previous_skip_breaks() {
        let data = ScheduleData::from_toml_str(SAMPLE).unwrap();
        assert_eq!(data.next_talk(0), Some(2));
        assert_eq!(data.next_talk(2), None);
        assert_eq!(data.previous_talk(2), Some(0));
        assert_eq!(data.previous_talk(0), None);
    }

    #[test]
    fn test_present_talk_ignores_breaks() {
        let data = ScheduleData::from_toml_str(SAMPLE).unwrap();
        let at = |s: &str| s.parse::<DateTime<Utc>>().unwrap();
        assert_eq!(data.present_talk(at("2026-05-18T07:15:00Z")), Some(0));
        assert_eq!(data.present_talk(at("2026-05-18T07:30:00Z")), None);
        assert_eq!(data.present_talk(at("2026-05-19T07:30:00Z")), Some(2));
    }

    #[test]
    fn test_unknown_time_zone_is_rejected() {
        let bad = SAMPLE.replace("Europe/Berlin", "Mars/Olympus");
        let err = ScheduleData::from_toml_str(&bad).unwrap_err();
        assert!(matches!(err, ScheduleError::UnknownTimeZone(ref tz) if tz == "Mars/Olympus"));
    }

    #[test]
    fn test_inverted_talk_is_rejected() {
        let bad = SAMPLE.replace(
            "end = \"2026-05-18T07:30:00Z\"",
            "end = \"2026-05-18T06:30:00Z\"",
        );
        let err = ScheduleData::from_toml_str(&bad).unwrap_err();
        assert!(matches!(err, ScheduleError::InvertedTimeRange { ref id } if id == "a"));
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let bad = SAMPLE.replace("id = \"b\"", "id = \"a\"");
        let err = ScheduleData::from_toml_str(&bad).unwrap_err();
        assert!(matches!(err, ScheduleError::DuplicateId(ref id) if id == "a"));
    }
}
