use crate::schedule::talk::Entry;
use crate::schedule::time::TimeFormatter;

/// A run of consecutive entries sharing the same zone-local weekday.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayGroup {
    pub key: String,
    /// Indices into the full entry list, in data order.
    pub entries: Vec<usize>,
}

/// Single pass over `entries`: a new group opens whenever the weekday differs
/// from the most recently opened group. Groups are never merged, so a weekday
/// that reappears after a different one yields a second group with the same
/// key.
pub fn group(entries: &[Entry], formatter: &TimeFormatter) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        let key = formatter.weekday(entry.start());
        match groups.last_mut() {
            Some(current) if current.key == key => current.entries.push(index),
            _ => groups.push(DayGroup {
                key,
                entries: vec![index],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::talk::{Break, Talk};
    use chrono::{DateTime, TimeZone, Utc};

    fn instant(day: u32, h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, day, h, m, 0).unwrap()
    }

    fn talk(id: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Entry {
        Entry::Talk(Talk {
            id: id.to_string(),
            title: format!("Talk {id}"),
            start,
            end,
            speakers: Vec::new(),
            keynote: false,
            lightning: false,
            description: None,
        })
    }

    fn brk(id: &str, start: DateTime<Utc>) -> Entry {
        Entry::Break(Break {
            id: id.to_string(),
            title: "Break".to_string(),
            start,
        })
    }

    fn utc() -> TimeFormatter {
        TimeFormatter::new(chrono_tz::UTC)
    }

    #[test]
    fn test_monday_tuesday_scenario() {
        // 2026-05-18 is a Monday.
        let entries = vec![
            talk("A", instant(18, 9, 0), instant(18, 9, 30)),
            brk("Break", instant(18, 9, 30)),
            talk("B", instant(19, 9, 30), instant(19, 10, 0)),
        ];
        let groups = group(&entries, &utc());
        assert_eq!(
            groups,
            vec![
                DayGroup {
                    key: "Monday".to_string(),
                    entries: vec![0, 1],
                },
                DayGroup {
                    key: "Tuesday".to_string(),
                    entries: vec![2],
                },
            ]
        );
    }

    #[test]
    fn test_concatenated_groups_reproduce_input_order() {
        let entries = vec![
            talk("a", instant(18, 8, 0), instant(18, 9, 0)),
            talk("b", instant(18, 9, 0), instant(18, 10, 0)),
            brk("c", instant(18, 10, 0)),
            talk("d", instant(19, 8, 0), instant(19, 9, 0)),
            talk("e", instant(20, 8, 0), instant(20, 9, 0)),
        ];
        let flattened: Vec<usize> = group(&entries, &utc())
            .into_iter()
            .flat_map(|g| g.entries)
            .collect();
        assert_eq!(flattened, (0..entries.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_interleaved_weekday_opens_second_group() {
        let entries = vec![
            talk("a", instant(18, 8, 0), instant(18, 9, 0)),
            talk("b", instant(19, 8, 0), instant(19, 9, 0)),
            talk("c", instant(18, 10, 0), instant(18, 11, 0)),
        ];
        let keys: Vec<String> = group(&entries, &utc()).into_iter().map(|g| g.key).collect();
        assert_eq!(keys, vec!["Monday", "Tuesday", "Monday"]);
    }

    #[test]
    fn test_empty_input_yields_no_groups() {
        assert!(group(&[], &utc()).is_empty());
    }
}
