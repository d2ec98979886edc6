use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use confsched::schedule::grouping::group;
use confsched::schedule::talk::{Break, Entry, Talk};
use confsched::schedule::time::TimeFormatter;
use confsched::screen::list_layout::ListLayout;

fn make_entries(count: usize) -> Vec<Entry> {
    let base: DateTime<Utc> = Utc.with_ymd_and_hms(2026, 5, 18, 6, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            // Twenty slots a day, every fifth one a break.
            let start = base
                + TimeDelta::days((i / 20) as i64)
                + TimeDelta::minutes(30 * (i % 20) as i64);
            if i % 5 == 4 {
                Entry::Break(Break {
                    id: format!("break-{i}"),
                    title: "Coffee".to_string(),
                    start,
                })
            } else {
                Entry::Talk(Talk {
                    id: format!("talk-{i}"),
                    title: format!("Talk {i}"),
                    start,
                    end: start + TimeDelta::minutes(30),
                    speakers: vec!["Speaker".to_string()],
                    keynote: false,
                    lightning: i % 7 == 0,
                    description: None,
                })
            }
        })
        .collect()
}

fn bench_grouping(c: &mut Criterion) {
    let entries = make_entries(2_000);
    let formatter = TimeFormatter::new(chrono_tz::Europe::Berlin);

    c.bench_function("group (2000 entries)", |b| {
        b.iter(|| group(black_box(&entries), &formatter))
    });
}

fn bench_layout(c: &mut Criterion) {
    let entries = make_entries(2_000);
    let formatter = TimeFormatter::new(chrono_tz::Europe::Berlin);
    let groups = group(&entries, &formatter);

    c.bench_function("ListLayout::build (2000 entries)", |b| {
        b.iter(|| ListLayout::build(black_box(&groups), &entries, 12))
    });
}

criterion_group!(benches, bench_grouping, bench_layout);
criterion_main!(benches);
