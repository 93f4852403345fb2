use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use meeting_finder::{find_meeting_slots, Event, MeetingRequest, TimeRange};

fn busy_day(people: usize) -> Vec<Event> {
    (0..people)
        .flat_map(|p| {
            (0..8u32).map(move |slot| {
                let start = 480 + slot * 60 + (p as u32 % 4) * 10;
                Event::new(
                    format!("p{p}-{slot}"),
                    TimeRange::from_start_duration(start, 30),
                    [format!("person-{p}")],
                )
            })
        })
        .collect()
}

fn query(c: &mut Criterion) {
    c.bench_function("query_empty_day", |b| {
        let events: Vec<Event> = Vec::new();
        let request = MeetingRequest::new(["person-0"], 30);
        b.iter(|| black_box(find_meeting_slots(&events, &request)));
    });

    c.bench_function("query_50_people_busy_day", |b| {
        let events = busy_day(50);
        let request = MeetingRequest::new((0..50).map(|p| format!("person-{p}")), 15);
        b.iter(|| black_box(find_meeting_slots(&events, &request)));
    });

    c.bench_function("query_few_required_of_many", |b| {
        let events = busy_day(200);
        let request = MeetingRequest::new(["person-3", "person-150"], 45);
        b.iter(|| black_box(find_meeting_slots(&events, &request)));
    });
}

criterion_group!(benches, query);
criterion_main!(benches);
