//! Tests for the JSON request document.

use meeting_finder::{MeetingDocument, MeetingError, TimeRange};

fn range(start: u32, end: u32) -> TimeRange {
    TimeRange::new(start, end).unwrap()
}

#[test]
fn parses_events_and_request() {
    let json = r#"{
        "events": [
            {"title": "Standup", "when": {"start": 540, "end": 555}, "attendees": ["ana", "ben"]},
            {"title": "Gym", "when": {"start": 1080, "end": 1140}, "attendees": ["cyd"]}
        ],
        "request": {"attendees": ["ben"], "duration": 30}
    }"#;

    let doc = MeetingDocument::from_json(json).unwrap();

    assert_eq!(doc.events.len(), 2);
    assert_eq!(doc.request.duration, 30);
    assert_eq!(doc.slots(), vec![range(0, 540), range(555, 1440)]);
    assert_eq!(doc.busy(), vec![range(540, 555)]);
}

#[test]
fn events_default_to_empty() {
    let doc = MeetingDocument::from_json(r#"{"request": {"attendees": [], "duration": 10}}"#)
        .unwrap();

    assert!(doc.events.is_empty());
    assert_eq!(doc.slots(), vec![TimeRange::WHOLE_DAY]);
}

#[test]
fn inverted_range_is_rejected() {
    let json = r#"{
        "events": [{"title": "Bad", "when": {"start": 600, "end": 500}, "attendees": ["ana"]}],
        "request": {"attendees": ["ana"], "duration": 30}
    }"#;

    let err = MeetingDocument::from_json(json).unwrap_err();

    assert!(matches!(err, MeetingError::Json(_)));
    assert!(err.to_string().contains("end 500 is before start 600"));
}

#[test]
fn negative_duration_is_rejected() {
    let json = r#"{"request": {"attendees": ["ana"], "duration": -5}}"#;

    assert!(MeetingDocument::from_json(json).is_err());
}

#[test]
fn slots_serialize_as_start_end_objects() {
    let json = serde_json::to_string(&vec![range(0, 60), range(120, 1440)]).unwrap();

    assert_eq!(json, r#"[{"start":0,"end":60},{"start":120,"end":1440}]"#);
}
