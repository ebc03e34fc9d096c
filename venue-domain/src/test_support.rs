// Shared fixtures for domain tests

use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::entities::{Event, Panel, RawEventItem, Resource};
use crate::value_objects::{ClockTime, EventCategory};

pub fn panels_from(value: Value) -> Vec<Panel> {
    serde_json::from_value(value).expect("decode panels")
}

/// typeId 11 panel with title, kind and organization at their fixed positions.
pub fn classification_panel(title: &str, kind: &str, organization: &str) -> Panel {
    serde_json::from_value(classification_json(title, kind, organization)).expect("decode panel")
}

pub fn classification_json(title: &str, kind: &str, organization: &str) -> Value {
    json!({
        "typeId": 11,
        "item": [
            {"itemName": "Event Details"},
            {"itemName": title},
            {"itemName": kind},
            {"itemName": ""},
            {"itemName": ""},
            {"item": [{"itemName": organization}]}
        ]
    })
}

pub fn raw_item(value: Value) -> RawEventItem {
    serde_json::from_value(value).expect("decode raw item")
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("date")
}

pub fn time(s: &str) -> ClockTime {
    s.parse().expect("time")
}

pub fn resource(name: &str) -> Resource {
    Resource {
        item_name: name.to_string(),
        quantity: Some(1),
        instruction: None,
    }
}

/// Minimal finalized event; tests override the fields they care about.
pub fn event(id: i64, room: Option<&str>, start: &str, end: &str) -> Event {
    Event {
        id,
        item_id: id as u64,
        item_id2: id as u64 + 1,
        date: date("2024-03-05"),
        start_time: time(start),
        end_time: time(end),
        event_name: "Strategy Lecture".to_string(),
        event_type: Some(EventCategory::Other("Meeting".to_string())),
        organization: None,
        instructor_names: None,
        lecture_title: None,
        room_name: room.map(ToString::to_string),
        resources: Vec::new(),
        raw: Arc::new(raw_item(json!({"itemId": id, "itemName": "Strategy Lecture"}))),
    }
}

/// KEC event whose raw detail carries the given session kind.
pub fn kec_event(id: i64, room: &str, start: &str, end: &str, kind: &str) -> Event {
    let raw = raw_item(json!({
        "itemId": id,
        "itemName": "Executive Program",
        "itemDetails": {
            "defn": {"panel": [classification_json("Leadership", kind, "KSM-Executive Education")]}
        }
    }));
    Event {
        event_name: "Executive Program".to_string(),
        event_type: Some(EventCategory::Kec),
        instructor_names: Some(vec![format!("Instructor {}", id)]),
        resources: vec![resource("Flip Chart")],
        raw: Arc::new(raw),
        ..event(id, Some(room), start, end)
    }
}
