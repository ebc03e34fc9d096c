// Event entity
// Canonical, deduplicated booking ready for storage

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::{RawEventItem, Resource};
use crate::value_objects::{ClockTime, EventCategory};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub item_id: u64,
    pub item_id2: u64,
    pub date: NaiveDate,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub event_name: String,
    pub event_type: Option<EventCategory>,
    pub organization: Option<String>,
    pub instructor_names: Option<Vec<String>>,
    pub lecture_title: Option<String>,
    pub room_name: Option<String>,
    pub resources: Vec<Resource>,
    pub raw: Arc<RawEventItem>,
}

impl Event {
    pub fn is_kec(&self) -> bool {
        matches!(self.event_type, Some(EventCategory::Kec))
    }

    pub fn duration_seconds(&self) -> i64 {
        self.end_time.seconds_since(self.start_time)
    }

    pub fn with_room_name(&self, room_name: &str) -> Self {
        Self {
            room_name: Some(room_name.to_string()),
            ..self.clone()
        }
    }
}
