// Recording check task entity

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::ClockTime;

pub const RECORDING_CHECK_TASK: &str = "RECORDING_CHECK";
pub const DEFAULT_RECORDING_PREFIX: &str = "KSM-KGH-VIDEO-RECORDING";
pub const DEFAULT_RECORDING_INTERVAL_MINUTES: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingTask {
    pub event_id: i64,
    pub task_type: String,
    pub resource_item_name: String,
    pub date: NaiveDate,
    pub time: ClockTime,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingTaskRules {
    pub resource_prefix: String,
    pub interval_minutes: u32,
}

impl Default for RecordingTaskRules {
    fn default() -> Self {
        Self {
            resource_prefix: DEFAULT_RECORDING_PREFIX.to_string(),
            interval_minutes: DEFAULT_RECORDING_INTERVAL_MINUTES,
        }
    }
}

impl RecordingTaskRules {
    pub fn matches(&self, resource_name: &str) -> bool {
        let prefix = self.resource_prefix.to_lowercase();
        !prefix.is_empty() && resource_name.to_lowercase().starts_with(&prefix)
    }
}
