// Runtime configuration handed from infrastructure to the application layer

use serde::{Deserialize, Serialize};

use crate::entities::RecordingTaskRules;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub input_dir: String,
    pub output_dir: String,
    pub derive_tasks: bool,
    pub recording_resource_prefix: String,
    pub recording_interval_minutes: u32,
    pub metrics_enabled: bool,
}

impl RuntimeConfig {
    pub fn recording_rules(&self) -> RecordingTaskRules {
        RecordingTaskRules {
            resource_prefix: self.recording_resource_prefix.clone(),
            interval_minutes: self.recording_interval_minutes,
        }
    }
}
