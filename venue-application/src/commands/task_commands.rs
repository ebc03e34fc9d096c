use chrono::{DateTime, Utc};
use tracing::debug;

use venue_domain::{derive_recording_tasks, Event, RecordingTask, RecordingTaskRules};

/// Recording checks for every finalized event, in event order.
pub fn plan_recording_tasks(
    events: &[Event],
    rules: &RecordingTaskRules,
    now: DateTime<Utc>,
) -> Vec<RecordingTask> {
    let tasks: Vec<RecordingTask> = events
        .iter()
        .flat_map(|event| derive_recording_tasks(event, rules, now))
        .collect();
    debug!("planned {} recording tasks for {} events", tasks.len(), events.len());
    tasks
}
