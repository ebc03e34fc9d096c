use chrono::{DateTime, Utc};

use crate::entities::{Event, RecordingTask, RecordingTaskRules, RECORDING_CHECK_TASK};

/// One check task per complete interval of the event, for every recording
/// resource it reserves. Tasks are ordered by resource, then by time.
pub fn derive_recording_tasks(
    event: &Event,
    rules: &RecordingTaskRules,
    now: DateTime<Utc>,
) -> Vec<RecordingTask> {
    let interval = rules.interval_minutes;
    let interval_seconds = i64::from(interval) * 60;
    let duration = event.duration_seconds();
    if interval_seconds <= 0 || duration <= 0 {
        return Vec::new();
    }
    let slots = u32::try_from(duration / interval_seconds).unwrap_or(0);

    event
        .resources
        .iter()
        .filter(|resource| rules.matches(&resource.item_name))
        .flat_map(|resource| {
            (0..slots).filter_map(move |slot| {
                let time = event.start_time.plus_minutes(slot.checked_mul(interval)?)?;
                Some(RecordingTask {
                    event_id: event.id,
                    task_type: RECORDING_CHECK_TASK.to_string(),
                    resource_item_name: resource.item_name.clone(),
                    date: event.date,
                    time,
                    created_at: now,
                    updated_at: now,
                })
            })
        })
        .collect()
}
