use chrono::{Local, NaiveDate, Utc};
use serde::Serialize;
use tracing::{error, info};

use venue_domain::{normalize_events, PipelineStats};

use crate::commands::task_commands::plan_recording_tasks;
use crate::{AppError, AppState};

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub date: NaiveDate,
    pub stats: PipelineStats,
    pub task_count: usize,
}

pub async fn run_normalization(state: &AppState, date: NaiveDate) -> Result<RunSummary, AppError> {
    match normalize_and_store(state, date).await {
        Ok(summary) => {
            state.metrics.record_run(&summary.stats, summary.task_count);
            info!(
                "normalized {}: {} raw, {} dropped, {} events, {} room merges, {} session merges, {} discarded, {} tasks",
                summary.date,
                summary.stats.raw_records,
                summary.stats.dropped_records,
                summary.stats.finalized_events,
                summary.stats.room_merges,
                summary.stats.session_merges,
                summary.stats.discarded_events,
                summary.task_count
            );
            Ok(summary)
        }
        Err(err) => {
            state.metrics.record_run_error();
            error!("normalization for {} failed: {}", date, err);
            Err(err)
        }
    }
}

async fn normalize_and_store(state: &AppState, date: NaiveDate) -> Result<RunSummary, AppError> {
    let raw = state
        .raw_source
        .fetch_raw_events(date)
        .await
        .map_err(AppError::from_collaborator)?;

    let output = normalize_events(raw, Local::now().date_naive())?;

    state
        .event_store
        .store_events(date, &output.events)
        .await
        .map_err(AppError::from_collaborator)?;

    let mut task_count = 0;
    if state.config.derive_tasks {
        let tasks = plan_recording_tasks(
            &output.events,
            &state.config.recording_rules(),
            Utc::now(),
        );
        state
            .task_store
            .store_tasks(date, &tasks)
            .await
            .map_err(AppError::from_collaborator)?;
        task_count = tasks.len();
    }

    Ok(RunSummary {
        date,
        stats: output.stats,
        task_count,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use serde_json::json;
    use tokio::sync::Mutex;
    use venue_domain::ports::{EventStore, RawEventSource, TaskStore};
    use venue_domain::{decode_raw_batch, Event, PipelineError, RawEventItem, RecordingTask, RuntimeConfig};

    use super::*;
    use crate::Metrics;

    struct FixedSource(serde_json::Value);

    #[async_trait]
    impl RawEventSource for FixedSource {
        async fn fetch_raw_events(&self, _date: NaiveDate) -> anyhow::Result<Vec<RawEventItem>> {
            Ok(decode_raw_batch(self.0.clone())?)
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        events: Mutex<Vec<Event>>,
        tasks: Mutex<Vec<RecordingTask>>,
    }

    #[async_trait]
    impl EventStore for MemoryStore {
        async fn store_events(&self, _date: NaiveDate, events: &[Event]) -> anyhow::Result<()> {
            self.events.lock().await.extend_from_slice(events);
            Ok(())
        }
    }

    #[async_trait]
    impl TaskStore for MemoryStore {
        async fn store_tasks(&self, _date: NaiveDate, tasks: &[RecordingTask]) -> anyhow::Result<()> {
            self.tasks.lock().await.extend_from_slice(tasks);
            Ok(())
        }
    }

    fn config(derive_tasks: bool) -> RuntimeConfig {
        RuntimeConfig {
            input_dir: "in".to_string(),
            output_dir: "out".to_string(),
            derive_tasks,
            recording_resource_prefix: "KSM-KGH-VIDEO-RECORDING".to_string(),
            recording_interval_minutes: 30,
            metrics_enabled: false,
        }
    }

    fn state(batch: serde_json::Value, derive_tasks: bool) -> (AppState, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::default());
        let state = AppState {
            config: config(derive_tasks),
            raw_source: Arc::new(FixedSource(batch)),
            event_store: store.clone(),
            task_store: store.clone(),
            metrics: Arc::new(Metrics::default()),
        };
        (state, store)
    }

    fn recorded_booking() -> serde_json::Value {
        json!([{
            "itemId": 1, "itemId2": 2, "subjectItemId": 3,
            "subjectItemName": "KGH1110 (70)",
            "subjectItemDate": "2024-03-05T00:00:00",
            "start": 9.0, "end": 10.5,
            "itemName": "Recorded Lecture",
            "itemDetails": {"occur": {"prof": [{"rsv": [{
                "startDt": "2024-03-05T09:00:00",
                "res": [{"itemName": "KSM-KGH-VIDEO-RECORDING-A", "quantity": 1}]
            }]}]}}
        }])
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).expect("date")
    }

    #[tokio::test]
    async fn run_stores_events_and_tasks() {
        let (state, store) = state(recorded_booking(), true);
        let summary = run_normalization(&state, day()).await.expect("run");

        assert_eq!(summary.stats.finalized_events, 1);
        assert_eq!(summary.task_count, 3);
        assert_eq!(store.events.lock().await.len(), 1);
        assert_eq!(store.tasks.lock().await.len(), 3);
        assert!(state
            .metrics
            .render_prometheus()
            .contains("venue_sync_recording_tasks_total 3\n"));
    }

    #[tokio::test]
    async fn task_derivation_can_be_disabled() {
        let (state, store) = state(recorded_booking(), false);
        let summary = run_normalization(&state, day()).await.expect("run");
        assert_eq!(summary.task_count, 0);
        assert!(store.tasks.lock().await.is_empty());
    }

    #[tokio::test]
    async fn absent_batch_is_an_empty_run() {
        let (state, store) = state(serde_json::Value::Null, true);
        let summary = run_normalization(&state, day()).await.expect("run");
        assert_eq!(summary.stats, PipelineStats::default());
        assert!(store.events.lock().await.is_empty());
    }

    #[tokio::test]
    async fn non_sequence_batch_is_invalid_input() {
        let (state, _) = state(json!({"events": []}), true);
        let err = run_normalization(&state, day()).await.expect_err("reject object");
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert!(state
            .metrics
            .render_prometheus()
            .contains("venue_sync_run_errors_total 1\n"));
    }

    #[tokio::test]
    async fn missing_identity_is_surfaced() {
        let (state, store) = state(json!([{"itemId": 1, "itemName": "Broken"}]), true);
        let err = run_normalization(&state, day()).await.expect_err("missing identity");
        assert!(matches!(
            err,
            AppError::Pipeline(PipelineError::MissingIdentity { field: "itemId2", .. })
        ));
        assert!(store.events.lock().await.is_empty());
    }
}
