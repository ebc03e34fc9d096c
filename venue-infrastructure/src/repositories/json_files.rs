use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;
use tokio::fs;
use tracing::{debug, warn};

use venue_domain::{
    decode_raw_batch, Event, EventStore, RawEventItem, RawEventSource, RecordingTask, TaskStore,
};

use crate::utils::{dated_path, write_json_pretty};

/// Reads scraped batches as `<input_dir>/<date>.json` and writes
/// `events-<date>.json` / `tasks-<date>.json` into `output_dir`.
pub struct JsonFileRepository {
    input_dir: String,
    output_dir: String,
}

impl JsonFileRepository {
    pub fn new(input_dir: impl Into<String>, output_dir: impl Into<String>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
        }
    }
}

#[async_trait]
impl RawEventSource for JsonFileRepository {
    async fn fetch_raw_events(&self, date: NaiveDate) -> anyhow::Result<Vec<RawEventItem>> {
        let path = dated_path(&self.input_dir, "", date);
        let present = fs::try_exists(&path)
            .await
            .with_context(|| format!("failed to check {}", path.display()))?;
        if !present {
            warn!("no raw batch at {}, treating as empty", path.display());
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?;
        let value: Value = if content.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("failed to parse {}", path.display()))?
        };
        let items = decode_raw_batch(value)?;
        debug!("read {} raw records from {}", items.len(), path.display());
        Ok(items)
    }
}

#[async_trait]
impl EventStore for JsonFileRepository {
    async fn store_events(&self, date: NaiveDate, events: &[Event]) -> anyhow::Result<()> {
        let path = dated_path(&self.output_dir, "events", date);
        write_json_pretty(&path, events).await?;
        debug!("wrote {} events to {}", events.len(), path.display());
        Ok(())
    }
}

#[async_trait]
impl TaskStore for JsonFileRepository {
    async fn store_tasks(&self, date: NaiveDate, tasks: &[RecordingTask]) -> anyhow::Result<()> {
        let path = dated_path(&self.output_dir, "tasks", date);
        write_json_pretty(&path, tasks).await?;
        debug!("wrote {} tasks to {}", tasks.len(), path.display());
        Ok(())
    }
}
