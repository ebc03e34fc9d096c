use async_trait::async_trait;
use chrono::NaiveDate;

use crate::entities::{Event, RawEventItem, RecordingTask};

/// Acquisition side: the raw bookings scraped for one date.
#[async_trait]
pub trait RawEventSource: Send + Sync {
    async fn fetch_raw_events(&self, date: NaiveDate) -> anyhow::Result<Vec<RawEventItem>>;
}

/// Persistence side: diffs against stored state and upserts by event id.
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn store_events(&self, date: NaiveDate, events: &[Event]) -> anyhow::Result<()>;
}

#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn store_tasks(&self, date: NaiveDate, tasks: &[RecordingTask]) -> anyhow::Result<()>;
}
