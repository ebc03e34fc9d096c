use std::sync::Arc;

use venue_domain::ports::{EventStore, RawEventSource, TaskStore};
use venue_domain::RuntimeConfig;

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub raw_source: Arc<dyn RawEventSource>,
    pub event_store: Arc<dyn EventStore>,
    pub task_store: Arc<dyn TaskStore>,
    pub metrics: Arc<Metrics>,
}
