use std::sync::Arc;

use anyhow::Result;

use venue_application::{AppState, Metrics};
use venue_domain::RuntimeConfig;
use venue_infrastructure::{AppConfig, JsonFileRepository};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        Ok(Self::from_runtime_config(config.to_runtime_config()))
    }

    pub fn from_runtime_config(config: RuntimeConfig) -> Self {
        let repo = Arc::new(JsonFileRepository::new(
            config.input_dir.clone(),
            config.output_dir.clone(),
        ));

        let state = AppState {
            config,
            raw_source: repo.clone(),
            event_store: repo.clone(),
            task_store: repo,
            metrics: Arc::new(Metrics::default()),
        };

        Self { state }
    }
}
