use anyhow::Result;
use chrono::NaiveDate;
use tracing::{info, warn};

use venue_application::commands::normalize_commands::{run_normalization, RunSummary};
use venue_application::AppState;
use venue_infrastructure::export_metrics;

use crate::context::AppContext;

#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub date: NaiveDate,
    pub skip_tasks: bool,
}

pub async fn run_once(options: RunOptions) -> Result<RunSummary> {
    let context = AppContext::new().await?;
    run_with_state(context.state, options).await
}

pub async fn run_with_state(mut state: AppState, options: RunOptions) -> Result<RunSummary> {
    if options.skip_tasks {
        state.config.derive_tasks = false;
    }
    info!(
        "processing bookings for {} (input {}, output {})",
        options.date, state.config.input_dir, state.config.output_dir
    );

    let result = run_normalization(&state, options.date).await;
    if let Err(err) = export_metrics(&state).await {
        warn!("failed to export metrics: {}", err);
    }
    Ok(result?)
}
