use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;
use tracing::debug;

use venue_application::AppState;

use crate::utils::ensure_parent_dir;

pub const METRICS_FILE: &str = "metrics.prom";

/// Writes the run counters as a Prometheus textfile next to the outputs.
pub async fn export_metrics(state: &AppState) -> Result<()> {
    if !state.config.metrics_enabled {
        return Ok(());
    }
    let path = Path::new(&state.config.output_dir).join(METRICS_FILE);
    ensure_parent_dir(&path).await?;
    fs::write(&path, state.metrics.render_prometheus())
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    debug!("metrics written to {}", path.display());
    Ok(())
}
