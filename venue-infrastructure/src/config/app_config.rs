use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use venue_domain::{RuntimeConfig, DEFAULT_RECORDING_INTERVAL_MINUTES, DEFAULT_RECORDING_PREFIX};

use crate::config::validation::{validate_directory, validate_interval_minutes, validate_prefix};

pub const CONFIG_ENV: &str = "VENUE_SYNC_CONFIG";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub input_dir: String,
    pub output_dir: String,
    pub derive_tasks: bool,
    pub recording_resource_prefix: String,
    pub recording_interval_minutes: u32,
    pub metrics_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input_dir: "./data/raw".to_string(),
            output_dir: "./data/normalized".to_string(),
            derive_tasks: true,
            recording_resource_prefix: DEFAULT_RECORDING_PREFIX.to_string(),
            recording_interval_minutes: DEFAULT_RECORDING_INTERVAL_MINUTES,
            metrics_enabled: true,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var(CONFIG_ENV).unwrap_or_else(|_| "./config.toml".to_string());
        Self::load_from(Path::new(&path)).await
    }

    pub async fn load_from(file_path: &Path) -> Result<Self> {
        let base_dir = file_path.parent();
        let present = fs::try_exists(file_path)
            .await
            .with_context(|| format!("failed to check {}", file_path.display()))?;
        let mut config = if present {
            let content = fs::read_to_string(file_path)
                .await
                .with_context(|| format!("failed to read {}", file_path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("failed to parse {}", file_path.display()))?
        } else {
            warn!("{} not found, using defaults", file_path.display());
            AppConfig::default()
        };
        config.apply_env_overrides();
        config.resolve_paths(base_dir);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        self.input_dir = self.input_dir.trim().to_string();
        self.output_dir = self.output_dir.trim().to_string();
        let prefix = self.recording_resource_prefix.trim();
        if prefix.is_empty() {
            self.recording_resource_prefix = DEFAULT_RECORDING_PREFIX.to_string();
        } else {
            self.recording_resource_prefix = prefix.to_string();
        }
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.input_dir = resolve_path(base, &self.input_dir);
        self.output_dir = resolve_path(base, &self.output_dir);
    }

    pub fn validate(&self) -> Result<()> {
        validate_directory("input_dir", &self.input_dir)?;
        validate_directory("output_dir", &self.output_dir)?;
        validate_prefix(&self.recording_resource_prefix)?;
        validate_interval_minutes(self.recording_interval_minutes)?;
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            input_dir: self.input_dir.clone(),
            output_dir: self.output_dir.clone(),
            derive_tasks: self.derive_tasks,
            recording_resource_prefix: self.recording_resource_prefix.clone(),
            recording_interval_minutes: self.recording_interval_minutes,
            metrics_enabled: self.metrics_enabled,
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup("VENUE_SYNC_INPUT_DIR") {
            self.input_dir = value;
        }
        if let Some(value) = lookup("VENUE_SYNC_OUTPUT_DIR") {
            self.output_dir = value;
        }
        if let Some(value) = lookup("VENUE_SYNC_DERIVE_TASKS") {
            self.derive_tasks = value.parse().unwrap_or(self.derive_tasks);
        }
        if let Some(value) = lookup("VENUE_SYNC_RECORDING_RESOURCE_PREFIX") {
            self.recording_resource_prefix = value;
        }
        if let Some(value) = lookup("VENUE_SYNC_RECORDING_INTERVAL_MINUTES") {
            self.recording_interval_minutes =
                value.parse().unwrap_or(self.recording_interval_minutes);
        }
        if let Some(value) = lookup("VENUE_SYNC_METRICS_ENABLED") {
            self.metrics_enabled = value.parse().unwrap_or(self.metrics_enabled);
        }
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}
