use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use tokio::fs;

pub fn dated_path(dir: &str, prefix: &str, date: NaiveDate) -> PathBuf {
    let name = if prefix.is_empty() {
        format!("{}.json", date.format("%Y-%m-%d"))
    } else {
        format!("{}-{}.json", prefix, date.format("%Y-%m-%d"))
    };
    Path::new(dir).join(name)
}

pub async fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    Ok(())
}

pub async fn write_json_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path).await?;
    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
