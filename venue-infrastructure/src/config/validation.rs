use anyhow::{anyhow, Result};

use venue_domain::MINUTES_PER_DAY;

pub fn validate_directory(key: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(anyhow!("{} must not be empty", key));
    }
    Ok(())
}

pub fn validate_prefix(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(anyhow!("recording_resource_prefix must not be empty"));
    }
    Ok(())
}

pub fn validate_interval_minutes(value: u32) -> Result<()> {
    if value == 0 || value > MINUTES_PER_DAY {
        return Err(anyhow!(
            "recording_interval_minutes must be between 1 and {}",
            MINUTES_PER_DAY
        ));
    }
    Ok(())
}
