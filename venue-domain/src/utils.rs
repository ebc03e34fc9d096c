use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts a list, a single object, or null for list-shaped source fields.
pub fn one_or_many<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        Many(Vec<T>),
        One(T),
    }

    Ok(match Option::<OneOrMany<T>>::deserialize(deserializer)? {
        Some(OneOrMany::Many(items)) => items,
        Some(OneOrMany::One(item)) => vec![item],
        None => Vec::new(),
    })
}

/// Quantities arrive as numbers or numeric strings; anything else is absent.
pub fn lenient_quantity<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Date part of a source timestamp ("2024-03-05T09:00:00" -> "2024-03-05").
pub fn date_portion(value: &str) -> &str {
    let trimmed = value.trim();
    trimmed
        .split(|c| c == 'T' || c == ' ')
        .next()
        .unwrap_or(trimmed)
}

pub fn parse_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|err| anyhow!(err))
}
