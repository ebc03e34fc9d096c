// Raw event entity
// One room booking for one date, as handed over by the acquisition side

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entities::Panel;
use crate::error::PipelineError;
use crate::utils::{lenient_quantity, one_or_many};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEventItem {
    #[serde(default)]
    pub item_id: Option<u64>,
    #[serde(default, rename = "itemId2")]
    pub item_id2: Option<u64>,
    #[serde(default)]
    pub subject_item_id: Option<u64>,
    #[serde(default)]
    pub subject_item_name: String,
    #[serde(default)]
    pub subject_item_date: Option<String>,
    #[serde(default)]
    pub start: f64,
    #[serde(default)]
    pub end: f64,
    #[serde(default)]
    pub item_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_details: Option<ItemDetails>,
}

impl RawEventItem {
    pub fn panels(&self) -> &[Panel] {
        self.item_details
            .as_ref()
            .and_then(|details| details.defn.as_ref())
            .map(|defn| defn.panel.as_slice())
            .unwrap_or_default()
    }

    /// Every reservation across all profiles, in source order.
    pub fn reservations(&self) -> impl Iterator<Item = &Reservation> {
        self.item_details
            .iter()
            .filter_map(|details| details.occur.as_ref())
            .flat_map(|occur| occur.prof.iter())
            .flat_map(|prof| prof.rsv.iter())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defn: Option<Definition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occur: Option<Occurrence>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    #[serde(default, deserialize_with = "one_or_many")]
    pub panel: Vec<Panel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Occurrence {
    #[serde(default, deserialize_with = "one_or_many")]
    pub prof: Vec<Profile>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "one_or_many")]
    pub rsv: Vec<Reservation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    #[serde(default)]
    pub start_dt: Option<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub res: Vec<Resource>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[serde(default)]
    pub item_name: String,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub instruction: Option<String>,
}

/// Decodes one acquisition batch. `null` means "no events for this date".
pub fn decode_raw_batch(value: Value) -> Result<Vec<RawEventItem>, PipelineError> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value(item).map_err(|err| {
                    PipelineError::InvalidInput(format!("record {}: {}", index, err))
                })
            })
            .collect(),
        other => Err(PipelineError::InvalidInput(format!(
            "expected a list of events, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
