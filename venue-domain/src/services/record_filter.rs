// Drops placeholder and already-merged bookings before assembly.

use crate::entities::RawEventItem;

/// Labels the source uses for private or closed bookings without an item id.
pub const PLACEHOLDER_ITEM_NAMES: [&str; 2] = ["(Private)", "(Closed)"];

pub fn is_noise_record(raw: &RawEventItem) -> bool {
    let placeholder = raw.item_id == Some(0)
        && PLACEHOLDER_ITEM_NAMES.contains(&raw.item_name.trim());
    placeholder || raw.item_id2 == Some(0) || raw.subject_item_name.contains('&')
}

/// Keeps surviving records in their original order.
pub fn filter_records(records: Vec<RawEventItem>) -> Vec<RawEventItem> {
    records
        .into_iter()
        .filter(|raw| !is_noise_record(raw))
        .collect()
}
