// Resources reserved for the occurrence on the event's own date.

use chrono::NaiveDate;

use crate::entities::{RawEventItem, Resource};
use crate::utils::date_portion;

/// First reservation whose start date matches wins; source order matters.
pub fn extract_resources(raw: &RawEventItem, event_date: NaiveDate) -> Vec<Resource> {
    let wanted = event_date.format("%Y-%m-%d").to_string();
    raw.reservations()
        .find(|rsv| {
            rsv.start_dt
                .as_deref()
                .map(|start| date_portion(start) == wanted)
                .unwrap_or(false)
        })
        .map(|rsv| rsv.res.clone())
        .unwrap_or_default()
}
