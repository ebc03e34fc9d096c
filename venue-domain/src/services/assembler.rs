use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::entities::{Event, RawEventItem};
use crate::error::PipelineError;
use crate::services::{
    decimal_hours_to_time, extract_event_type, extract_instructor_names, extract_lecture_title,
    extract_organization, extract_resources, generate_event_id, resolve_event_date,
};
use crate::value_objects::parse_room_name;

/// Builds one canonical event per surviving raw record.
#[derive(Debug, Clone, Copy)]
pub struct EventAssembler {
    fallback_date: NaiveDate,
}

impl EventAssembler {
    pub fn new(fallback_date: NaiveDate) -> Self {
        Self { fallback_date }
    }

    pub fn assemble(&self, raw: RawEventItem) -> Result<Event, PipelineError> {
        let item_id = required(raw.item_id, "itemId", &raw)?;
        let item_id2 = required(raw.item_id2, "itemId2", &raw)?;
        let subject_item_id = required(raw.subject_item_id, "subjectItemId", &raw)?;

        let date = resolve_event_date(raw.subject_item_date.as_deref(), self.fallback_date);
        let panels = raw.panels();

        Ok(Event {
            id: generate_event_id(item_id, item_id2, subject_item_id),
            item_id,
            item_id2,
            date,
            start_time: decimal_hours_to_time(raw.start),
            end_time: decimal_hours_to_time(raw.end),
            event_name: raw.item_name.clone(),
            event_type: extract_event_type(panels),
            organization: extract_organization(panels),
            instructor_names: extract_instructor_names(panels),
            lecture_title: extract_lecture_title(panels),
            room_name: parse_room_name(&raw.subject_item_name),
            resources: extract_resources(&raw, date),
            raw: Arc::new(raw),
        })
    }

    /// Output order follows input order.
    pub fn assemble_all(&self, records: Vec<RawEventItem>) -> Result<Vec<Event>, PipelineError> {
        let events = records
            .into_iter()
            .map(|raw| self.assemble(raw))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("assembled {} events", events.len());
        Ok(events)
    }
}

fn required(value: Option<u64>, field: &'static str, raw: &RawEventItem) -> Result<u64, PipelineError> {
    value.ok_or_else(|| PipelineError::MissingIdentity {
        field,
        item_name: raw.item_name.clone(),
    })
}
