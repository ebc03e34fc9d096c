use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entities::{Event, RawEventItem};
use crate::error::PipelineError;
use crate::services::{consolidate_sessions, filter_records, merge_adjacent_rooms, EventAssembler};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStats {
    pub raw_records: usize,
    pub dropped_records: usize,
    pub assembled_events: usize,
    pub room_merges: usize,
    pub session_merges: usize,
    pub discarded_events: usize,
    pub finalized_events: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub events: Vec<Event>,
    pub stats: PipelineStats,
}

/// Filter, assemble, merge adjacent rooms, consolidate KEC sessions.
///
/// `fallback_date` stands in for records without a readable date.
pub fn normalize_events(
    records: Vec<RawEventItem>,
    fallback_date: NaiveDate,
) -> Result<PipelineOutput, PipelineError> {
    let raw_records = records.len();
    let survivors = filter_records(records);
    let dropped_records = raw_records - survivors.len();

    let assembled = EventAssembler::new(fallback_date).assemble_all(survivors)?;
    let assembled_events = assembled.len();

    let (merged, room_merges) = merge_adjacent_rooms(assembled);
    let (events, counts) = consolidate_sessions(merged);

    let stats = PipelineStats {
        raw_records,
        dropped_records,
        assembled_events,
        room_merges,
        session_merges: counts.groups_merged,
        discarded_events: counts.discarded,
        finalized_events: events.len(),
    };
    debug!(?stats, "pipeline finished");
    Ok(PipelineOutput { events, stats })
}
