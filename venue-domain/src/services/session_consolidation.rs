use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use tracing::debug;

use crate::entities::Event;
use crate::services::{extract_session_kind, KEC_SESSION_KINDS};
use crate::value_objects::ClockTime;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConsolidationCounts {
    /// Groups of two or more KEC sessions collapsed into one event.
    pub groups_merged: usize,
    /// KEC events dropped because their detail is not a class session.
    pub discarded: usize,
}

struct MergedSpan {
    start_time: ClockTime,
    end_time: ClockTime,
}

/// Collapses KEC sessions sharing a date and room into one event spanning the
/// earliest start to the latest end (events without a room share the absent
/// room), then keeps only KEC events whose detail
/// panel marks them as an academic or class session. Non-KEC events pass
/// through untouched.
pub fn consolidate_sessions(events: Vec<Event>) -> (Vec<Event>, ConsolidationCounts) {
    let (spans, absorbed) = plan_consolidation(&events);
    let mut counts = ConsolidationCounts {
        groups_merged: spans.len(),
        discarded: 0,
    };

    let mut output = Vec::with_capacity(events.len() - absorbed.len());
    for (index, event) in events.into_iter().enumerate() {
        if !event.is_kec() {
            output.push(event);
            continue;
        }
        if absorbed.contains(&index) {
            continue;
        }
        let event = match spans.get(&index) {
            Some(span) => Event {
                start_time: span.start_time,
                end_time: span.end_time,
                instructor_names: None,
                resources: Vec::new(),
                ..event
            },
            None => event,
        };
        if is_class_session(&event) {
            output.push(event);
        } else {
            counts.discarded += 1;
        }
    }

    debug!(
        "consolidated {} KEC session groups, discarded {} KEC events",
        counts.groups_merged, counts.discarded
    );
    (output, counts)
}

fn plan_consolidation(events: &[Event]) -> (HashMap<usize, MergedSpan>, HashSet<usize>) {
    let mut groups: HashMap<(NaiveDate, Option<&str>), Vec<usize>> = HashMap::new();
    for (index, event) in events.iter().enumerate() {
        if event.is_kec() {
            groups
                .entry((event.date, event.room_name.as_deref()))
                .or_default()
                .push(index);
        }
    }

    let mut spans = HashMap::new();
    let mut absorbed = HashSet::new();
    for members in groups.into_values().filter(|members| members.len() > 1) {
        let start_time = members.iter().map(|i| events[*i].start_time).min();
        let end_time = members.iter().map(|i| events[*i].end_time).max();
        if let (Some(start_time), Some(end_time)) = (start_time, end_time) {
            spans.insert(members[0], MergedSpan { start_time, end_time });
            absorbed.extend(members.into_iter().skip(1));
        }
    }
    (spans, absorbed)
}

fn is_class_session(event: &Event) -> bool {
    extract_session_kind(event.raw.panels())
        .map(|kind| KEC_SESSION_KINDS.contains(&kind.as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{event, kec_event, time};

    #[test]
    fn same_room_kec_sessions_collapse_into_one() {
        let events = vec![
            kec_event(1, "GH 1110", "09:00:00", "10:00:00", "Class Session"),
            kec_event(2, "GH 1110", "09:30:00", "10:30:00", "Class Session"),
            kec_event(3, "GH 1110", "10:00:00", "11:00:00", "Class Session"),
        ];
        let (output, counts) = consolidate_sessions(events);

        assert_eq!(counts.groups_merged, 1);
        assert_eq!(counts.discarded, 0);
        assert_eq!(output.len(), 1);
        let merged = &output[0];
        assert_eq!(merged.id, 1);
        assert_eq!(merged.start_time, time("09:00:00"));
        assert_eq!(merged.end_time, time("11:00:00"));
        assert_eq!(merged.instructor_names, None);
        assert!(merged.resources.is_empty());
    }

    #[test]
    fn single_session_keeps_its_details() {
        let events = vec![kec_event(1, "GH 1110", "09:00:00", "10:00:00", "Academic Session")];
        let (output, counts) = consolidate_sessions(events.clone());
        assert_eq!(counts, ConsolidationCounts::default());
        assert_eq!(output, events);
    }

    #[test]
    fn different_rooms_stay_separate() {
        let events = vec![
            kec_event(1, "GH 1110", "09:00:00", "10:00:00", "Class Session"),
            kec_event(2, "GH 1120", "09:00:00", "10:00:00", "Class Session"),
        ];
        let (output, counts) = consolidate_sessions(events);
        assert_eq!(counts.groups_merged, 0);
        assert_eq!(output.len(), 2);
    }

    #[test]
    fn room_less_sessions_on_one_day_collapse_together() {
        let roomless = |id: i64, start: &str, end: &str| Event {
            room_name: None,
            ..kec_event(id, "GH 1110", start, end, "Class Session")
        };
        let events = vec![
            roomless(1, "09:00:00", "10:00:00"),
            kec_event(2, "GH 1110", "09:00:00", "09:30:00", "Class Session"),
            roomless(3, "10:00:00", "11:00:00"),
        ];
        let (output, counts) = consolidate_sessions(events);

        assert_eq!(counts.groups_merged, 1);
        let rooms: Vec<Option<&str>> = output.iter().map(|e| e.room_name.as_deref()).collect();
        assert_eq!(rooms, vec![None, Some("GH 1110")]);
        assert_eq!(output[0].id, 1);
        assert_eq!(output[0].start_time, time("09:00:00"));
        assert_eq!(output[0].end_time, time("11:00:00"));
        assert_eq!(output[1].id, 2);
    }

    #[test]
    fn kec_events_without_class_session_are_discarded() {
        let events = vec![
            kec_event(1, "GH 1110", "09:00:00", "10:00:00", "Reception"),
            kec_event(2, "GH 1110", "12:00:00", "13:00:00", "Reception"),
            kec_event(3, "GH 1120", "09:00:00", "10:00:00", "Networking Dinner"),
        ];
        let (output, counts) = consolidate_sessions(events);
        assert!(output.is_empty());
        assert_eq!(counts.groups_merged, 1);
        assert_eq!(counts.discarded, 2);
    }

    #[test]
    fn non_kec_events_pass_through_in_place() {
        let events = vec![
            event(10, Some("GH 1110"), "08:00:00", "09:00:00"),
            kec_event(1, "GH 1110", "09:00:00", "10:00:00", "Class Session"),
            event(11, Some("GH 1110"), "08:30:00", "09:00:00"),
            kec_event(2, "GH 1110", "10:00:00", "11:00:00", "Class Session"),
        ];
        let (output, _) = consolidate_sessions(events);
        let ids: Vec<i64> = output.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![10, 1, 11]);
    }
}
