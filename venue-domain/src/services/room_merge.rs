use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use tracing::debug;

use crate::entities::Event;
use crate::value_objects::{ClockTime, ADJACENT_ROOM_PAIRS};

type SessionKey<'a> = (NaiveDate, &'a str, ClockTime);

/// Collapses one session booked across both halves of an adjacent room pair.
///
/// Events are grouped by date, name and start time. Inside a group each pair
/// merges at most once; the merged event is a copy of the pair's first room,
/// relabelled, and sits where that event was. Returns the events and the
/// number of merges performed.
pub fn merge_adjacent_rooms(events: Vec<Event>) -> (Vec<Event>, usize) {
    let (relabel, consumed) = plan_room_merges(&events);
    let merges = relabel.len();

    let merged = events
        .into_iter()
        .enumerate()
        .filter(|(index, _)| !consumed.contains(index))
        .map(|(index, event)| match relabel.get(&index) {
            Some(label) => event.with_room_name(label),
            None => event,
        })
        .collect::<Vec<_>>();

    if merges > 0 {
        debug!("merged {} adjacent room pairs", merges);
    }
    (merged, merges)
}

fn plan_room_merges(events: &[Event]) -> (HashMap<usize, &'static str>, HashSet<usize>) {
    let mut groups: HashMap<SessionKey<'_>, Vec<usize>> = HashMap::new();
    for (index, event) in events.iter().enumerate() {
        groups
            .entry((event.date, event.event_name.as_str(), event.start_time))
            .or_default()
            .push(index);
    }

    let mut relabel = HashMap::new();
    let mut consumed = HashSet::new();
    for members in groups.values().filter(|members| members.len() > 1) {
        for (first, second, merged) in ADJACENT_ROOM_PAIRS {
            let find = |room: &str| {
                members
                    .iter()
                    .copied()
                    .find(|index| events[*index].room_name.as_deref() == Some(room))
            };
            if let (Some(keep), Some(drop)) = (find(first), find(second)) {
                relabel.insert(keep, merged);
                consumed.insert(drop);
            }
        }
    }
    (relabel, consumed)
}
