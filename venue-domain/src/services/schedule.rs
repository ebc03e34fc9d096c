// Clock time and calendar date normalization.

use chrono::NaiveDate;
use tracing::warn;

use crate::utils::{date_portion, parse_date};
use crate::value_objects::ClockTime;

const HOURS_PER_DAY: f64 = 24.0;

/// `13.5` -> 13:30:00. Minutes are rounded, seconds are always zero, and the
/// result is clamped into one day; `24.0` is the end of the day, 24:00:00.
pub fn decimal_hours_to_time(hours: f64) -> ClockTime {
    let hours = if hours.is_finite() {
        hours.clamp(0.0, HOURS_PER_DAY)
    } else {
        0.0
    };
    let whole = hours.trunc();
    let minutes = ((hours - whole) * 60.0).round();
    ClockTime::from_minutes(whole as i64 * 60 + minutes as i64)
}

/// Date part of `subjectItemDate`. A missing or unreadable date falls back to
/// `fallback`, which callers set to the current day.
pub fn resolve_event_date(subject_item_date: Option<&str>, fallback: NaiveDate) -> NaiveDate {
    match subject_item_date.map(date_portion) {
        Some(value) if !value.is_empty() => match parse_date(value) {
            Ok(date) => date,
            Err(err) => {
                warn!("unreadable event date '{}', using {}: {}", value, fallback, err);
                fallback
            }
        },
        _ => {
            warn!("event date missing, using {}", fallback);
            fallback
        }
    }
}
