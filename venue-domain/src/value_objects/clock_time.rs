// Clock time value object
// Minute resolution within one booking day, 00:00 through 24:00 inclusive.
// 24:00 marks a booking that runs up to midnight.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    minutes: u32,
}

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime { minutes: 0 };
    pub const END_OF_DAY: ClockTime = ClockTime {
        minutes: MINUTES_PER_DAY,
    };

    /// Clamped into `00:00..=24:00`.
    pub fn from_minutes(minutes: i64) -> Self {
        Self {
            minutes: minutes.clamp(0, i64::from(MINUTES_PER_DAY)) as u32,
        }
    }

    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        let minutes = hour.checked_mul(60)?.checked_add(minute)?;
        (minute < 60 && minutes <= MINUTES_PER_DAY).then_some(Self { minutes })
    }

    pub fn minutes(self) -> u32 {
        self.minutes
    }

    pub fn hour(self) -> u32 {
        self.minutes / 60
    }

    pub fn minute(self) -> u32 {
        self.minutes % 60
    }

    /// Signed distance from `earlier`; negative when `earlier` is later.
    pub fn seconds_since(self, earlier: ClockTime) -> i64 {
        (i64::from(self.minutes) - i64::from(earlier.minutes)) * 60
    }

    /// `None` once the result would pass the end of the day.
    pub fn plus_minutes(self, minutes: u32) -> Option<Self> {
        let total = self.minutes.checked_add(minutes)?;
        (total <= MINUTES_PER_DAY).then_some(Self { minutes: total })
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:00", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = PipelineError;

    /// Accepts `HH:MM` or `HH:MM:SS` with zero seconds.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PipelineError::InvalidInput(format!("invalid clock time '{}'", s));
        let mut parts = s.trim().split(':');
        let mut field = || parts.next().and_then(|part| part.parse::<u32>().ok());

        let hour = field().ok_or_else(invalid)?;
        let minute = field().ok_or_else(invalid)?;
        let rest: Vec<&str> = parts.collect();
        match rest.as_slice() {
            [] => {}
            [seconds] if seconds.parse::<u32>() == Ok(0) => {}
            _ => return Err(invalid()),
        }
        Self::from_hm(hour, minute).ok_or_else(invalid)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = PipelineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_of_day_renders_as_twenty_four() {
        assert_eq!(ClockTime::END_OF_DAY.to_string(), "24:00:00");
        assert_eq!(ClockTime::MIDNIGHT.to_string(), "00:00:00");
        assert_eq!(ClockTime::from_minutes(13 * 60 + 5).to_string(), "13:05:00");
    }

    #[test]
    fn from_minutes_clamps_into_the_day() {
        assert_eq!(ClockTime::from_minutes(-30), ClockTime::MIDNIGHT);
        assert_eq!(ClockTime::from_minutes(i64::MAX), ClockTime::END_OF_DAY);
    }

    #[test]
    fn parse_accepts_clock_forms() {
        assert_eq!("09:30:00".parse::<ClockTime>(), Ok(ClockTime::from_minutes(570)));
        assert_eq!("9:30".parse::<ClockTime>(), Ok(ClockTime::from_minutes(570)));
        assert_eq!("24:00:00".parse::<ClockTime>(), Ok(ClockTime::END_OF_DAY));
    }

    #[test]
    fn parse_rejects_out_of_range_and_seconds() {
        for bad in ["24:01:00", "10:60:00", "10:00:30", "10", "ab:00", "10:00:00:00", ""] {
            assert!(bad.parse::<ClockTime>().is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn distance_covers_the_midnight_end() {
        let start = ClockTime::from_minutes(23 * 60);
        assert_eq!(ClockTime::END_OF_DAY.seconds_since(start), 3600);
        assert_eq!(start.seconds_since(ClockTime::END_OF_DAY), -3600);
    }

    #[test]
    fn plus_minutes_stops_at_end_of_day() {
        let late = ClockTime::from_minutes(23 * 60 + 30);
        assert_eq!(late.plus_minutes(30), Some(ClockTime::END_OF_DAY));
        assert_eq!(late.plus_minutes(31), None);
        assert_eq!(late.plus_minutes(u32::MAX), None);
    }

    #[test]
    fn serializes_as_clock_string() {
        let time = ClockTime::from_minutes(9 * 60);
        let encoded = serde_json::to_value(time).expect("encode");
        assert_eq!(encoded, serde_json::json!("09:00:00"));
        let decoded: ClockTime = serde_json::from_value(encoded).expect("decode");
        assert_eq!(decoded, time);
        assert!(serde_json::from_value::<ClockTime>(serde_json::json!("25:00:00")).is_err());
    }
}
