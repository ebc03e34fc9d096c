// Event category value object

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventCategory {
    /// Executive-education program bookings.
    Kec,
    /// Conference and meeting center bookings.
    Cmc,
    Other(String),
}

impl EventCategory {
    pub fn as_str(&self) -> &str {
        match self {
            EventCategory::Kec => "KEC",
            EventCategory::Cmc => "CMC",
            EventCategory::Other(value) => value,
        }
    }
}

impl From<&str> for EventCategory {
    fn from(s: &str) -> Self {
        match s.trim() {
            "KEC" => EventCategory::Kec,
            "CMC" => EventCategory::Cmc,
            other => EventCategory::Other(other.to_string()),
        }
    }
}

impl From<String> for EventCategory {
    fn from(s: String) -> Self {
        EventCategory::from(s.as_str())
    }
}

impl From<EventCategory> for String {
    fn from(category: EventCategory) -> Self {
        category.as_str().to_string()
    }
}
