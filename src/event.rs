use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

/// When something happens, as precisely as the page says.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventTime {
    At(NaiveDateTime),
    AllDay(NaiveDate),
}

impl EventTime {
    pub fn day(&self) -> NaiveDate {
        match self {
            Self::At(at) => at.date(),
            Self::AllDay(day) => *day,
        }
    }

    /// The point in time used for ordering; all-day entries sit at midnight.
    pub fn naive(&self) -> NaiveDateTime {
        match self {
            Self::At(at) => *at,
            Self::AllDay(day) => day.and_time(NaiveTime::MIN),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub start: EventTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<EventTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Event {
    pub fn day(&self) -> NaiveDate {
        self.start.day()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Cancelled,
    Postponed,
}

impl Status {
    pub(crate) fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "cancelled" | "canceled" => Some(Self::Cancelled),
            "postponed" => Some(Self::Postponed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub team: String,
    pub start: EventTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opponent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Practice {
    pub team: String,
    pub start: EventTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AthleticsCalendar {
    pub games: Vec<Game>,
    pub practices: Vec<Practice>,
}

/// Team names grouped by season, in the order the page lists them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Teams(pub Vec<(String, Vec<String>)>);

impl Teams {
    pub fn season(&self, name: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(season, _)| season == name)
            .map(|(_, teams)| teams.as_slice())
    }
}

impl Serialize for Teams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (season, teams) in &self.0 {
            map.serialize_entry(season, teams)?;
        }
        map.end()
    }
}
