use super::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A public event (vaccination drive, adoption day, ...).
/// `location` and `desc` are optional and stored as empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub desc: String,
}

impl Event {
    pub fn location_or_tba(&self) -> &str {
        if self.location.trim().is_empty() {
            "TBA"
        } else {
            &self.location
        }
    }
}

impl Record for Event {
    const KIND: &'static str = "event";

    fn id(&self) -> &str {
        &self.id
    }
}
