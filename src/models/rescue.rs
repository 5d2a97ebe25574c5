use super::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RescueStatus {
    Urgent,
    InProgress,
    Resolved,
}

impl RescueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RescueStatus::Urgent => "urgent",
            RescueStatus::InProgress => "in-progress",
            RescueStatus::Resolved => "resolved",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rescue {
    pub id: String,
    pub reporter: String,
    pub location: String,
    pub date: NaiveDate,
    pub status: RescueStatus,
}

impl Rescue {
    /// Freshly reported rescues are `urgent`.
    pub fn new(id: String, reporter: String, location: String, date: NaiveDate) -> Self {
        Self {
            id,
            reporter,
            location,
            date,
            status: RescueStatus::Urgent,
        }
    }
}

impl Record for Rescue {
    const KIND: &'static str = "rescue";

    fn id(&self) -> &str {
        &self.id
    }
}
