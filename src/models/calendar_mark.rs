use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MarkType {
    Rescue,
    Due,
    Event,
}

impl MarkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkType::Rescue => "rescue",
            MarkType::Due => "due",
            MarkType::Event => "event",
        }
    }

    /// One-letter badge used in the calendar grid.
    pub fn badge(&self) -> char {
        match self {
            MarkType::Rescue => 'R',
            MarkType::Due => 'D',
            MarkType::Event => 'E',
        }
    }
}

/// A badge on a calendar day. Keyed by (date, type); duplicates are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarMark {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: MarkType,
}

impl CalendarMark {
    pub fn new(date: NaiveDate, kind: MarkType) -> Self {
        Self { date, kind }
    }

    pub fn matches(&self, date: NaiveDate, kind: MarkType) -> bool {
        self.date == date && self.kind == kind
    }
}
