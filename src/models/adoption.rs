use super::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdoptionStatus {
    Pending,
    Approved,
    Rejected,
}

impl AdoptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdoptionStatus::Pending => "pending",
            AdoptionStatus::Approved => "approved",
            AdoptionStatus::Rejected => "rejected",
        }
    }

    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Some(AdoptionStatus::Pending),
            "approved" => Some(AdoptionStatus::Approved),
            "rejected" => Some(AdoptionStatus::Rejected),
            _ => None,
        }
    }
}

/// Filter used by the adoption table (`all` or a single status).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdoptionFilter {
    #[default]
    All,
    Only(AdoptionStatus),
}

impl AdoptionFilter {
    pub fn from_code(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Some(AdoptionFilter::All);
        }
        AdoptionStatus::from_code(s).map(AdoptionFilter::Only)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AdoptionFilter::All => "all",
            AdoptionFilter::Only(s) => s.as_str(),
        }
    }

    pub fn matches(&self, adoption: &Adoption) -> bool {
        match self {
            AdoptionFilter::All => true,
            AdoptionFilter::Only(s) => adoption.status == *s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adoption {
    pub id: String,
    pub applicant: String,
    pub animal: String,
    pub submitted: NaiveDate,
    pub status: AdoptionStatus,
}

impl Adoption {
    /// New applications always start as `pending`.
    pub fn new(id: String, applicant: String, animal: String, submitted: NaiveDate) -> Self {
        Self {
            id,
            applicant,
            animal,
            submitted,
            status: AdoptionStatus::Pending,
        }
    }
}

impl Record for Adoption {
    const KIND: &'static str = "adoption";

    fn id(&self) -> &str {
        &self.id
    }
}
