use super::Record;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum Channel {
    #[default]
    #[serde(rename = "GCash")]
    #[value(name = "gcash")]
    GCash,
    Bank,
    Cash,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::GCash => "GCash",
            Channel::Bank => "Bank",
            Channel::Cash => "Cash",
        }
    }

    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "gcash" => Some(Channel::GCash),
            "bank" => Some(Channel::Bank),
            "cash" => Some(Channel::Cash),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    pub id: String,
    pub donor: String,
    pub amount: f64,
    pub channel: Channel,
    pub date: NaiveDate,
}

impl Record for Donation {
    const KIND: &'static str = "donation";

    fn id(&self) -> &str {
        &self.id
    }
}
