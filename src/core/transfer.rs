//! Whole-state export / import.

use crate::core::collection::{CalendarMarks, Collection};
use crate::core::state::AppState;
use crate::errors::{AppError, AppResult};
use crate::models::{Adoption, Donation, Due, Event, Rescue};
use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_EXPORT_FILE: &str = "taara-admin-data.json";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

/// Collections that can be exported one at a time (CSV).
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CollectionName {
    Adoptions,
    Rescues,
    Donations,
    Events,
    Dues,
    CalendarMarks,
}

/// Import file shape: every key optional, unknown keys ignored.
#[derive(Debug, Default, Deserialize)]
pub struct StateImport {
    pub adoptions: Option<Collection<Adoption>>,
    pub rescues: Option<Collection<Rescue>>,
    pub donations: Option<Collection<Donation>>,
    pub events: Option<Collection<Event>>,
    pub dues: Option<Collection<Due>>,
    #[serde(rename = "calendarMarks")]
    pub calendar_marks: Option<CalendarMarks>,
}

impl StateImport {
    pub fn parse(text: &str) -> AppResult<Self> {
        serde_json::from_str(text).map_err(|_| AppError::Import("Invalid JSON file".into()))
    }

    /// Shallow merge: keys present in the file replace whole collections,
    /// absent keys keep the current collection. Returns the replaced keys.
    pub fn merge_into(self, state: &mut AppState) -> Vec<&'static str> {
        let mut replaced = Vec::new();

        if let Some(v) = self.adoptions {
            state.adoptions = v;
            replaced.push("adoptions");
        }
        if let Some(v) = self.rescues {
            state.rescues = v;
            replaced.push("rescues");
        }
        if let Some(v) = self.donations {
            state.donations = v;
            replaced.push("donations");
        }
        if let Some(v) = self.events {
            state.events = v;
            replaced.push("events");
        }
        if let Some(v) = self.dues {
            state.dues = v;
            replaced.push("dues");
        }
        if let Some(v) = self.calendar_marks {
            state.calendar_marks = v;
            replaced.push("calendarMarks");
        }

        replaced
    }
}

pub fn to_json(state: &AppState) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(state)?)
}

pub fn write_json(path: &Path, state: &AppState) -> AppResult<()> {
    fs::write(path, to_json(state)?)?;
    Ok(())
}

/// Parse `path` and merge it into `state`. On any failure `state` is untouched.
pub fn import_file(path: &Path, state: &mut AppState) -> AppResult<Vec<&'static str>> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::InvalidData => AppError::Import("Invalid JSON file".into()),
        _ => AppError::Io(e),
    })?;
    let parsed = StateImport::parse(&text)?;
    Ok(parsed.merge_into(state))
}

fn write_rows<T: Serialize>(path: &Path, rows: impl Iterator<Item = T>) -> AppResult<usize> {
    let mut wtr = csv::Writer::from_path(path)?;
    let mut n = 0;
    for row in rows {
        wtr.serialize(row)?;
        n += 1;
    }
    wtr.flush()?;
    Ok(n)
}

/// Write one collection as CSV (header = field names). Returns the row count.
pub fn write_csv(path: &Path, state: &AppState, which: CollectionName) -> AppResult<usize> {
    match which {
        CollectionName::Adoptions => write_rows(path, state.adoptions.iter()),
        CollectionName::Rescues => write_rows(path, state.rescues.iter()),
        CollectionName::Donations => write_rows(path, state.donations.iter()),
        CollectionName::Events => write_rows(path, state.events.iter()),
        CollectionName::Dues => write_rows(path, state.dues.iter()),
        CollectionName::CalendarMarks => write_rows(path, state.calendar_marks.iter()),
    }
}
