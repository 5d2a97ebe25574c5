//! In-memory application state and its persistence.

use crate::core::collection::{CalendarMarks, Collection};
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::models::{Adoption, Donation, Due, Event, Rescue};
use serde::{Deserialize, Serialize};

pub const KEY_ADOPTIONS: &str = "adoptions";
pub const KEY_RESCUES: &str = "rescues";
pub const KEY_DONATIONS: &str = "donations";
pub const KEY_EVENTS: &str = "events";
pub const KEY_DUES: &str = "dues";
pub const KEY_CALENDAR_MARKS: &str = "calendarMarks";

/// The six collections managed by the dashboard.
///
/// The serialized shape (six top-level keys) is both the persisted layout
/// and the export/import file format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub adoptions: Collection<Adoption>,
    pub rescues: Collection<Rescue>,
    pub donations: Collection<Donation>,
    pub events: Collection<Event>,
    pub dues: Collection<Due>,
    #[serde(rename = "calendarMarks")]
    pub calendar_marks: CalendarMarks,
}

impl AppState {
    /// Hydrate every collection from the store, one key per collection.
    pub fn load(store: &Store) -> AppResult<Self> {
        Ok(Self {
            adoptions: store.get(KEY_ADOPTIONS, Collection::default())?,
            rescues: store.get(KEY_RESCUES, Collection::default())?,
            donations: store.get(KEY_DONATIONS, Collection::default())?,
            events: store.get(KEY_EVENTS, Collection::default())?,
            dues: store.get(KEY_DUES, Collection::default())?,
            calendar_marks: store.get(KEY_CALENDAR_MARKS, CalendarMarks::default())?,
        })
    }

    /// Write all six collections back. Always a full rewrite.
    pub fn persist(&self, store: &Store) -> AppResult<()> {
        store.pool.conn.execute_batch("BEGIN;")?;

        let result = self.write_all(store);

        match result {
            Ok(()) => {
                store.pool.conn.execute_batch("COMMIT;")?;
                Ok(())
            }
            Err(e) => {
                let _ = store.pool.conn.execute_batch("ROLLBACK;");
                Err(e)
            }
        }
    }

    fn write_all(&self, store: &Store) -> AppResult<()> {
        store.set(KEY_ADOPTIONS, &self.adoptions)?;
        store.set(KEY_RESCUES, &self.rescues)?;
        store.set(KEY_DONATIONS, &self.donations)?;
        store.set(KEY_EVENTS, &self.events)?;
        store.set(KEY_DUES, &self.dues)?;
        store.set(KEY_CALENDAR_MARKS, &self.calendar_marks)?;
        Ok(())
    }
}
