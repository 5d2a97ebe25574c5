//! A command's working set: the open store plus the hydrated state.

use crate::config::Config;
use crate::core::state::AppState;
use crate::db::initialize::open_db;
use crate::db::log::audit;
use crate::db::store::Store;
use crate::errors::AppResult;

pub struct Session {
    pub store: Store,
    pub state: AppState,
}

impl Session {
    /// Open the configured database and hydrate the state from it.
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let pool = open_db(&cfg.database)?;
        Self::from_store(Store::new(pool))
    }

    pub fn from_store(store: Store) -> AppResult<Self> {
        let state = AppState::load(&store)?;
        Ok(Self { store, state })
    }

    /// Persist the whole state and record the operation in the audit log.
    pub fn commit(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.state.persist(&self.store)?;
        audit(&self.store.pool.conn, operation, target, message)?;
        Ok(())
    }
}
