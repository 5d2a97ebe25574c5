//! Persistent key/value store.
//!
//! Values are stored as JSON text in the `kv` table. Reading is forgiving:
//! a missing key, a JSON `null` or a value that no longer parses as the
//! requested type all yield the caller's fallback.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use rusqlite::{OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub struct Store {
    pub pool: DbPool,
}

impl Store {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Raw JSON text stored under `key`, if any.
    pub fn get_raw(&self, key: &str) -> AppResult<Option<String>> {
        let raw = self
            .pool
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(raw)
    }

    /// Parsed value for `key`, or `fallback` when absent or unparseable.
    pub fn get<T: DeserializeOwned>(&self, key: &str, fallback: T) -> AppResult<T> {
        let Some(raw) = self.get_raw(key)? else {
            return Ok(fallback);
        };

        match serde_json::from_str::<Option<T>>(&raw) {
            Ok(Some(v)) => Ok(v),
            _ => Ok(fallback),
        }
    }

    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> AppResult<()> {
        let json = serde_json::to_string(value)?;
        self.pool.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, json],
        )?;
        Ok(())
    }

    /// Remove every key.
    pub fn clear(&self) -> AppResult<()> {
        self.pool.conn.execute("DELETE FROM kv", [])?;
        Ok(())
    }

    pub fn keys(&self) -> AppResult<Vec<String>> {
        let mut stmt = self.pool.conn.prepare("SELECT key FROM kv ORDER BY key ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}
