//! Ordered, id-keyed record collections.

use crate::errors::{AppError, AppResult};
use crate::models::id::unique_uid;
use crate::models::{CalendarMark, MarkType, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// An ordered list of records of one kind, persisted as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Record> Collection<T> {
    pub fn from_vec(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Fresh id not used by any record currently in the collection.
    pub fn next_id(&self) -> String {
        unique_uid(self.items.iter().map(|r| r.id()))
    }

    /// Append a record and return its id.
    pub fn append(&mut self, record: T) -> String {
        let id = record.id().to_string();
        self.items.push(record);
        id
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|r| r.id() == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut T> {
        self.items.iter_mut().find(|r| r.id() == id)
    }

    /// Apply `f` to the record with the given id, in place.
    pub fn update<F>(&mut self, id: &str, f: F) -> AppResult<()>
    where
        F: FnOnce(&mut T),
    {
        let record = self
            .find_mut(id)
            .ok_or_else(|| AppError::not_found(T::KIND, id))?;
        f(record);
        Ok(())
    }

    /// Remove the record with the given id and return it.
    pub fn remove(&mut self, id: &str) -> AppResult<T> {
        let pos = self
            .items
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| AppError::not_found(T::KIND, id))?;
        Ok(self.items.remove(pos))
    }

    pub fn list<P>(&self, pred: P) -> Vec<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.items.iter().filter(|r| pred(r)).collect()
    }

    /// All records sorted with `cmp`; the stored order is left untouched.
    pub fn sorted_by<C>(&self, cmp: C) -> Vec<&T>
    where
        C: Fn(&T, &T) -> Ordering,
    {
        let mut out: Vec<&T> = self.items.iter().collect();
        out.sort_by(|a, b| cmp(a, b));
        out
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Calendar marks have no id: they are addressed by (date, type).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarMarks {
    items: Vec<CalendarMark>,
}

impl CalendarMarks {
    pub fn from_vec(items: Vec<CalendarMark>) -> Self {
        Self { items }
    }

    pub fn add(&mut self, mark: CalendarMark) {
        self.items.push(mark);
    }

    /// Marks stored for `date`, in insertion order.
    pub fn on(&self, date: NaiveDate) -> Vec<&CalendarMark> {
        self.items.iter().filter(|m| m.date == date).collect()
    }

    /// Remove every mark equal to (date, kind). Returns how many were removed.
    pub fn remove_exact(&mut self, date: NaiveDate, kind: MarkType) -> usize {
        let before = self.items.len();
        self.items.retain(|m| !m.matches(date, kind));
        before - self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CalendarMark> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
