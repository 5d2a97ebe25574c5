//! Calendar widget: a month cursor plus per-day marks.

use crate::core::state::AppState;
use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::models::{CalendarMark, MarkType};
use crate::utils::date;
use chrono::{Datelike, NaiveDate};

/// Store key holding the displayed month. Not part of the exported state.
pub const KEY_CURSOR: &str = "ui.calendarMonth";

/// The month currently displayed by the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCursor {
    pub year: i32,
    pub month: u32,
}

impl CalendarCursor {
    pub fn new(year: i32, month: u32) -> AppResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(AppError::InvalidMonth(format!("{year}-{month:02}")));
        }
        Ok(Self { year, month })
    }

    pub fn current() -> Self {
        let today = date::today();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Parse `YYYY-MM`.
    pub fn parse(s: &str) -> AppResult<Self> {
        let first = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
            .map_err(|_| AppError::InvalidMonth(s.to_string()))?;
        Ok(Self {
            year: first.year(),
            month: first.month(),
        })
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn label(&self) -> String {
        format!("{}-{:02}", self.year, self.month)
    }

    pub fn days(&self) -> Vec<NaiveDate> {
        date::all_days_of_month(self.year, self.month)
    }

    /// Number of blank cells before day 1 in a Monday-first grid.
    pub fn leading_blanks(&self) -> usize {
        self.days()
            .first()
            .map(|d| d.weekday().num_days_from_monday() as usize)
            .unwrap_or(0)
    }

    /// Saved cursor, or the current month when nothing (valid) is stored.
    pub fn load(store: &Store) -> AppResult<Self> {
        let saved: Option<String> = store.get(KEY_CURSOR, None)?;
        Ok(saved
            .and_then(|s| Self::parse(&s).ok())
            .unwrap_or_else(Self::current))
    }

    pub fn save(&self, store: &Store) -> AppResult<()> {
        store.set(KEY_CURSOR, &self.label())
    }
}

pub struct CalendarLogic;

impl CalendarLogic {
    pub fn mark(state: &mut AppState, date: NaiveDate, kind: MarkType) {
        state.calendar_marks.add(CalendarMark::new(date, kind));
    }

    /// Remove every mark equal to (date, kind); `NotFound` when there was none.
    pub fn unmark(state: &mut AppState, date: NaiveDate, kind: MarkType) -> AppResult<usize> {
        let removed = state.calendar_marks.remove_exact(date, kind);
        if removed == 0 {
            return Err(AppError::not_found(
                "calendar mark",
                &format!("{}|{}", date.format("%Y-%m-%d"), kind.as_str()),
            ));
        }
        Ok(removed)
    }

    pub fn marks_on(state: &AppState, date: NaiveDate) -> Vec<&CalendarMark> {
        state.calendar_marks.on(date)
    }
}
