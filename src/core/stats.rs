//! Aggregates recomputed from scratch by the derived renderers.

use crate::core::state::AppState;
use chrono::Datelike;
use std::collections::BTreeMap;

pub fn donation_total(state: &AppState) -> f64 {
    state.donations.iter().map(|d| d.amount).sum()
}

/// Donation count per `YYYY-MM`.
pub fn group_by_month(state: &AppState) -> BTreeMap<String, usize> {
    let mut acc = BTreeMap::new();
    for d in state.donations.iter() {
        *acc.entry(d.date.format("%Y-%m").to_string()).or_insert(0) += 1;
    }
    acc
}

pub fn months_active(state: &AppState) -> usize {
    group_by_month(state).len()
}

/// Adoption count per submitted year, ascending.
pub fn adoptions_by_year(state: &AppState) -> BTreeMap<i32, u32> {
    let mut acc = BTreeMap::new();
    for a in state.adoptions.iter() {
        *acc.entry(a.submitted.year()).or_insert(0) += 1;
    }
    acc
}

/// Adoption count per month (index 0 = January) for `year`.
pub fn adoptions_by_month(state: &AppState, year: i32) -> [u32; 12] {
    let mut months = [0u32; 12];
    for a in state.adoptions.iter().filter(|a| a.submitted.year() == year) {
        if let Some(slot) = months.get_mut(a.submitted.month0() as usize) {
            *slot += 1;
        }
    }
    months
}
