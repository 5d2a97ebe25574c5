use crate::core::AppState;
use crate::core::stats::{adoptions_by_month, adoptions_by_year};
use crate::ui::messages::section_title;
use crate::utils::date::MONTH_LABELS;

const BAR_WIDTH: u32 = 30;

fn bar(value: u32, max: u32) -> String {
    if max == 0 || value == 0 {
        return String::new();
    }
    let len = ((value * BAR_WIDTH) / max).max(1);
    "█".repeat(len as usize)
}

/// Adoptions per submitted year (line chart in the browser, bars here).
pub fn chart_by_year(state: &AppState) -> String {
    let mut out = section_title("Adoptions by year");
    out.push('\n');

    let by_year = adoptions_by_year(state);
    if by_year.is_empty() {
        out.push_str("  (no adoptions)\n");
        return out;
    }

    let max = by_year.values().copied().max().unwrap_or(0);
    for (year, count) in &by_year {
        out.push_str(&format!("  {} │{} {}\n", year, bar(*count, max), count));
    }
    out
}

/// Adoptions per month of `year`, January to December.
pub fn chart_by_month(state: &AppState, year: i32) -> String {
    let mut out = section_title(format!("Adoptions by month ({year})"));
    out.push('\n');

    let months = adoptions_by_month(state, year);
    let max = months.iter().copied().max().unwrap_or(0);
    for (label, count) in MONTH_LABELS.iter().zip(months.iter()) {
        out.push_str(&format!("  {} │{} {}\n", label, bar(*count, max), count));
    }
    out
}
