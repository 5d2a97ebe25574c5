use crate::config::Config;
use crate::core::AppState;
use crate::core::calendar::CalendarCursor;
use crate::models::{AdoptionFilter, AdoptionStatus};
use crate::render::charts::{chart_by_month, chart_by_year};
use crate::render::tables::{adoptions, donation_stats, donations, events, rescues};
use crate::render::calendar::calendar;
use crate::ui::messages::section_title;
use crate::utils::colors::dim;
use crate::utils::date::{iso, today};
use chrono::Datelike;
use crate::utils::format_money;

/// Due items; ids listed in `done` are dimmed (display only).
pub fn dues(state: &AppState, done: &[String]) -> String {
    let mut out = section_title("Due");
    out.push('\n');

    if state.dues.is_empty() {
        out.push_str("  (nothing due)\n");
        return out;
    }

    for item in state.dues.iter() {
        let line = format!("  {:<40} [{}]", item.text, item.id);
        if done.iter().any(|d| d == &item.id) {
            out.push_str(&dim(&line));
        } else {
            out.push_str(&line);
        }
        out.push('\n');
    }
    out
}

/// The first `limit` events by date.
pub fn events_mini(state: &AppState, limit: usize) -> String {
    let mut out = section_title("Upcoming events");
    out.push('\n');

    for ev in state
        .events
        .sorted_by(|a, b| a.date.cmp(&b.date))
        .into_iter()
        .take(limit)
    {
        out.push_str(&format!("  {:<32} {}\n", ev.title, iso(ev.date)));
    }
    out
}

/// Recent donors and recent donations, newest first.
pub fn donations_mini(state: &AppState, limit: usize, currency: &str) -> String {
    let recent: Vec<_> = state
        .donations
        .sorted_by(|a, b| b.date.cmp(&a.date))
        .into_iter()
        .take(limit)
        .collect();

    let mut out = section_title("Recent donors");
    out.push('\n');
    for d in &recent {
        out.push_str(&format!(
            "  {:<24} {}\n",
            d.donor,
            format_money(currency, d.amount)
        ));
    }

    out.push_str(&section_title("Recent donations"));
    out.push('\n');
    for d in &recent {
        out.push_str(&format!(
            "  {:<24} {}\n",
            iso(d.date),
            format_money(currency, d.amount)
        ));
    }
    out
}

/// Pending applications awaiting review, in submission order.
pub fn adoption_queue(state: &AppState, limit: usize) -> String {
    let mut out = section_title("Adoption queue");
    out.push('\n');

    for a in state
        .adoptions
        .list(|a| a.status == AdoptionStatus::Pending)
        .into_iter()
        .take(limit)
    {
        out.push_str(&format!(
            "  {} • {:<28} {}\n",
            a.applicant,
            a.animal,
            iso(a.submitted)
        ));
    }
    out
}

/// Full dashboard page.
pub fn dashboard(state: &AppState, cfg: &Config, cursor: CalendarCursor) -> String {
    [
        dues(state, &[]),
        calendar(state, cursor),
        events_mini(state, cfg.dashboard_limit),
        donations_mini(state, cfg.dashboard_limit, &cfg.currency_symbol),
        adoption_queue(state, cfg.queue_limit),
    ]
    .join("\n")
}

/// Every view, in page order. Used after bulk replacements (seed, import).
pub fn all(
    state: &AppState,
    cfg: &Config,
    cursor: CalendarCursor,
    filter: AdoptionFilter,
) -> String {
    let currency = cfg.currency_symbol.as_str();
    [
        dashboard(state, cfg, cursor),
        adoptions(state, filter),
        rescues(state),
        donations(state, currency),
        donation_stats(state, currency),
        events(state),
        chart_by_year(state),
        chart_by_month(state, today().year()),
    ]
    .join("\n")
}
