use crate::core::AppState;
use crate::core::stats::{donation_total, months_active};
use crate::models::AdoptionFilter;
use crate::ui::messages::section_title;
use crate::utils::date::iso;
use crate::utils::format_money;
use crate::utils::table::{Column, Table};

fn empty_hint(out: &mut String, what: &str) {
    out.push_str(&format!("  (no {what})\n"));
}

pub fn adoptions(state: &AppState, filter: AdoptionFilter) -> String {
    let mut out = section_title(format!("Adoptions [{}]", filter.as_str()));
    out.push('\n');

    let rows: Vec<_> = state.adoptions.list(|a| filter.matches(a));
    if rows.is_empty() {
        empty_hint(&mut out, "adoption applications");
        return out;
    }

    let mut table = Table::new(vec![
        Column::new("APPLICANT", 22),
        Column::new("ANIMAL", 20),
        Column::new("SUBMITTED", 10),
        Column::new("STATUS", 9),
        Column::new("ID", 7),
    ]);
    for a in rows {
        table.add_row(vec![
            a.applicant.clone(),
            a.animal.clone(),
            iso(a.submitted),
            a.status.as_str().to_string(),
            a.id.clone(),
        ]);
    }
    out.push_str(&table.render());
    out
}

pub fn rescues(state: &AppState) -> String {
    let mut out = section_title("Rescues");
    out.push('\n');

    if state.rescues.is_empty() {
        empty_hint(&mut out, "rescue reports");
        return out;
    }

    let mut table = Table::new(vec![
        Column::new("REPORTER", 20),
        Column::new("LOCATION", 18),
        Column::new("DATE", 10),
        Column::new("STATUS", 11),
        Column::new("ID", 7),
    ]);
    for r in state.rescues.iter() {
        table.add_row(vec![
            r.reporter.clone(),
            r.location.clone(),
            iso(r.date),
            r.status.as_str().to_string(),
            r.id.clone(),
        ]);
    }
    out.push_str(&table.render());
    out
}

/// Donations, newest first.
pub fn donations(state: &AppState, currency: &str) -> String {
    let mut out = section_title("Donations");
    out.push('\n');

    if state.donations.is_empty() {
        empty_hint(&mut out, "donations");
        return out;
    }

    let mut table = Table::new(vec![
        Column::new("DONOR", 20),
        Column::new("AMOUNT", 12),
        Column::new("CHANNEL", 7),
        Column::new("DATE", 10),
        Column::new("ID", 7),
    ]);
    for d in state.donations.sorted_by(|a, b| b.date.cmp(&a.date)) {
        table.add_row(vec![
            d.donor.clone(),
            format_money(currency, d.amount),
            d.channel.as_str().to_string(),
            iso(d.date),
            d.id.clone(),
        ]);
    }
    out.push_str(&table.render());
    out
}

pub fn donation_stats(state: &AppState, currency: &str) -> String {
    format!(
        "{}\n  Total:         {}\n  Donations:     {}\n  Months active: {}\n",
        section_title("Donation statistics"),
        format_money(currency, donation_total(state)),
        state.donations.len(),
        months_active(state)
    )
}

/// Event cards, soonest first.
pub fn events(state: &AppState) -> String {
    let mut out = section_title("Events");
    out.push('\n');

    if state.events.is_empty() {
        empty_hint(&mut out, "events");
        return out;
    }

    for ev in state.events.sorted_by(|a, b| a.date.cmp(&b.date)) {
        out.push_str(&format!("• {}  [{}]\n", ev.title, ev.id));
        out.push_str(&format!("    {} • {}\n", iso(ev.date), ev.location_or_tba()));
        if !ev.desc.is_empty() {
            for line in textwrap::wrap(&ev.desc, 68) {
                out.push_str(&format!("    {}\n", line));
            }
        }
    }
    out
}
