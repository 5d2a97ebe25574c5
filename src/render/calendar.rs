use crate::core::AppState;
use crate::core::calendar::CalendarCursor;
use crate::ui::messages::section_title;
use crate::utils::colors::{color_for_mark, paint};
use chrono::{Datelike, NaiveDate};

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const CELL: usize = 6;

/// Monday-first month grid. Each day shows its number and one badge per mark
/// (R = rescue, D = due, E = event).
pub fn calendar(state: &AppState, cursor: CalendarCursor) -> String {
    let mut out = section_title(format!("Calendar {}", cursor.label()));
    out.push('\n');

    for wd in WEEKDAYS {
        out.push_str(&format!("{:<width$}", wd, width = CELL));
    }
    out.push('\n');

    let mut col = 0;
    for _ in 0..cursor.leading_blanks() {
        out.push_str(&" ".repeat(CELL));
        col += 1;
    }

    for day in cursor.days() {
        let marks = state.calendar_marks.on(day);
        let badges: String = marks.iter().map(|m| m.kind.badge()).collect();

        let plain = format!("{:>2}{}", day.day(), badges);
        let visible = plain.chars().count();
        let painted = if marks.is_empty() {
            plain
        } else {
            let colored: String = marks
                .iter()
                .map(|m| paint(color_for_mark(m.kind.as_str()), &m.kind.badge().to_string()))
                .collect();
            format!("{:>2}{}", day.day(), colored)
        };

        out.push_str(&painted);
        out.push_str(&" ".repeat(CELL.saturating_sub(visible).max(1)));

        col += 1;
        if col % 7 == 0 {
            out.push('\n');
        }
    }
    if col % 7 != 0 {
        out.push('\n');
    }
    out
}

/// Per-date dialog body: the marks stored for `date`.
pub fn day_dialog(state: &AppState, date: NaiveDate) -> String {
    let mut out = section_title(format!("Mark day {}", date.format("%Y-%m-%d")));
    out.push('\n');

    let marks = state.calendar_marks.on(date);
    if marks.is_empty() {
        out.push_str("  (no marks)\n");
    }
    for m in marks {
        out.push_str(&format!("  {}\n", m.kind.as_str()));
    }
    out
}
