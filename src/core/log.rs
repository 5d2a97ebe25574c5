use crate::db::log::{LogEntry, load_log};
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;

const MAX_OP_WIDTH: usize = 48;

fn strip_ansi(s: &str) -> String {
    match Regex::new(r"\x1B\[[0-9;]*[mK]") {
        Ok(re) => re.replace_all(s, "").into_owned(),
        Err(_) => s.to_string(),
    }
}

/// ANSI color for an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" | "mark" | "seed" => Colour::Green,
        "delete" | "unmark" | "clear" | "reset" => Colour::Red,
        "edit" | "approve" | "reject" | "progress" | "resolve" => Colour::Yellow,
        "import" | "migration_applied" => Colour::Purple,
        "backup" | "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// One printable line of the audit log.
pub fn format_entry(entry: &LogEntry, id_w: usize, date_w: usize, op_w: usize) -> String {
    let date = chrono::DateTime::parse_from_rfc3339(&entry.date)
        .map(|dt| dt.format("%FT%T%:z").to_string())
        .unwrap_or_else(|_| entry.date.clone());

    let color = color_for_operation(&entry.operation);
    let mut colored = color.paint(entry.operation.as_str()).to_string();
    if !entry.target.is_empty() {
        colored.push_str(&format!(" ({})", entry.target));
    }

    let visible_len = strip_ansi(&colored).chars().count();
    let padding = " ".repeat(op_w.saturating_sub(visible_len));

    format!(
        "{:>id_w$}: {:<date_w$} | {}{} => {}",
        entry.id,
        date,
        colored,
        padding,
        entry.message,
        id_w = id_w,
        date_w = date_w
    )
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &Store) -> AppResult<()> {
        let entries = load_log(&store.pool.conn)?;

        if entries.is_empty() {
            info("The audit log is empty.");
            return Ok(());
        }

        let op_w = entries
            .iter()
            .map(|e| {
                let target = if e.target.is_empty() {
                    0
                } else {
                    e.target.chars().count() + 3
                };
                e.operation.chars().count() + target
            })
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);

        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Audit log:\n");
        for entry in &entries {
            println!("{}", format_entry(entry, id_w, date_w, op_w));
        }

        Ok(())
    }
}
