use crate::db::store::Store;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

/// Print a short report about the database file and its contents.
pub fn print_db_info(store: &Store, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) STORED KEYS
    //
    let keys = store.keys()?;
    println!("{}• Stored keys:{} {}{}{}", CYAN, RESET, GREEN, keys.len(), RESET);
    for key in &keys {
        let len = store
            .get::<Vec<serde_json::Value>>(key, Vec::new())
            .map(|v| v.len())
            .unwrap_or(0);
        println!("    {:<16} {} records", key, len);
    }

    //
    // 3) LAST WRITE
    //
    let last: Option<String> = store
        .pool
        .conn
        .query_row(
            "SELECT updated_at FROM kv ORDER BY updated_at DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    println!("{}• Last write:{} {}", CYAN, RESET, fmt_last);

    //
    // 4) AUDIT ROWS
    //
    let log_rows: i64 = store
        .pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Audit log rows:{} {}\n", CYAN, RESET, log_rows);

    Ok(())
}
