use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::open_db;
use crate::db::log::audit;
use crate::db::stats;
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::colors::{CYAN, GREEN, RED, RESET};
use crate::utils::prompt::confirm;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        check,
        vacuum,
        info: show_info,
        reset,
        yes,
    } = cmd
    {
        let store = Store::new(open_db(&cfg.database)?);

        //
        // 1) INFO
        //
        if *show_info {
            stats::print_db_info(&store, &cfg.database)?;
        }

        //
        // 2) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String =
                store
                    .pool
                    .conn
                    .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        //
        // 3) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            store.pool.conn.execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }

        //
        // 4) RESET
        //
        if *reset {
            if !*yes && !confirm("Remove ALL stored data? This action is irreversible.") {
                info("Operation cancelled.");
                return Ok(());
            }
            store.clear()?;
            audit(&store.pool.conn, "reset", "kv", "Store cleared")?;
            success("All stored data removed.");
        }
    }

    Ok(())
}
