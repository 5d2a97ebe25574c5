use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Session;
use crate::core::transfer::{self, DEFAULT_EXPORT_FILE, ExportFormat};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use crate::utils::prompt::ensure_writable;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        format,
        collection,
        force,
    } = cmd
    {
        let session = Session::open(cfg)?;
        let path = expand_tilde(file.as_deref().unwrap_or(DEFAULT_EXPORT_FILE));

        match format {
            ExportFormat::Json => {
                ensure_writable(&path, *force)?;
                transfer::write_json(&path, &session.state)?;
                success(format!("JSON export completed: {}", path.display()));
            }
            ExportFormat::Csv => {
                let which = collection.ok_or_else(|| {
                    AppError::Export("--collection is required with --format csv".into())
                })?;
                ensure_writable(&path, *force)?;
                let n = transfer::write_csv(&path, &session.state, which)?;
                success(format!("CSV export completed: {} ({n} rows)", path.display()));
            }
        }

        crate::db::log::audit(
            &session.store.pool.conn,
            "export",
            &path.to_string_lossy(),
            "State exported",
        )?;
    }
    Ok(())
}
