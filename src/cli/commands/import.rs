use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Session;
use crate::core::calendar::CalendarCursor;
use crate::core::transfer;
use crate::errors::AppResult;
use crate::render;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let mut session = Session::open(cfg)?;
        let path = expand_tilde(file);

        // Nothing is touched unless the whole file parses.
        let replaced = transfer::import_file(&path, &mut session.state)?;

        session.commit(
            "import",
            &path.to_string_lossy(),
            &format!("Imported keys: {}", replaced.join(", ")),
        )?;
        success(format!(
            "Imported {} ({} collections replaced).",
            path.display(),
            replaced.len()
        ));

        let cursor = CalendarCursor::load(&session.store)?;
        let filter = cfg.adoption_filter_or_all();
        println!("{}", render::all(&session.state, cfg, cursor, filter));
    }
    Ok(())
}
