use crate::config::Config;
use crate::core::Session;
use crate::core::calendar::CalendarCursor;
use crate::core::seed::sample_state;
use crate::errors::AppResult;
use crate::render;
use crate::ui::messages::success;
use crate::utils::date::today;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut session = Session::open(cfg)?;
    session.state = sample_state(today());
    session.commit("seed", "", "Loaded sample data")?;

    success("Sample data loaded.");
    let cursor = CalendarCursor::load(&session.store)?;
    let filter = cfg.adoption_filter_or_all();
    println!("{}", render::all(&session.state, cfg, cursor, filter));
    Ok(())
}
