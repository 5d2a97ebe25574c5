use crate::config::Config;
use crate::core::Session;
use crate::core::calendar::CalendarCursor;
use crate::errors::AppResult;
use crate::render;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let session = Session::open(cfg)?;
    let cursor = CalendarCursor::load(&session.store)?;
    println!("{}", render::dashboard(&session.state, cfg, cursor));
    Ok(())
}
