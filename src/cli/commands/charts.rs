use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Session;
use crate::errors::AppResult;
use crate::render;
use crate::utils::date::today;
use chrono::Datelike;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Charts { year } = cmd {
        let session = Session::open(cfg)?;
        let y = year.unwrap_or_else(|| today().year());

        println!("{}", render::chart_by_year(&session.state));
        println!("{}", render::chart_by_month(&session.state, y));
    }
    Ok(())
}
