use crate::cli::parser::CalendarAction;
use crate::config::Config;
use crate::core::Session;
use crate::core::calendar::{CalendarCursor, CalendarLogic};
use crate::core::validate::parse_form_date;
use crate::errors::AppResult;
use crate::render;
use crate::ui::messages::success;
use crate::utils::date::iso;

pub fn handle(action: &CalendarAction, cfg: &Config) -> AppResult<()> {
    let mut session = Session::open(cfg)?;
    let cursor = CalendarCursor::load(&session.store)?;

    match action {
        CalendarAction::Show { month } => {
            let shown = match month {
                Some(m) => {
                    let c = CalendarCursor::parse(m)?;
                    c.save(&session.store)?;
                    c
                }
                None => cursor,
            };
            println!("{}", render::calendar(&session.state, shown));
        }

        CalendarAction::Prev => {
            let c = cursor.prev();
            c.save(&session.store)?;
            println!("{}", render::calendar(&session.state, c));
        }

        CalendarAction::Next => {
            let c = cursor.next();
            c.save(&session.store)?;
            println!("{}", render::calendar(&session.state, c));
        }

        CalendarAction::Day { date } => {
            let d = parse_form_date(date)?;
            println!("{}", render::day_dialog(&session.state, d));
        }

        CalendarAction::Mark { date, kind } => {
            let d = parse_form_date(date)?;
            CalendarLogic::mark(&mut session.state, d, *kind);
            session.commit(
                "mark",
                &format!("{}|{}", iso(d), kind.as_str()),
                "Calendar mark added",
            )?;
            success(format!("Marked {} as {}.", iso(d), kind.as_str()));
            println!("{}", render::calendar(&session.state, cursor));
        }

        CalendarAction::Unmark { date, kind } => {
            let d = parse_form_date(date)?;
            let removed = CalendarLogic::unmark(&mut session.state, d, *kind)?;
            session.commit(
                "unmark",
                &format!("{}|{}", iso(d), kind.as_str()),
                &format!("Removed {removed} calendar mark(s)"),
            )?;
            success(format!("Removed {} mark(s) from {}.", kind.as_str(), iso(d)));
            println!("{}", render::day_dialog(&session.state, d));
            println!("{}", render::calendar(&session.state, cursor));
        }
    }

    Ok(())
}
