use crate::cli::parser::RescueAction;
use crate::config::Config;
use crate::core::Session;
use crate::core::calendar::CalendarCursor;
use crate::core::rescue::RescueLogic;
use crate::errors::AppResult;
use crate::render;
use crate::ui::messages::{info, success};
use crate::ui::modal::{Field, Modal, prefill};

fn show(session: &Session) -> AppResult<()> {
    let cursor = CalendarCursor::load(&session.store)?;
    println!("{}", render::rescues(&session.state));
    println!("{}", render::calendar(&session.state, cursor));
    Ok(())
}

pub fn handle(action: &RescueAction, cfg: &Config) -> AppResult<()> {
    let mut session = Session::open(cfg)?;

    match action {
        RescueAction::Add {
            reporter,
            location,
            date,
        } => {
            let fields = [
                Field::new("reporter", "Reporter"),
                Field::new("location", "Location"),
                Field::new("date", "Date (YYYY-MM-DD)"),
            ];
            let given = prefill(&[
                ("reporter", reporter.as_ref()),
                ("location", location.as_ref()),
                ("date", date.as_ref()),
            ]);

            let mut modal = Modal::stdio();
            let form = modal.open("New Rescue Report", &fields, given)?;

            let id = RescueLogic::create(
                &mut session.state,
                form.get("reporter"),
                form.get("location"),
                form.get("date"),
            )?;
            session.commit(
                "add",
                &id,
                &format!("Rescue reported in {}", form.get("location")),
            )?;
            modal.close();

            success(format!("Rescue report created (id {id})."));
            show(&session)?;
        }

        RescueAction::List => {
            println!("{}", render::rescues(&session.state));
        }

        RescueAction::Progress { id } => {
            if RescueLogic::progress(&mut session.state, id)? {
                session.commit("progress", id, "Rescue in progress")?;
                success(format!("Rescue {id} marked in-progress."));
            } else {
                info(format!("Rescue {id} is already in-progress."));
            }
            show(&session)?;
        }

        RescueAction::Resolve { id } => {
            if RescueLogic::resolve(&mut session.state, id)? {
                session.commit("resolve", id, "Rescue resolved")?;
                success(format!("Rescue {id} resolved."));
            } else {
                info(format!("Rescue {id} is already resolved."));
            }
            show(&session)?;
        }

        RescueAction::Delete { id } => {
            let removed = RescueLogic::delete(&mut session.state, id)?;
            session.commit(
                "delete",
                id,
                &format!("Deleted rescue in {} reported by {}", removed.location, removed.reporter),
            )?;
            success(format!("Rescue {id} deleted."));
            show(&session)?;
        }
    }

    Ok(())
}
