use crate::cli::parser::EventAction;
use crate::config::Config;
use crate::core::Session;
use crate::core::calendar::CalendarCursor;
use crate::core::event::{EventForm, EventLogic};
use crate::errors::{AppError, AppResult};
use crate::render;
use crate::ui::messages::success;
use crate::ui::modal::{Field, FormValues, Modal, prefill};

/// Events feed the events page, the dashboard mini list and the calendar.
fn show(session: &Session, cfg: &Config) -> AppResult<()> {
    let cursor = CalendarCursor::load(&session.store)?;
    println!("{}", render::events(&session.state));
    println!("{}", render::events_mini(&session.state, cfg.dashboard_limit));
    println!("{}", render::calendar(&session.state, cursor));
    Ok(())
}

fn event_fields(current: &EventForm) -> [Field; 4] {
    [
        Field::new("title", "Title").with_default(current.title.clone()),
        Field::new("date", "Date (YYYY-MM-DD)").with_default(current.date.clone()),
        Field::new("location", "Location").with_default(current.location.clone()),
        Field::new("desc", "Description").with_default(current.desc.clone()),
    ]
}

fn to_form(values: &FormValues) -> EventForm {
    EventForm {
        title: values.get("title").to_string(),
        date: values.get("date").to_string(),
        location: values.get("location").to_string(),
        desc: values.get("desc").to_string(),
    }
}

pub fn handle(action: &EventAction, cfg: &Config) -> AppResult<()> {
    let mut session = Session::open(cfg)?;

    match action {
        EventAction::Add {
            title,
            date,
            location,
            desc,
        } => {
            let given = prefill(&[
                ("title", title.as_ref()),
                ("date", date.as_ref()),
                ("location", location.as_ref()),
                ("desc", desc.as_ref()),
            ]);

            let mut modal = Modal::stdio();
            let values = modal.open("Create Event", &event_fields(&EventForm::default()), given)?;
            let form = to_form(&values);

            let id = EventLogic::create(&mut session.state, &form)?;
            session.commit("add", &id, &format!("Event '{}' on {}", form.title, form.date))?;
            modal.close();

            success(format!("Event created (id {id})."));
            show(&session, cfg)?;
        }

        EventAction::Quick { title, date } => {
            let id = EventLogic::quick(&mut session.state, title, date)?;
            session.commit("add", &id, &format!("Quick event '{}' on {}", title.trim(), date))?;
            success(format!("Event created (id {id})."));
            show(&session, cfg)?;
        }

        EventAction::Edit {
            id,
            title,
            date,
            location,
            desc,
        } => {
            let current = EventLogic::form_for(&session.state, id)
                .ok_or_else(|| AppError::not_found("event", id))?;

            let given = prefill(&[
                ("title", title.as_ref()),
                ("date", date.as_ref()),
                ("location", location.as_ref()),
                ("desc", desc.as_ref()),
            ]);

            let mut modal = Modal::stdio();
            let values = modal.open("Edit Event", &event_fields(&current), given)?;
            let form = to_form(&values);

            EventLogic::edit(&mut session.state, id, &form)?;
            session.commit("edit", id, &format!("Event '{}' updated", form.title))?;
            modal.close();

            success(format!("Event {id} saved."));
            show(&session, cfg)?;
        }

        EventAction::Delete { id } => {
            let removed = EventLogic::delete(&mut session.state, id)?;
            session.commit("delete", id, &format!("Deleted event '{}'", removed.title))?;
            success(format!("Event {id} deleted."));
            show(&session, cfg)?;
        }

        EventAction::List => {
            println!("{}", render::events(&session.state));
        }
    }

    Ok(())
}
