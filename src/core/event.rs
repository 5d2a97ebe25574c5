use crate::core::state::AppState;
use crate::core::validate::{parse_form_date, require_all};
use crate::errors::AppResult;
use crate::models::Event;

pub const MSG_TITLE_DATE: &str = "Title and date are required";

/// Raw event form values.
#[derive(Debug, Clone, Default)]
pub struct EventForm {
    pub title: String,
    pub date: String,
    pub location: String,
    pub desc: String,
}

pub struct EventLogic;

impl EventLogic {
    pub fn create(state: &mut AppState, form: &EventForm) -> AppResult<String> {
        require_all(&[form.title.as_str(), form.date.as_str()], MSG_TITLE_DATE)?;
        let date = parse_form_date(&form.date)?;

        let id = state.events.next_id();
        Ok(state.events.append(Event {
            id,
            title: form.title.trim().to_string(),
            date,
            location: form.location.trim().to_string(),
            desc: form.desc.trim().to_string(),
        }))
    }

    /// Dashboard quick form: title and date only.
    pub fn quick(state: &mut AppState, title: &str, date: &str) -> AppResult<String> {
        let form = EventForm {
            title: title.to_string(),
            date: date.to_string(),
            ..Default::default()
        };
        Self::create(state, &form)
    }

    /// Overwrite title, date, location and description of an existing event.
    pub fn edit(state: &mut AppState, id: &str, form: &EventForm) -> AppResult<()> {
        require_all(&[form.title.as_str(), form.date.as_str()], MSG_TITLE_DATE)?;
        let date = parse_form_date(&form.date)?;

        state.events.update(id, |ev| {
            ev.title = form.title.trim().to_string();
            ev.date = date;
            ev.location = form.location.trim().to_string();
            ev.desc = form.desc.trim().to_string();
        })
    }

    pub fn delete(state: &mut AppState, id: &str) -> AppResult<Event> {
        state.events.remove(id)
    }

    /// Current values of an event as a form, used to pre-fill the edit dialog.
    pub fn form_for(state: &AppState, id: &str) -> Option<EventForm> {
        state.events.find(id).map(|ev| EventForm {
            title: ev.title.clone(),
            date: ev.date.format("%Y-%m-%d").to_string(),
            location: ev.location.clone(),
            desc: ev.desc.clone(),
        })
    }
}
