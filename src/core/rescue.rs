use crate::core::state::AppState;
use crate::core::validate::{MSG_INCOMPLETE, parse_form_date, require_all};
use crate::errors::AppResult;
use crate::models::{Rescue, RescueStatus};

pub struct RescueLogic;

impl RescueLogic {
    pub fn create(
        state: &mut AppState,
        reporter: &str,
        location: &str,
        date: &str,
    ) -> AppResult<String> {
        require_all(&[reporter, location, date], MSG_INCOMPLETE)?;
        let date = parse_form_date(date)?;

        let id = state.rescues.next_id();
        let record = Rescue::new(
            id,
            reporter.trim().to_string(),
            location.trim().to_string(),
            date,
        );
        Ok(state.rescues.append(record))
    }

    /// No ordering between statuses is enforced: any status can follow any other.
    pub fn set_status(state: &mut AppState, id: &str, status: RescueStatus) -> AppResult<bool> {
        let mut changed = false;
        state.rescues.update(id, |r| {
            changed = r.status != status;
            r.status = status;
        })?;
        Ok(changed)
    }

    pub fn progress(state: &mut AppState, id: &str) -> AppResult<bool> {
        Self::set_status(state, id, RescueStatus::InProgress)
    }

    pub fn resolve(state: &mut AppState, id: &str) -> AppResult<bool> {
        Self::set_status(state, id, RescueStatus::Resolved)
    }

    pub fn delete(state: &mut AppState, id: &str) -> AppResult<Rescue> {
        state.rescues.remove(id)
    }
}
