use crate::core::state::AppState;
use crate::core::validate::require_all;
use crate::errors::{AppError, AppResult};
use crate::models::Due;

pub struct DueLogic;

impl DueLogic {
    pub fn add(state: &mut AppState, text: &str) -> AppResult<String> {
        require_all(&[text], "Due item text is required")?;
        let id = state.dues.next_id();
        Ok(state.dues.append(Due {
            id,
            text: text.trim().to_string(),
        }))
    }

    pub fn delete(state: &mut AppState, id: &str) -> AppResult<Due> {
        state.dues.remove(id)
    }

    /// "Done" is display-only: it checks the id exists and changes nothing.
    pub fn done<'a>(state: &'a AppState, id: &str) -> AppResult<&'a Due> {
        state
            .dues
            .find(id)
            .ok_or_else(|| AppError::not_found("due item", id))
    }
}
