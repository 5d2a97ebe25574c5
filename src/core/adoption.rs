use crate::core::state::AppState;
use crate::core::validate::{MSG_INCOMPLETE, parse_form_date, require_all};
use crate::errors::AppResult;
use crate::models::{Adoption, AdoptionFilter, AdoptionStatus};

pub struct AdoptionLogic;

impl AdoptionLogic {
    /// Register a new application. It starts as `pending`.
    pub fn create(
        state: &mut AppState,
        applicant: &str,
        animal: &str,
        submitted: &str,
    ) -> AppResult<String> {
        require_all(&[applicant, animal, submitted], MSG_INCOMPLETE)?;
        let submitted = parse_form_date(submitted)?;

        let id = state.adoptions.next_id();
        let record = Adoption::new(
            id,
            applicant.trim().to_string(),
            animal.trim().to_string(),
            submitted,
        );
        Ok(state.adoptions.append(record))
    }

    /// Returns `true` when the status actually changed.
    pub fn set_status(state: &mut AppState, id: &str, status: AdoptionStatus) -> AppResult<bool> {
        let mut changed = false;
        state.adoptions.update(id, |a| {
            changed = a.status != status;
            a.status = status;
        })?;
        Ok(changed)
    }

    pub fn approve(state: &mut AppState, id: &str) -> AppResult<bool> {
        Self::set_status(state, id, AdoptionStatus::Approved)
    }

    pub fn reject(state: &mut AppState, id: &str) -> AppResult<bool> {
        Self::set_status(state, id, AdoptionStatus::Rejected)
    }

    pub fn delete(state: &mut AppState, id: &str) -> AppResult<Adoption> {
        state.adoptions.remove(id)
    }

    /// Records matching `filter`, in collection order.
    pub fn filter(state: &AppState, filter: AdoptionFilter) -> Vec<&Adoption> {
        state.adoptions.list(|a| filter.matches(a))
    }
}
