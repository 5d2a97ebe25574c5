use crate::core::state::AppState;
use crate::core::validate::{MSG_INCOMPLETE, parse_amount, parse_form_date, require_all};
use crate::errors::{AppError, AppResult};
use crate::models::{Channel, Donation};

pub struct DonationLogic;

impl DonationLogic {
    /// Record a donation. Donations are never edited, only deleted.
    pub fn create(
        state: &mut AppState,
        donor: &str,
        amount: &str,
        channel: &str,
        date: &str,
    ) -> AppResult<String> {
        require_all(&[donor, date], MSG_INCOMPLETE)?;
        let amount = parse_amount(amount)?;
        let date = parse_form_date(date)?;

        let channel = if channel.trim().is_empty() {
            Channel::default()
        } else {
            Channel::from_code(channel).ok_or_else(|| AppError::InvalidChannel(channel.into()))?
        };

        let id = state.donations.next_id();
        Ok(state.donations.append(Donation {
            id,
            donor: donor.trim().to_string(),
            amount,
            channel,
            date,
        }))
    }

    pub fn delete(state: &mut AppState, id: &str) -> AppResult<Donation> {
        state.donations.remove(id)
    }

    /// Drop every donation. Returns how many were removed.
    pub fn clear_all(state: &mut AppState) -> usize {
        let n = state.donations.len();
        state.donations.clear();
        n
    }
}
