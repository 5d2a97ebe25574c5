//! Form validation helpers shared by the create / edit commands.

use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDate;

pub const MSG_INCOMPLETE: &str = "Please complete the form";

/// Every value must be non-empty after trimming, otherwise the form is rejected with `msg`.
pub fn require_all(values: &[&str], msg: &str) -> AppResult<()> {
    if values.iter().any(|v| v.trim().is_empty()) {
        return Err(AppError::IncompleteForm(msg.to_string()));
    }
    Ok(())
}

pub fn parse_form_date(s: &str) -> AppResult<NaiveDate> {
    date::parse_date(s.trim()).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Donation amounts must be finite and strictly positive.
pub fn parse_amount(s: &str) -> AppResult<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(AppError::IncompleteForm(MSG_INCOMPLETE.to_string()));
    }

    let amount: f64 = trimmed
        .replace(',', "")
        .parse()
        .map_err(|_| AppError::InvalidAmount(s.to_string()))?;

    if !amount.is_finite() || amount <= 0.0 {
        return Err(AppError::InvalidAmount(format!(
            "{s} (amount must be greater than zero)"
        )));
    }

    Ok(amount)
}
