//! Statistics form validator
//!
//! Checks run in a fixed order and the first failure wins:
//! numbers, completed vs total, days left vs duration, then the
//! at-least-one rules for both totals, and finally the duration cap.

use crate::errors::ValidationError;
use crate::types::PredictionInput;
use crate::validation::fields::{FormField, FormFields};
use tracing::{debug, warn};

/// Parse a single non-negative whole number
pub fn parse_count(raw: &str) -> Result<u32, ValidationError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ValidationError::InvalidNumber)
}

/// Validate all four fields and build the prediction input
pub fn validate(fields: &FormFields) -> Result<PredictionInput, ValidationError> {
    let mut values = [0u32; 4];
    for (slot, field) in values.iter_mut().zip(FormField::PROMPT_ORDER) {
        *slot = parse_count(fields.get(field)).map_err(|err| {
            warn!(field = ?field, value = fields.get(field), "rejected non-numeric field");
            err
        })?;
    }
    let [total_students, fulfilled_students, total_days, days_left] = values;

    let input = PredictionInput::new(total_students, fulfilled_students, days_left, total_days)
        .map_err(|err| {
            warn!(error = %err, "form validation failed");
            err
        })?;

    debug!(?input, "form validated");
    Ok(input)
}
