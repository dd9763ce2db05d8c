//! Form Validation
//!
//! Parses raw form strings into a `SessionInput`. Every numeric field must
//! parse to a finite number; anything else is rejected with the offending
//! field name instead of letting NaN flow into the scorer and produce a
//! misleading "Low Risk" verdict.

use serde::Serialize;

use super::types::{SessionForm, SessionInput};

// ============================================================================
// ERROR TYPE
// ============================================================================

/// A required field was empty, non-numeric, non-finite, or an unknown variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidInputError {
    pub field: &'static str,
    pub message: String,
}

impl InvalidInputError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid value for `{}`: {}", self.field, self.message)
    }
}

impl std::error::Error for InvalidInputError {}

// ============================================================================
// PARSING
// ============================================================================

/// Parse and validate a raw session form.
///
/// Values outside the documented sensor ranges (EEG 0-10, GSR 0-2) are
/// accepted but logged, matching what the original form allowed.
pub fn parse_form(form: &SessionForm) -> Result<SessionInput, InvalidInputError> {
    let eeg = [
        parse_reading("eeg1", &form.eeg1)?,
        parse_reading("eeg2", &form.eeg2)?,
        parse_reading("eeg3", &form.eeg3)?,
        parse_reading("eeg4", &form.eeg4)?,
    ];
    let gsr = parse_reading("gsr", &form.gsr)?;
    let age = parse_integer("age", &form.age)?;
    let duration_minutes = parse_integer("duration", &form.duration)?;

    for (i, band) in eeg.iter().enumerate() {
        if !(0.0..=10.0).contains(band) {
            log::warn!("eeg{} reading {} outside expected range 0-10", i + 1, band);
        }
    }
    if !(0.0..=2.0).contains(&gsr) {
        log::warn!("gsr reading {} outside expected range 0-2", gsr);
    }

    let gender = form
        .gender
        .parse()
        .map_err(|e: String| InvalidInputError::new("gender", e))?;
    let session_type = form
        .session_type
        .parse()
        .map_err(|e: String| InvalidInputError::new("session_type", e))?;
    let environment = form
        .environment
        .parse()
        .map_err(|e: String| InvalidInputError::new("environment", e))?;
    let cognitive_state = form
        .cognitive_state
        .parse()
        .map_err(|e: String| InvalidInputError::new("cognitive_state", e))?;
    let emotional_state = form
        .emotional_state
        .parse()
        .map_err(|e: String| InvalidInputError::new("emotional_state", e))?;

    Ok(SessionInput {
        eeg,
        gsr,
        age,
        gender,
        session_type,
        duration_minutes,
        environment,
        cognitive_state,
        emotional_state,
    })
}

/// Parse a sensor reading, requiring a finite value
fn parse_reading(field: &'static str, raw: &str) -> Result<f64, InvalidInputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InvalidInputError::new(field, "field is empty"));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| InvalidInputError::new(field, format!("not a number: {:?}", trimmed)))?;

    if !value.is_finite() {
        return Err(InvalidInputError::new(
            field,
            format!("not a finite number: {}", value),
        ));
    }

    Ok(value)
}

/// Parse a non-negative integer field
fn parse_integer(field: &'static str, raw: &str) -> Result<u32, InvalidInputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InvalidInputError::new(field, "field is empty"));
    }

    trimmed
        .parse()
        .map_err(|_| InvalidInputError::new(field, format!("not a whole number: {:?}", trimmed)))
}

// ============================================================================
// UNIT TESTS
// ============================================================================
