use chrono::NaiveTime;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::errors::AppError;

pub const SUPPORTED_TIMEZONES: [&str; 4] = [
    "America/Los_Angeles",
    "America/Denver",
    "America/Chicago",
    "America/New_York",
];

pub const SUPPORTED_DATE_FORMATS: [&str; 3] = ["MM/dd/yyyy", "dd/MM/yyyy", "yyyy-MM-dd"];

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(map_validation_error)
}

fn map_validation_error(err: ValidationErrors) -> AppError {
    AppError::BadRequest(format!("Validation failed: {}", err))
}

/// Parses a textual identifier. Anything but a plain non-negative integer
/// is rejected rather than coerced.
pub fn parse_id(raw: &str) -> Result<u32, AppError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_id(raw));
    }
    trimmed.parse::<u32>().map_err(|_| invalid_id(raw))
}

fn invalid_id(raw: &str) -> AppError {
    AppError::InvalidArgument(format!(
        "Invalid identifier '{}': expected a non-negative integer",
        raw
    ))
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("must not be blank"));
    }
    Ok(())
}

/// Accepts 24-hour `HH:MM`.
pub fn validate_clock_time(value: &str) -> Result<(), ValidationError> {
    if value.len() != 5 || NaiveTime::parse_from_str(value, "%H:%M").is_err() {
        return Err(ValidationError::new("time must be HH:MM"));
    }
    Ok(())
}

pub fn validate_timezone(value: &str) -> Result<(), ValidationError> {
    if !SUPPORTED_TIMEZONES.contains(&value) {
        return Err(ValidationError::new("unsupported timezone"));
    }
    Ok(())
}

pub fn validate_date_format(value: &str) -> Result<(), ValidationError> {
    if !SUPPORTED_DATE_FORMATS.contains(&value) {
        return Err(ValidationError::new("unsupported date format"));
    }
    Ok(())
}
