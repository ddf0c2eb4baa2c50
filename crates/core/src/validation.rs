//! Shared input validation helpers.
//!
//! Reusable shape/range checks used at the API boundary. Each returns a
//! `CoreError::Validation` naming the offending field.

use crate::error::CoreError;

/// Validate that a location id is non-empty (after trimming whitespace).
pub fn validate_location_id(location_id: &str) -> Result<(), CoreError> {
    if location_id.trim().is_empty() {
        return Err(CoreError::Validation(
            "location_id must be a non-empty string".to_string(),
        ));
    }
    Ok(())
}

/// Validate that an alert threshold is non-negative.
pub fn validate_threshold(max_density: i32) -> Result<(), CoreError> {
    if max_density < 0 {
        return Err(CoreError::Validation(format!(
            "max_density must be >= 0, got {max_density}"
        )));
    }
    Ok(())
}

/// Validate that a value falls within `[0.0, 1.0]`.
pub fn validate_unit_range(value: f64, name: &str) -> Result<(), CoreError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(CoreError::Validation(format!(
            "{name} must be between 0.0 and 1.0, got {value}"
        )));
    }
    Ok(())
}
