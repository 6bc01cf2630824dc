//! Validation Utilities
//!
//! Conversion between `validator` derive output and the shared
//! [`ValidationReport`], plus custom rules the derives reference.

use validator::{ValidationError, ValidationErrors};

use super::error::ValidationReport;

/// Message attached to every missing-field failure.
pub const BLANK_MESSAGE: &str = "can't be blank";

/// Convert validator errors to a ValidationReport
pub fn report_from(errors: ValidationErrors) -> ValidationReport {
    let mut report = ValidationReport::new();

    for (field, errs) in errors.field_errors().iter() {
        for e in errs.iter() {
            let message = e
                .message
                .clone()
                .map(|m| m.to_string())
                .unwrap_or_else(|| e.code.to_string());
            report.add(field.to_string(), message);
        }
    }

    report
}

/// Presence check: rejects empty and whitespace-only strings.
///
/// Matches the blank semantics of the persistence layer's `errors`
/// channel, where `"   "` is as missing as `""`.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some(BLANK_MESSAGE.into());
        return Err(error);
    }
    Ok(())
}
