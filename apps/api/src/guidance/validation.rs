//! Profile checks run before any prompt is built. The LLM client never validates input.

use crate::errors::AppError;

/// Rejects empty or whitespace-only text.
pub fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Parses `value` as a finite, non-negative number.
pub fn non_negative_number(field: &str, value: &str) -> Result<f64, AppError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n >= 0.0)
        .ok_or_else(|| AppError::Validation(format!("{field} must be a non-negative number")))
}

/// Like `non_negative_number`, but an empty value is accepted.
pub fn optional_non_negative_number(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Ok(());
    }
    non_negative_number(field, value).map(|_| ())
}

/// A salary amount such as `$85,000`: currency symbol and thousands separators are ignored.
pub fn salary_amount(field: &str, value: &str) -> Result<f64, AppError> {
    let cleaned: String = value.chars().filter(|c| *c != '$' && *c != ',').collect();
    non_negative_number(field, &cleaned)
        .map_err(|_| AppError::Validation(format!("{field} must be a valid salary amount")))
}

/// Like `salary_amount`, but an empty value is accepted.
pub fn optional_salary_amount(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Ok(());
    }
    salary_amount(field, value).map(|_| ())
}

/// GPA on a 4.0 scale. Empty is accepted.
pub fn optional_gpa(value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Ok(());
    }
    match value.trim().parse::<f64>() {
        Ok(gpa) if (0.0..=4.0).contains(&gpa) => Ok(()),
        _ => Err(AppError::Validation(
            "gpa must be a number between 0 and 4".to_string(),
        )),
    }
}
