//! Input checks run by services before any write.

use rust_decimal::Decimal;

use crate::error::Error;

/// Trims `value` and rejects it when nothing is left.
pub fn require_text(field: &str, value: &str) -> Result<String, Error> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::ValidationFailed(format!("{} must not be empty", field)));
    }

    Ok(trimmed.to_string())
}

/// Trims an optional value, mapping blank strings to `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Rejects negative amounts.
pub fn require_non_negative(field: &str, value: Decimal) -> Result<Decimal, Error> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(Error::ValidationFailed(format!(
            "{} must not be negative, got {}",
            field, value
        )));
    }

    Ok(value)
}
