//! Internal helpers for input validation.
//!
//! These utilities are **not** part of the public API. They centralize the
//! field checks every operation performs before touching the database, so
//! error messages stay consistent across controllers.

use unicode_normalization::UnicodeNormalization;

use crate::{EngineError, ResultEngine};

/// Trim and NFC-normalize a required name-like field.
pub(crate) fn normalize_required_name(value: &str, message: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::Validation(message.to_string()));
    }
    Ok(trimmed.nfc().collect())
}

/// Reject an empty identifier with a field-specific message.
pub(crate) fn require_field(value: &str, message: &str) -> ResultEngine<()> {
    if value.trim().is_empty() {
        return Err(EngineError::Validation(message.to_string()));
    }
    Ok(())
}

pub(crate) fn validate_month(month: i32) -> ResultEngine<()> {
    if !(0..=11).contains(&month) {
        return Err(EngineError::Validation("Invalid month".to_string()));
    }
    Ok(())
}

pub(crate) fn validate_year(year: i32) -> ResultEngine<()> {
    if !(2000..=2050).contains(&year) {
        return Err(EngineError::Validation("Invalid year".to_string()));
    }
    Ok(())
}

pub(crate) fn validate_amount(amount_cents: i64, message: &str) -> ResultEngine<()> {
    if amount_cents < 0 {
        return Err(EngineError::Validation(message.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_bounds() {
        assert!(validate_month(0).is_ok());
        assert!(validate_month(11).is_ok());
        assert_eq!(
            validate_month(12),
            Err(EngineError::Validation("Invalid month".to_string()))
        );
        assert_eq!(
            validate_month(-1),
            Err(EngineError::Validation("Invalid month".to_string()))
        );
    }

    #[test]
    fn year_bounds() {
        assert!(validate_year(2000).is_ok());
        assert!(validate_year(2050).is_ok());
        assert!(validate_year(1999).is_err());
        assert!(validate_year(2051).is_err());
    }

    #[test]
    fn names_are_trimmed_and_normalized() {
        let name = normalize_required_name("  Caf\u{0065}\u{0301}  ", "Invalid name").unwrap();
        assert_eq!(name, "Caf\u{00e9}");
        assert!(normalize_required_name("   ", "Invalid name").is_err());
    }
}
