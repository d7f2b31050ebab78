use crate::error::ServiceError;

/// Outcome of the host's destructive-action prompt.
///
/// Deletion and clear-all require the caller to have asked the user first;
/// passing [`Confirmation::Declined`] makes the operation a no-op, so a
/// host cannot forget the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl Confirmation {
    pub fn is_confirmed(self) -> bool {
        matches!(self, Confirmation::Confirmed)
    }
}

/// Parse a decimal form field.
///
/// Empty or whitespace-only input defaults to zero (an untouched form
/// input). Anything else must parse as a finite, non-negative number —
/// garbage no longer silently reads as zero.
pub fn parse_decimal_field(field: &str, raw: &str) -> Result<f64, ServiceError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let value: f64 = trimmed.parse().map_err(|_| {
        ServiceError::Validation(format!("{field} must be a number, got '{trimmed}'"))
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(ServiceError::Validation(format!(
            "{field} must be a non-negative number, got '{trimmed}'"
        )));
    }
    Ok(value)
}

/// Parse an integer count form field. Same defaulting rules as
/// [`parse_decimal_field`].
pub fn parse_count_field(field: &str, raw: &str) -> Result<u64, ServiceError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse().map_err(|_| {
        ServiceError::Validation(format!(
            "{field} must be a non-negative integer, got '{trimmed}'"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_decimal_defaults_to_zero() {
        assert_eq!(parse_decimal_field("price", "").unwrap(), 0.0);
        assert_eq!(parse_decimal_field("price", "   ").unwrap(), 0.0);
    }

    #[test]
    fn decimal_parses_and_trims() {
        assert_eq!(parse_decimal_field("price", " 5.2 ").unwrap(), 5.2);
        assert_eq!(parse_decimal_field("price", "0").unwrap(), 0.0);
    }

    #[test]
    fn garbage_decimal_is_a_validation_error() {
        let err = parse_decimal_field("price", "abc").unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_FAILED");
    }

    #[test]
    fn negative_and_non_finite_are_rejected() {
        assert!(parse_decimal_field("price", "-1").is_err());
        assert!(parse_decimal_field("price", "inf").is_err());
        assert!(parse_decimal_field("price", "NaN").is_err());
    }

    #[test]
    fn count_field_rules() {
        assert_eq!(parse_count_field("units", "").unwrap(), 0);
        assert_eq!(parse_count_field("units", "40").unwrap(), 40);
        assert!(parse_count_field("units", "4.5").is_err());
        assert!(parse_count_field("units", "-3").is_err());
    }

    #[test]
    fn confirmation_gate() {
        assert!(Confirmation::Confirmed.is_confirmed());
        assert!(!Confirmation::Declined.is_confirmed());
    }
}
