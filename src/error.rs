//! Typed failures for the forecasting and costing core.
//!
//! Both variants are deterministic: re-invoking with the same input
//! reproduces the failure. The core performs no logging or recovery; the
//! calling layer translates failures into user-visible messages.
use thiserror::Error;

/// An error produced by the forecasting and costing core
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CoreError {
    /// A malformed, missing or non-finite numeric argument
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The least-squares denominator is zero (all month values identical)
    #[error("degenerate trend model: least-squares denominator is zero")]
    DegenerateModel,
}

/// Check that a named input value is a finite number.
pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<(), CoreError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CoreError::InvalidInput(format!(
            "{name} must be a finite number (got {value})"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite() {
        assert!(ensure_finite("capacity", 0.0).is_ok());
        assert!(ensure_finite("capacity", -1.5).is_ok());

        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = ensure_finite("capacity", bad).unwrap_err();
            assert!(matches!(err, CoreError::InvalidInput(_)));
        }
    }
}
