//! Error types for the modeling engine
//!
//! Undefined ratios (zero denominators) are not errors, see [`crate::Ratio`].

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ModelError>;

#[derive(Error, Debug)]
pub enum ModelError {
    /// NaN, infinite, negative or out-of-range value where a valid quantity is required
    #[error("invalid input for `{field}`: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// Operation needs at least one element (funding round, cost category, ...)
    #[error("empty {0}: at least one entry is required")]
    EmptyHistory(&'static str),

    /// Revenue and cost series do not line up month by month
    #[error("misaligned series: {reason}")]
    MisalignedSeries { reason: String },

    /// Configuration could not be interpreted
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ModelError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ModelError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

/// Reject NaN and infinite values
pub fn ensure_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ModelError::invalid(field, format!("expected a finite number, got {}", value)))
    }
}

/// Reject NaN, infinite and negative values
pub fn ensure_non_negative(field: &'static str, value: f64) -> Result<f64> {
    ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(ModelError::invalid(field, format!("must be >= 0, got {}", value)));
    }
    Ok(value)
}

/// Reject values outside the closed percentage range [0, 100]
pub fn ensure_percent(field: &'static str, value: f64) -> Result<f64> {
    ensure_finite(field, value)?;
    if !(0.0..=100.0).contains(&value) {
        return Err(ModelError::invalid(field, format!("must be within [0, 100], got {}", value)));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_helpers() {
        assert!(ensure_finite("x", f64::NAN).is_err());
        assert!(ensure_finite("x", f64::INFINITY).is_err());
        assert!(ensure_non_negative("x", -0.01).is_err());
        assert_eq!(ensure_non_negative("x", 0.0).unwrap(), 0.0);
        assert!(ensure_percent("p", 100.5).is_err());
        assert!(ensure_percent("p", 100.0).is_ok());
    }

    #[test]
    fn test_error_messages_name_the_field() {
        let err = ModelError::invalid("monthly_fee", "must be > 0");
        assert_eq!(err.to_string(), "invalid input for `monthly_fee`: must be > 0");

        let err = ModelError::EmptyHistory("funding history");
        assert!(err.to_string().contains("funding history"));
    }
}
