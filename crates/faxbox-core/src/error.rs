//! Error handling for faxbox
//!
//! Dimension errors shared by all faxbox crates. Raised when the dimension
//! set holds a measurement no physical part can have.

use thiserror::Error;

/// Dimension error type
///
/// Raised when a named measurement of the dimension set cannot describe a
/// physical part.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DimensionError {
    /// Measurement is zero or negative
    #[error("Dimension '{name}' must be positive, got {value}")]
    NonPositive {
        /// The measurement name.
        name: String,
        /// The offending value in millimeters.
        value: f64,
    },

    /// Measurement is NaN or infinite
    #[error("Dimension '{name}' must be a finite number")]
    NotFinite {
        /// The measurement name.
        name: String,
    },

    /// A ratio setting is outside its allowed range
    #[error("Setting '{name}' out of range: {value} (valid: {min}..={max})")]
    OutOfRange {
        /// The setting name.
        name: String,
        /// The offending value.
        value: f64,
        /// Lower bound (inclusive).
        min: f64,
        /// Upper bound (inclusive).
        max: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_error_display() {
        let err = DimensionError::NonPositive {
            name: "shell.width".to_string(),
            value: -5.0,
        };
        assert_eq!(
            err.to_string(),
            "Dimension 'shell.width' must be positive, got -5"
        );

        let err = DimensionError::NotFinite {
            name: "kerf".to_string(),
        };
        assert_eq!(err.to_string(), "Dimension 'kerf' must be a finite number");
    }
}
