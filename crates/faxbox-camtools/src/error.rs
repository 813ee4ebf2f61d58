//! Error types for the CAM tools crate.
//!
//! This module provides structured error types for panel rendering,
//! parameter validation, and SVG processing.

use std::io;

use faxbox_core::DimensionError;
use thiserror::Error;

/// Errors that can occur during part generation and layout.
#[derive(Error, Debug)]
pub enum CamToolError {
    /// Part SVGs required by the layout step are not on disk.
    #[error(
        "Missing source SVG files: {}. Generate them first with: {}",
        .missing.join(", "),
        .commands.join(", ")
    )]
    MissingSources {
        /// File names that were not found.
        missing: Vec<String>,
        /// Commands producing the missing files.
        commands: Vec<String>,
    },

    /// The dimension set failed validation.
    #[error("Invalid dimensions: {0}")]
    Dimension(#[from] DimensionError),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// A parameter validation error occurred.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    /// A file format error occurred.
    #[error("File format error: {0}")]
    FileFormat(#[from] FileFormatError),
}

/// Errors related to renderer parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// An edge code string is malformed.
    #[error("Invalid edge code '{code}': {reason}")]
    InvalidEdgeCode { code: String, reason: String },

    /// Dimensions are invalid (zero or negative).
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// Errors related to SVG parsing.
#[derive(Error, Debug)]
pub enum FileFormatError {
    /// The document has no `<svg>` root element.
    #[error("SVG parse error: {0}")]
    SvgParseError(String),

    /// Neither a viewBox nor width/height attributes were found.
    #[error("SVG has no viewBox and no width/height attributes")]
    MissingDimensions,

    /// An attribute value could not be converted to a number.
    #[error("Invalid number in '{attribute}': '{value}'")]
    InvalidNumber { attribute: String, value: String },
}

/// Result type alias for CAM tool operations.
pub type CamToolResult<T> = Result<T, CamToolError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;

/// Result type alias for file format operations.
pub type FileFormatResult<T> = Result<T, FileFormatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_error_conversion() {
        let err: CamToolError = DimensionError::NotFinite {
            name: "burn".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid dimensions: Dimension 'burn' must be a finite number"
        );
    }

    #[test]
    fn test_missing_sources_lists_files_and_commands() {
        let err = CamToolError::MissingSources {
            missing: vec!["drawer.svg".to_string(), "lids.svg".to_string()],
            commands: vec!["faxbox drawer".to_string(), "faxbox lids".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Missing source SVG files: drawer.svg, lids.svg. \
             Generate them first with: faxbox drawer, faxbox lids"
        );
    }

    #[test]
    fn test_parameter_error_display() {
        let err = ParameterError::OutOfRange {
            name: "burn".to_string(),
            value: -0.5,
            min: 0.0,
            max: 1.0,
        };
        assert_eq!(
            err.to_string(),
            "Parameter 'burn' out of range: -0.5 (valid: 0..1)"
        );

        let err = ParameterError::InvalidEdgeCode {
            code: "FFx".to_string(),
            reason: "expected 4 characters".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid edge code 'FFx': expected 4 characters"
        );
    }

    #[test]
    fn test_file_format_error_display() {
        let err = FileFormatError::InvalidNumber {
            attribute: "width".to_string(),
            value: "wide".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid number in 'width': 'wide'");
        assert_eq!(
            FileFormatError::MissingDimensions.to_string(),
            "SVG has no viewBox and no width/height attributes"
        );
    }

    #[test]
    fn test_error_conversion() {
        let param_err = ParameterError::InvalidDimensions("width".to_string());
        let cam_err: CamToolError = param_err.into();
        assert!(matches!(cam_err, CamToolError::Parameter(_)));

        let fmt_err = FileFormatError::MissingDimensions;
        let cam_err: CamToolError = fmt_err.into();
        assert!(matches!(cam_err, CamToolError::FileFormat(_)));

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let cam_err: CamToolError = io_err.into();
        assert!(matches!(cam_err, CamToolError::IoError(_)));
    }
}
