//! # Error Types for crcgen input validation

use crate::config::ConfigError;
use thiserror::Error;

/// Broad class of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed invocation or configuration
    Usage,
    /// A width outside the configured ceiling
    Range,
    /// A polynomial string that cannot be decoded
    Format,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpecError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    // Range errors
    #[error("Invalid data width {value}: must be in range [1, {max}]")]
    DataWidthOutOfRange { value: usize, max: usize },

    #[error("Invalid polynomial width {value}: must be in range [1, {max}]")]
    PolyWidthOutOfRange { value: usize, max: usize },

    // Hex format errors
    #[error("Polynomial string too short: {len} hex digits, {required} required")]
    PolyStringTooShort { len: usize, required: usize },

    #[error("Invalid hex digit {digit:?} at position {position}")]
    InvalidHexDigit { digit: char, position: usize },

    // Expression format errors
    #[error("Unexpected {found:?} at position {position} in polynomial expression")]
    UnexpectedToken { found: String, position: usize },

    #[error("Polynomial expression ends unexpectedly")]
    UnexpectedEnd,

    #[error("Invalid exponent {0:?}")]
    InvalidExponent(String),

    #[error("Term x^{0} appears more than once")]
    DuplicateTerm(usize),

    #[error("Polynomial has no term of degree 1 or higher")]
    ConstantPolynomial,

    #[error("Polynomial degree {found} does not match polynomial width {expected}")]
    WidthMismatch { expected: usize, found: usize },
}

impl SpecError {
    /// Classify the error
    pub fn category(&self) -> ErrorCategory {
        match self {
            SpecError::InvalidConfig(_) | SpecError::WidthMismatch { .. } => ErrorCategory::Usage,
            SpecError::DataWidthOutOfRange { .. } | SpecError::PolyWidthOutOfRange { .. } => {
                ErrorCategory::Range
            }
            SpecError::PolyStringTooShort { .. }
            | SpecError::InvalidHexDigit { .. }
            | SpecError::UnexpectedToken { .. }
            | SpecError::UnexpectedEnd
            | SpecError::InvalidExponent(_)
            | SpecError::DuplicateTerm(_)
            | SpecError::ConstantPolynomial => ErrorCategory::Format,
        }
    }
}

pub type Result<T> = std::result::Result<T, SpecError>;
