//! # Width Limits
//!
//! The generator caps both the polynomial width and the data width. The cap
//! exists for memory reasons only (the transition matrix is `(N+M) x N` bits),
//! so it is a plain configurable ceiling rather than a property of the
//! algorithm.

use std::fmt;

/// Largest ceiling a [`Limits`] value may carry.
pub const HARD_WIDTH_CEILING: usize = 1 << 16;

/// Width ceilings applied while validating user input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Limits {
    /// Maximum data bus width in bits (M)
    pub max_data_width: usize,
    /// Maximum polynomial width in bits (N)
    pub max_poly_width: usize,
}

impl Limits {
    /// Default ceilings: 1024 data bits, 1024 polynomial bits
    pub const DEFAULT: Self = Self {
        max_data_width: 1024,
        max_poly_width: 1024,
    };

    /// Create limits with validation
    pub const fn new(max_data_width: usize, max_poly_width: usize) -> Result<Self, ConfigError> {
        let limits = Self {
            max_data_width,
            max_poly_width,
        };

        if max_data_width < 1 || max_data_width > HARD_WIDTH_CEILING {
            return Err(ConfigError::InvalidDataCeiling);
        }
        if max_poly_width < 1 || max_poly_width > HARD_WIDTH_CEILING {
            return Err(ConfigError::InvalidPolyCeiling);
        }

        Ok(limits)
    }

    /// Same ceiling for both widths
    pub const fn uniform(max_width: usize) -> Result<Self, ConfigError> {
        Self::new(max_width, max_width)
    }

    /// Number of matrix cells needed for the largest admissible input
    #[inline]
    pub const fn max_matrix_bits(&self) -> usize {
        (self.max_data_width + self.max_poly_width) * self.max_poly_width
    }

    #[inline]
    pub const fn allows_data_width(&self, width: usize) -> bool {
        width >= 1 && width <= self.max_data_width
    }

    #[inline]
    pub const fn allows_poly_width(&self, width: usize) -> bool {
        width >= 1 && width <= self.max_poly_width
    }

    /// Validate limits built by struct literal
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_data_width < 1 || self.max_data_width > HARD_WIDTH_CEILING {
            return Err(ConfigError::InvalidDataCeiling);
        }
        if self.max_poly_width < 1 || self.max_poly_width > HARD_WIDTH_CEILING {
            return Err(ConfigError::InvalidPolyCeiling);
        }
        Ok(())
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Limits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Limits {{ data: 1..={} bits, poly: 1..={} bits, matrix: <= {} cells }}",
            self.max_data_width,
            self.max_poly_width,
            self.max_matrix_bits(),
        )
    }
}

/// Limit construction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Data width ceiling must be in range [1, HARD_WIDTH_CEILING]
    InvalidDataCeiling,
    /// Polynomial width ceiling must be in range [1, HARD_WIDTH_CEILING]
    InvalidPolyCeiling,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDataCeiling => {
                write!(f, "max_data_width must be in range [1, {}]", HARD_WIDTH_CEILING)
            }
            ConfigError::InvalidPolyCeiling => {
                write!(f, "max_poly_width must be in range [1, {}]", HARD_WIDTH_CEILING)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
