//! # crcgen input model
//!
//! Validated inputs for parallel CRC generation: the CRC polynomial as a tap
//! vector and the number of data bits processed per clock.
//!
//! ## Example
//!
//! ```rust
//! use crcgen_spec::{DataWidth, Limits, PolynomialSpec};
//!
//! // USB CRC-5: x^5 + x^2 + 1
//! let limits = Limits::DEFAULT;
//! let poly = PolynomialSpec::from_hex("05", 5, &limits).unwrap();
//! let width = DataWidth::new(8, &limits).unwrap();
//!
//! assert_eq!(poly.to_string(), "1+x^2+x^5");
//! assert_eq!(width.get(), 8);
//! ```

pub mod config;
pub mod error;
mod expression;
pub mod lexer;
pub mod polynomial;
pub mod width;

pub use config::{ConfigError, Limits, HARD_WIDTH_CEILING};
pub use error::{ErrorCategory, Result, SpecError};
pub use polynomial::PolynomialSpec;
pub use width::DataWidth;
