//! # crcgen transition matrix
//!
//! Derives the GF(2) linear map that advances an N-bit CRC register by one
//! clock when M data bits are consumed per clock.
//!
//! ## Example
//!
//! ```rust
//! use crcgen_matrix::{build, ExpressionTerm};
//! use crcgen_spec::{DataWidth, Limits, PolynomialSpec};
//!
//! let limits = Limits::DEFAULT;
//! let poly = PolynomialSpec::from_hex("05", 5, &limits).unwrap();
//! let matrix = build(&poly, DataWidth::new(8, &limits).unwrap());
//!
//! assert_eq!(matrix.row_count(), 13);
//! let c4 = matrix.column(4);
//! assert_eq!(c4.terms[0], ExpressionTerm::State(1));
//! ```

pub mod bits;
pub mod builder;
pub mod column;
pub mod lfsr;
pub mod matrix;

#[cfg(test)]
mod proptests;

pub use bits::BitVector;
pub use builder::{build, build_with, probe_data, probe_state, BuildStrategy, UnknownStrategy};
pub use column::{Column, ExpressionTerm};
pub use lfsr::{simulate, Lfsr, RegisterState};
pub use matrix::TransitionMatrix;
