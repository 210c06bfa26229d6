//! # Transition Matrix Builder
//!
//! The CRC update is linear over GF(2), so the effect of M serial clocks is
//! fully described by its action on basis vectors.
//!
//! ## Superposition
//!
//! - state row `i`: start from `e_i`, shift in M zero bits
//! - data row `N + (M - 1 - m)`: start from zero, shift in a stream whose only
//!   set bit is at step `m`
//!
//! Every probe owns its register. Cost is `O((N + M) * M * N)` bit operations.
//!
//! ## Squaring
//!
//! With `A` the one-clock state map and `u` the register after shifting a
//! single `1` into a cleared register:
//!
//! - state block = `A^M`, by square-and-multiply
//! - data row `N + k` = `u * A^k`
//!
//! Both strategies produce identical matrices.

use std::fmt;
use std::str::FromStr;

use crcgen_spec::{DataWidth, PolynomialSpec};
use thiserror::Error;
use tracing::{debug, trace};

use crate::bits::BitVector;
use crate::lfsr::{Lfsr, RegisterState};
use crate::matrix::TransitionMatrix;

/// Matrix construction algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuildStrategy {
    /// One serial simulation per basis vector
    #[default]
    Superposition,
    /// Repeated squaring of the one-clock map
    Squaring,
}

impl BuildStrategy {
    pub fn name(self) -> &'static str {
        match self {
            BuildStrategy::Superposition => "superposition",
            BuildStrategy::Squaring => "squaring",
        }
    }
}

impl fmt::Display for BuildStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown strategy name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown build strategy {0:?} (expected superposition or squaring)")]
pub struct UnknownStrategy(pub String);

impl FromStr for BuildStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "superposition" => Ok(BuildStrategy::Superposition),
            "squaring" => Ok(BuildStrategy::Squaring),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

/// Build the transition matrix by superposition
pub fn build(poly: &PolynomialSpec, width: DataWidth) -> TransitionMatrix {
    build_with(poly, width, BuildStrategy::Superposition)
}

/// Build the transition matrix with an explicit strategy
pub fn build_with(poly: &PolynomialSpec, width: DataWidth, strategy: BuildStrategy) -> TransitionMatrix {
    let n = poly.width();
    let m = width.get();
    debug!(poly_width = n, data_width = m, %strategy, "building transition matrix");

    let matrix = match strategy {
        BuildStrategy::Superposition => by_superposition(poly, m),
        BuildStrategy::Squaring => by_squaring(poly, m),
    };

    debug!(
        rows = matrix.row_count(),
        weight = matrix.weight(),
        "transition matrix ready"
    );
    matrix
}

fn by_superposition(poly: &PolynomialSpec, m: usize) -> TransitionMatrix {
    let n = poly.width();

    let state_block: Vec<BitVector> = (0..n)
        .map(|i| {
            let row = probe_state(poly, i, m);
            trace!(state_bit = i, ones = row.count_ones(), "state probe");
            row
        })
        .collect();

    // Probe for step `step` lands in row N + (M - 1 - step)
    let data_block: Vec<BitVector> = (0..m)
        .rev()
        .map(|step| {
            let row = probe_data(poly, step, m);
            trace!(step, ones = row.count_ones(), "data probe");
            row
        })
        .collect();

    TransitionMatrix::from_blocks(state_block, data_block)
}

/// Register after M zero-data clocks from `e_index`
pub fn probe_state(poly: &PolynomialSpec, index: usize, m: usize) -> RegisterState {
    let mut lfsr = Lfsr::with_state(poly, BitVector::unit(poly.width(), index));
    lfsr.run(std::iter::repeat(false).take(m));
    lfsr.into_state()
}

/// Register after M clocks from zero with a single `1` at step `step`
pub fn probe_data(poly: &PolynomialSpec, step: usize, m: usize) -> RegisterState {
    let mut lfsr = Lfsr::new(poly);
    lfsr.run((0..m).map(|j| j == step));
    lfsr.into_state()
}

fn by_squaring(poly: &PolynomialSpec, m: usize) -> TransitionMatrix {
    let n = poly.width();

    let step: Vec<BitVector> = (0..n).map(|i| probe_state(poly, i, 1)).collect();
    let state_block = power(&step, m);

    let mut inject = Lfsr::new(poly);
    inject.clock(true);

    let mut data_block = Vec::with_capacity(m);
    data_block.push(inject.into_state());
    while data_block.len() < m {
        let next = mul_vec(&data_block[data_block.len() - 1], &step);
        data_block.push(next);
    }

    TransitionMatrix::from_blocks(state_block, data_block)
}

/// Row-vector times matrix: XOR of the rows selected by `v`
fn mul_vec(v: &BitVector, mat: &[BitVector]) -> BitVector {
    let mut out = BitVector::zeros(v.len());
    for i in v.iter_ones() {
        out ^= &mat[i];
    }
    out
}

/// Apply `a` then `b`
fn compose(a: &[BitVector], b: &[BitVector]) -> Vec<BitVector> {
    a.iter().map(|row| mul_vec(row, b)).collect()
}

fn identity(n: usize) -> Vec<BitVector> {
    (0..n).map(|i| BitVector::unit(n, i)).collect()
}

fn power(mat: &[BitVector], mut exp: usize) -> Vec<BitVector> {
    let mut result = identity(mat.len());
    let mut base = mat.to_vec();

    while exp > 0 {
        if exp & 1 == 1 {
            result = compose(&result, &base);
        }
        exp >>= 1;
        if exp > 0 {
            base = compose(&base, &base);
        }
    }
    result
}
