//! # Transition Matrix
//!
//! `(N + M) x N` matrix over GF(2) for one M-bit-wide clock of an N-bit CRC.
//!
//! ## Layout
//!
//! ```text
//! row 0 .. N       state block   row i     = next state when only lfsr_q[i] is set
//! row N .. N + M   data block    row N + k = next state when only data bit k is set
//! ```
//!
//! Data bit `k` is the bit shifted in at step `M - 1 - k`, so the most
//! significant data bit enters the serial register first. Column `n2` of the
//! matrix lists every source bit whose XOR forms next-state bit `n2`.

use crate::bits::BitVector;
use crate::lfsr::RegisterState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionMatrix {
    poly_width: usize,
    data_width: usize,
    rows: Vec<BitVector>,
}

impl TransitionMatrix {
    pub(crate) fn from_blocks(state_block: Vec<BitVector>, data_block: Vec<BitVector>) -> Self {
        let poly_width = state_block.len();
        let data_width = data_block.len();
        debug_assert!(state_block
            .iter()
            .chain(&data_block)
            .all(|row| row.len() == poly_width));

        let mut rows = state_block;
        rows.extend(data_block);
        Self {
            poly_width,
            data_width,
            rows,
        }
    }

    /// Register width N (also the column count)
    #[inline]
    pub fn poly_width(&self) -> usize {
        self.poly_width
    }

    /// Data bus width M
    #[inline]
    pub fn data_width(&self) -> usize {
        self.data_width
    }

    /// N + M
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn row(&self, row: usize) -> &BitVector {
        &self.rows[row]
    }

    pub fn rows(&self) -> &[BitVector] {
        &self.rows
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.rows[row].get(col)
    }

    /// Contribution of current state bit `i`
    #[inline]
    pub fn state_row(&self, i: usize) -> &BitVector {
        assert!(i < self.poly_width, "state bit {} out of range", i);
        &self.rows[i]
    }

    /// Contribution of data bus bit `k` (row `N + k`)
    #[inline]
    pub fn data_row(&self, k: usize) -> &BitVector {
        assert!(k < self.data_width, "data bit {} out of range", k);
        &self.rows[self.poly_width + k]
    }

    /// Contribution of the bit shifted in at serial step `step`
    #[inline]
    pub fn stream_row(&self, step: usize) -> &BitVector {
        assert!(step < self.data_width, "step {} out of range", step);
        self.data_row(self.data_width - 1 - step)
    }

    pub fn state_block(&self) -> &[BitVector] {
        &self.rows[..self.poly_width]
    }

    pub fn data_block(&self) -> &[BitVector] {
        &self.rows[self.poly_width..]
    }

    /// Number of set entries
    pub fn weight(&self) -> usize {
        self.rows.iter().map(BitVector::count_ones).sum()
    }

    /// Next state for current state `state` and data bus word `data`
    ///
    /// `data` is indexed like the data bus: bit `k` selects row `N + k`.
    pub fn apply(&self, state: &RegisterState, data: &BitVector) -> RegisterState {
        assert_eq!(state.len(), self.poly_width, "state width mismatch");
        assert_eq!(data.len(), self.data_width, "data width mismatch");

        let mut next = RegisterState::zeros(self.poly_width);
        for i in state.iter_ones() {
            next ^= self.state_row(i);
        }
        for k in data.iter_ones() {
            next ^= self.data_row(k);
        }
        next
    }
}
