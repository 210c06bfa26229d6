//! # Bit-serial CRC register
//!
//! One clock of the serial CRC register with tap vector `taps`:
//!
//! ```text
//! top = state[N-1]
//! for i in N-1 down to 1:
//!     state[i] = taps[i] ? state[i-1] ^ top ^ bit : state[i-1]
//! state[0] = top ^ bit
//! ```
//!
//! Stage 0 always takes the feedback; `taps[0]` is never consulted. Every
//! matrix entry is ultimately derived from this recurrence.

use crcgen_spec::PolynomialSpec;

use crate::bits::BitVector;

/// N-bit CRC accumulator contents
pub type RegisterState = BitVector;

/// Serial CRC register bound to a polynomial
#[derive(Debug, Clone)]
pub struct Lfsr<'a> {
    poly: &'a PolynomialSpec,
    state: RegisterState,
}

impl<'a> Lfsr<'a> {
    /// Register cleared to zero
    pub fn new(poly: &'a PolynomialSpec) -> Self {
        Self {
            poly,
            state: RegisterState::zeros(poly.width()),
        }
    }

    /// Register preloaded with `state`
    ///
    /// # Panics
    ///
    /// Panics if `state` is not exactly as wide as the polynomial.
    pub fn with_state(poly: &'a PolynomialSpec, state: RegisterState) -> Self {
        assert_eq!(
            state.len(),
            poly.width(),
            "register state width must match polynomial width"
        );
        Self { poly, state }
    }

    /// Shift one bit in
    pub fn clock(&mut self, bit: bool) {
        let n = self.poly.width();
        let feedback = self.state.get(n - 1) ^ bit;

        for i in (1..n).rev() {
            let shifted = self.state.get(i - 1);
            let next = if self.poly.tap(i) { shifted ^ feedback } else { shifted };
            self.state.set(i, next);
        }
        self.state.set(0, feedback);
    }

    /// Shift a bit stream in, first item first
    pub fn run<I>(&mut self, bits: I)
    where
        I: IntoIterator<Item = bool>,
    {
        for bit in bits {
            self.clock(bit);
        }
    }

    #[inline]
    pub fn state(&self) -> &RegisterState {
        &self.state
    }

    pub fn into_state(self) -> RegisterState {
        self.state
    }
}

/// Run `stream` through a register preloaded with `initial` and return the final state
pub fn simulate(poly: &PolynomialSpec, initial: RegisterState, stream: &BitVector) -> RegisterState {
    let mut lfsr = Lfsr::with_state(poly, initial);
    lfsr.run((0..stream.len()).map(|i| stream.get(i)));
    lfsr.into_state()
}
