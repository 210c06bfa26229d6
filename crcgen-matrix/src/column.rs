//! Per-bit term lists derived from a [`TransitionMatrix`]

use std::fmt;

use crate::bits::BitVector;
use crate::lfsr::RegisterState;
use crate::matrix::TransitionMatrix;

/// One source bit of a next-state XOR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExpressionTerm {
    /// Current accumulator bit
    State(usize),
    /// Data bus bit
    Data(usize),
}

impl fmt::Display for ExpressionTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionTerm::State(i) => write!(f, "q{}", i),
            ExpressionTerm::Data(m) => write!(f, "d{}", m),
        }
    }
}

/// Ordered XOR terms of next-state bit `bit`
///
/// State terms come first in ascending index order, then data terms in
/// ascending index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub bit: usize,
    pub terms: Vec<ExpressionTerm>,
}

impl Column {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn state_terms(&self) -> impl Iterator<Item = usize> + '_ {
        self.terms.iter().filter_map(|term| match term {
            ExpressionTerm::State(i) => Some(*i),
            ExpressionTerm::Data(_) => None,
        })
    }

    pub fn data_terms(&self) -> impl Iterator<Item = usize> + '_ {
        self.terms.iter().filter_map(|term| match term {
            ExpressionTerm::Data(m) => Some(*m),
            ExpressionTerm::State(_) => None,
        })
    }

    /// XOR of the referenced bits; an empty column evaluates to `false`
    pub fn evaluate(&self, state: &RegisterState, data: &BitVector) -> bool {
        self.terms.iter().fold(false, |acc, term| {
            acc ^ match *term {
                ExpressionTerm::State(i) => state.get(i),
                ExpressionTerm::Data(m) => data.get(m),
            }
        })
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{} =", self.bit)?;
        if self.terms.is_empty() {
            return f.write_str(" 0");
        }
        for (n, term) in self.terms.iter().enumerate() {
            if n > 0 {
                f.write_str(" ^")?;
            }
            write!(f, " {}", term)?;
        }
        Ok(())
    }
}

impl TransitionMatrix {
    /// Term list of next-state bit `bit`
    pub fn column(&self, bit: usize) -> Column {
        assert!(bit < self.poly_width(), "column {} out of range", bit);

        let state = (0..self.poly_width())
            .filter(|&i| self.state_row(i).get(bit))
            .map(ExpressionTerm::State);
        let data = (0..self.data_width())
            .filter(|&m| self.data_row(m).get(bit))
            .map(ExpressionTerm::Data);

        Column {
            bit,
            terms: state.chain(data).collect(),
        }
    }

    /// Term lists of every next-state bit, ascending
    pub fn columns(&self) -> impl Iterator<Item = Column> + '_ {
        (0..self.poly_width()).map(move |bit| self.column(bit))
    }
}
