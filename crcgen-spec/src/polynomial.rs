//! # CRC Polynomial Model
//!
//! A [`PolynomialSpec`] is the tap vector of an N-bit CRC register. `taps[i]`
//! marks stage `i` as receiving the feedback XOR; the leading `x^N` term is
//! implicit and never stored.
//!
//! ## Hex encoding
//!
//! The hex string is read from its last character: tap `i` is bit `i % 4` of
//! the nibble at position `len - 1 - i / 4`. CRC-5/USB (`x^5 + x^2 + 1`) is
//! therefore `05` for a 5-bit width.

use std::fmt;

use crate::config::Limits;
use crate::error::{Result, SpecError};
use crate::expression;

/// Tap vector of a CRC polynomial
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PolynomialSpec {
    taps: Vec<bool>,
}

impl PolynomialSpec {
    /// Check a register width against `limits` without decoding anything
    pub fn validate_width(width: usize, limits: &Limits) -> Result<()> {
        if !limits.allows_poly_width(width) {
            return Err(SpecError::PolyWidthOutOfRange {
                value: width,
                max: limits.max_poly_width,
            });
        }
        Ok(())
    }

    /// Decode `width` taps from a hex string
    pub fn from_hex(hex: &str, width: usize, limits: &Limits) -> Result<Self> {
        Self::validate_width(width, limits)?;

        let digits: Vec<char> = hex.chars().collect();
        let required = width.div_ceil(4);
        if digits.len() < required {
            return Err(SpecError::PolyStringTooShort {
                len: digits.len(),
                required,
            });
        }

        let mut nibbles = Vec::with_capacity(digits.len());
        for (position, &digit) in digits.iter().enumerate() {
            match digit.to_digit(16) {
                Some(value) => nibbles.push(value),
                None => return Err(SpecError::InvalidHexDigit { digit, position }),
            }
        }

        let taps = (0..width)
            .map(|i| {
                let nibble = nibbles[nibbles.len() - 1 - i / 4];
                (nibble >> (i % 4)) & 1 == 1
            })
            .collect();

        Ok(Self { taps })
    }

    /// Use an explicit tap vector; its length is the polynomial width
    pub fn from_taps(taps: Vec<bool>, limits: &Limits) -> Result<Self> {
        Self::validate_width(taps.len(), limits)?;
        Ok(Self { taps })
    }

    /// Parse an algebraic form such as `x^5 + x^2 + 1`
    pub fn from_expression(source: &str, limits: &Limits) -> Result<Self> {
        let exponents = expression::parse_exponents(source)?;
        let width = exponents
            .iter()
            .copied()
            .max()
            .filter(|&degree| degree >= 1)
            .ok_or(SpecError::ConstantPolynomial)?;
        Self::validate_width(width, limits)?;

        let mut taps = vec![false; width];
        for exponent in exponents.into_iter().filter(|&e| e < width) {
            taps[exponent] = true;
        }
        Ok(Self { taps })
    }

    /// Register width N
    #[inline]
    pub fn width(&self) -> usize {
        self.taps.len()
    }

    /// Whether stage `index` takes the feedback term
    #[inline]
    pub fn tap(&self, index: usize) -> bool {
        self.taps[index]
    }

    #[inline]
    pub fn taps(&self) -> &[bool] {
        &self.taps
    }

    /// Exponents with a non-zero coefficient, ascending, including the implicit `x^N`
    pub fn exponents(&self) -> impl Iterator<Item = usize> + '_ {
        self.taps
            .iter()
            .enumerate()
            .filter_map(|(i, &set)| set.then_some(i))
            .chain(std::iter::once(self.width()))
    }

    /// Shortest hex string that [`PolynomialSpec::from_hex`] maps back to these taps
    pub fn to_hex(&self) -> String {
        let digits = self.width().div_ceil(4);
        (0..digits)
            .rev()
            .map(|nibble| {
                let value = (0..4)
                    .filter(|bit| {
                        let index = nibble * 4 + bit;
                        index < self.width() && self.taps[index]
                    })
                    .fold(0u32, |acc, bit| acc | (1 << bit));
                char::from_digit(value, 16).unwrap_or('0')
            })
            .collect()
    }
}

impl fmt::Display for PolynomialSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, exponent) in self.exponents().enumerate() {
            if n > 0 {
                f.write_str("+")?;
            }
            if exponent == 0 {
                f.write_str("1")?;
            } else {
                write!(f, "x^{}", exponent)?;
            }
        }
        Ok(())
    }
}
