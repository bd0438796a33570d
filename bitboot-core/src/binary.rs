//! # Bit and BinaryString: the engine's value domain
//!
//! A [`Bit`] is the classical two-valued unit. A [`BinaryString`] is a
//! validated, MSB-first sequence of bits of length 1..=[`MAX_WIDTH`].
//!
//! Construction goes through [`BinaryString::parse`] (or `str::parse`),
//! which rejects anything outside the `{0,1}` alphabet instead of
//! coercing it. Once built, a value is never mutated: padding produces
//! an ephemeral copy and the original text stays available for display.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Maximum bit-width accepted for an operand.
pub const MAX_WIDTH: usize = 8;

/// A single binary digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    /// Character form, `'0'` or `'1'`.
    pub const fn as_char(self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
        }
    }

    /// True for [`Bit::One`].
    pub const fn is_set(self) -> bool {
        matches!(self, Self::One)
    }

    pub const fn from_bool(set: bool) -> Self {
        if set { Self::One } else { Self::Zero }
    }

    /// Parses `'0'`/`'1'`; any other character is `None`.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Self::Zero),
            '1' => Some(Self::One),
            _ => None,
        }
    }
}

impl Not for Bit {
    type Output = Self;

    fn not(self) -> Self {
        Self::from_bool(!self.is_set())
    }
}

impl BitAnd for Bit {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self::from_bool(self.is_set() & rhs.is_set())
    }
}

impl BitOr for Bit {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self::from_bool(self.is_set() | rhs.is_set())
    }
}

impl BitXor for Bit {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self::from_bool(self.is_set() ^ rhs.is_set())
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A validated unsigned binary numeral, most-significant bit first.
///
/// Invariant: 1..=[`MAX_WIDTH`] bits, alphabet `{0,1}`. The value is
/// immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryString {
    bits: Vec<Bit>,
}

impl BinaryString {
    /// Parses a string of `'0'`/`'1'` characters.
    ///
    /// Rejects empty input, input longer than [`MAX_WIDTH`] and any
    /// character outside the alphabet. Never truncates or coerces.
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(Error::InvalidOperand {
                input: input.to_string(),
                reason: "operand is empty".to_string(),
            });
        }
        if input.len() > MAX_WIDTH {
            return Err(Error::InvalidOperand {
                input: input.to_string(),
                reason: format!("longer than {MAX_WIDTH} bits"),
            });
        }

        let mut bits = Vec::with_capacity(input.len());
        for c in input.chars() {
            match Bit::from_char(c) {
                Some(bit) => bits.push(bit),
                None => {
                    return Err(Error::InvalidOperand {
                        input: input.to_string(),
                        reason: format!("character '{c}' is not '0' or '1'"),
                    });
                }
            }
        }

        Ok(Self { bits })
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The bits, MSB first.
    pub fn bits(&self) -> &[Bit] {
        &self.bits
    }

    /// Left-zero-padded copy at `width` bits.
    ///
    /// Ephemeral working state for evaluation; `self` keeps its
    /// original width for display. Widths below `len()` return the
    /// bits unchanged, the engine never narrows an operand.
    pub fn padded_to(&self, width: usize) -> Vec<Bit> {
        let pad = width.saturating_sub(self.bits.len());
        let mut padded = Vec::with_capacity(pad + self.bits.len());
        padded.extend(std::iter::repeat_n(Bit::Zero, pad));
        padded.extend_from_slice(&self.bits);
        padded
    }

    /// Unsigned decimal interpretation, MSB first (`"0101"` is 5).
    pub fn decimal(&self) -> u32 {
        self.bits
            .iter()
            .fold(0, |acc, bit| (acc << 1) | u32::from(bit.is_set()))
    }
}

impl FromStr for BinaryString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for BinaryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}
