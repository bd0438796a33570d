//! # Operation: the closed set of logical operations
//!
//! Seven operations, one unary (NOT), six binary. Dispatch is an
//! exhaustive `match` so an unrecognized name can never fall through
//! to a default bit: it fails with [`Error::InvalidOperation`] at
//! parse time instead.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::binary::Bit;
use crate::error::{Error, Result};

/// A logical operation applied bit-by-bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    And,
    Or,
    Xor,
    Not,
    Nand,
    Nor,
    Xnor,
}

impl Operation {
    /// Every supported operation, in display order.
    pub const ALL: [Self; 7] = [
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Not,
        Self::Nand,
        Self::Nor,
        Self::Xnor,
    ];

    /// Canonical upper-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Not => "NOT",
            Self::Nand => "NAND",
            Self::Nor => "NOR",
            Self::Xnor => "XNOR",
        }
    }

    /// True only for NOT.
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Not)
    }

    /// Number of operands consumed (1 for NOT, 2 otherwise).
    pub const fn arity(self) -> usize {
        if self.is_unary() { 1 } else { 2 }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = Error;

    /// Case-insensitive match against the seven names; surrounding
    /// whitespace is ignored.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AND" => Ok(Self::And),
            "OR" => Ok(Self::Or),
            "XOR" => Ok(Self::Xor),
            "NOT" => Ok(Self::Not),
            "NAND" => Ok(Self::Nand),
            "NOR" => Ok(Self::Nor),
            "XNOR" => Ok(Self::Xnor),
            _ => Err(Error::InvalidOperation(s.trim().to_string())),
        }
    }
}

/// Computes one output bit.
///
/// `b` must be `Some` for the six binary operations and `None` for
/// NOT; anything else is an [`Error::OperandArityMismatch`].
///
/// Truth table:
///
/// | op   | rule                         |
/// |------|------------------------------|
/// | AND  | 1 iff a=1 and b=1            |
/// | OR   | 1 iff a=1 or b=1             |
/// | XOR  | 1 iff a ≠ b                  |
/// | NAND | 0 iff a=1 and b=1            |
/// | NOR  | 1 iff a=0 and b=0            |
/// | XNOR | 1 iff a = b                  |
/// | NOT  | 1 iff a=0 (b absent)         |
pub fn compute_bit(a: Bit, b: Option<Bit>, op: Operation) -> Result<Bit> {
    match (op, b) {
        (Operation::Not, None) => Ok(!a),
        (Operation::Not, Some(_)) => Err(Error::OperandArityMismatch {
            op,
            expected: 1,
            got: 2,
        }),
        (_, None) => Err(Error::OperandArityMismatch {
            op,
            expected: 2,
            got: 1,
        }),
        (Operation::And, Some(b)) => Ok(a & b),
        (Operation::Or, Some(b)) => Ok(a | b),
        (Operation::Xor, Some(b)) => Ok(a ^ b),
        (Operation::Nand, Some(b)) => Ok(!(a & b)),
        (Operation::Nor, Some(b)) => Ok(!(a | b)),
        (Operation::Xnor, Some(b)) => Ok(!(a ^ b)),
    }
}
