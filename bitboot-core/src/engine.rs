//! # Evaluation: whole-operand results with per-bit explanations
//!
//! [`evaluate`] applies one [`Operation`] across one or two
//! [`BinaryString`]s and returns an [`OperationResult`]: the result
//! bits, their unsigned decimal value and an ordered [`BitResult`]
//! step per position. Pure computation, no I/O; the caller decides
//! whether to show the steps one by one or all at once, and that
//! choice can never affect the result.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::binary::{BinaryString, Bit};
use crate::error::{Error, Result};
use crate::operation::{Operation, compute_bit};

/// One position of an evaluation: the input bit(s), the operation and
/// the output bit. Renders as `"1 AND 0 = 0"` (`"1 NOT = 0"` for NOT).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitResult {
    pub a: Bit,
    pub b: Option<Bit>,
    pub op: Operation,
    pub out: Bit,
}

impl fmt::Display for BitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.b {
            Some(b) => write!(f, "{} {} {} = {}", self.a, self.op, b, self.out),
            None => write!(f, "{} {} = {}", self.a, self.op, self.out),
        }
    }
}

/// The outcome of one full evaluation.
///
/// `bits` has the common padded width, `steps` has exactly one entry
/// per position, MSB first, matching `bits` positionally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult {
    pub bits: String,
    pub decimal: u32,
    pub steps: Vec<BitResult>,
}

impl OperationResult {
    /// Width of the result (equals the padded operand width).
    pub fn width(&self) -> usize {
        self.steps.len()
    }
}

/// Evaluates `op` bit-by-bit over the operands.
///
/// `b` must be present for the six binary operations and absent for
/// NOT; a mismatch fails with [`Error::OperandArityMismatch`] before
/// any bit is computed. Operands are right-aligned: both are
/// left-zero-padded to the longer length, without touching the
/// caller's values.
pub fn evaluate(
    a: &BinaryString,
    b: Option<&BinaryString>,
    op: Operation,
) -> Result<OperationResult> {
    let got = 1 + usize::from(b.is_some());
    if got != op.arity() {
        return Err(Error::OperandArityMismatch {
            op,
            expected: op.arity(),
            got,
        });
    }

    let width = b.map_or(a.len(), |b| a.len().max(b.len()));
    let padded_a = a.padded_to(width);
    let padded_b = b.map(|b| b.padded_to(width));

    let mut bits = String::with_capacity(width);
    let mut steps = Vec::with_capacity(width);
    for i in 0..width {
        let bit_b = padded_b.as_ref().map(|padded| padded[i]);
        let out = compute_bit(padded_a[i], bit_b, op)?;
        bits.push(out.as_char());
        steps.push(BitResult {
            a: padded_a[i],
            b: bit_b,
            op,
            out,
        });
    }

    let decimal = steps
        .iter()
        .fold(0, |acc, step| (acc << 1) | u32::from(step.out.is_set()));

    Ok(OperationResult {
        bits,
        decimal,
        steps,
    })
}

/// Parses raw strings and delegates to [`evaluate`].
///
/// Front door for callers holding unvalidated text: operands are
/// checked against the `{0,1}` alphabet and width limit, the
/// operation name is matched case-insensitively.
pub fn evaluate_str(a: &str, b: Option<&str>, op: &str) -> Result<OperationResult> {
    let op: Operation = op.parse()?;
    let a: BinaryString = a.parse()?;
    let b: Option<BinaryString> = b.map(str::parse).transpose()?;
    evaluate(&a, b.as_ref(), op)
}
