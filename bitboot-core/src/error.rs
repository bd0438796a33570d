//! Error types for the bitwise engine

use crate::operation::Operation;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by operand validation and evaluation.
///
/// The prompt loop in the CLI validates everything before the engine
/// runs, so in normal operation these are unreachable; they exist to
/// make the contract explicit and testable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A binary string failed the alphabet/length invariant.
    #[error("invalid operand '{input}': {reason}")]
    InvalidOperand { input: String, reason: String },

    /// The operation name is outside the seven-symbol set.
    #[error("unknown operation '{0}' (expected AND, OR, XOR, NOT, NAND, NOR or XNOR)")]
    InvalidOperation(String),

    /// Wrong number of operands for the operation (NOT is unary, the rest are binary).
    #[error("{op} takes {expected} operand(s), got {got}")]
    OperandArityMismatch {
        op: Operation,
        expected: usize,
        got: usize,
    },
}
