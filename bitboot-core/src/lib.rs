//! # bitboot-core
//!
//! Bitwise logical-operation engine behind the `bitboot` teaching CLI.
//!
//! Applies one of seven logical operations (AND, OR, XOR, NOT, NAND,
//! NOR, XNOR) bit-by-bit to fixed-width binary strings and reports the
//! result bits, their unsigned decimal value and a per-bit explanation
//! of how each position was computed.
//!
//! ## Modules
//!
//! - [`binary`]: [`Bit`] and the validated [`BinaryString`] operand type
//! - [`operation`]: the closed [`Operation`] set and the per-bit truth table
//! - [`engine`]: [`evaluate`] and the [`OperationResult`] it produces
//! - [`error`]: the [`Error`] taxonomy
//!
//! ## Quick Start
//!
//! ```
//! use bitboot_core::prelude::*;
//!
//! let a: BinaryString = "1010".parse()?;
//! let b: BinaryString = "0101".parse()?;
//!
//! let result = evaluate(&a, Some(&b), Operation::Or)?;
//! assert_eq!(result.bits, "1111");
//! assert_eq!(result.decimal, 15);
//! # Ok::<(), Error>(())
//! ```
//!
//! ## Principles
//!
//! 1. **Pure**: same input, same output; no I/O, no clocks, no state
//! 2. **Immutable**: operands are never mutated; padding is an ephemeral copy
//! 3. **Closed**: the operation set is a sealed enum, unknown names are errors,
//!    never a silent default bit

pub mod binary;
pub mod engine;
pub mod error;
pub mod operation;
pub mod prelude;

pub use binary::{BinaryString, Bit, MAX_WIDTH};
pub use engine::{BitResult, OperationResult, evaluate, evaluate_str};
pub use error::{Error, Result};
pub use operation::{Operation, compute_bit};
