//! # Prelude: convenient re-exports
//!
//! Single import for engine users:
//!
//! ```
//! use bitboot_core::prelude::*;
//! ```

pub use crate::binary::{BinaryString, Bit, MAX_WIDTH};
pub use crate::engine::{BitResult, OperationResult, evaluate, evaluate_str};
pub use crate::error::{Error, Result};
pub use crate::operation::{Operation, compute_bit};
