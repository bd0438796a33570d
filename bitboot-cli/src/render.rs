//! Colorized presentation of an evaluation.
//!
//! Shows the operands in their original unpadded form, one explanation
//! line per bit position (MSB first) and the result with its decimal
//! value. Presentation only; the result was fully computed before any
//! of this prints.

use colored::*;

use bitboot_core::prelude::*;

use crate::prompt::Request;

pub fn show(request: &Request, result: &OperationResult) {
    println!("{}", "== logic unit output ==".bold());
    println!("  A  = {}", request.a.to_string().cyan());
    if let Some(b) = &request.b {
        println!("  B  = {}", b.to_string().cyan());
    }
    println!("  op = {}", request.op.to_string().cyan().bold());
    println!();

    for (i, step) in result.steps.iter().enumerate() {
        println!("  {} {}", format!("bit {i}:").dimmed(), step);
    }

    println!();
    println!(
        "  {} {} {}",
        "=".bold(),
        result.bits.green().bold(),
        format!("(decimal {})", result.decimal).green()
    );
}
