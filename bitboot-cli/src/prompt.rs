//! Interactive input collection.
//!
//! Asks for the operation first (so the arity is known), then one or
//! two binary strings. Invalid input gets a colored hint and a fresh
//! prompt; the engine only ever sees validated values. EOF at any
//! prompt yields `None` so the caller can shut down gracefully.

use std::io::{self, BufRead, Write};

use colored::*;

use bitboot_core::prelude::*;

/// One validated evaluation request.
#[derive(Debug)]
pub struct Request {
    pub op: Operation,
    pub a: BinaryString,
    pub b: Option<BinaryString>,
}

pub fn read_request() -> anyhow::Result<Option<Request>> {
    let stdin = io::stdin();
    read_request_from(&mut stdin.lock())
}

fn read_request_from(input: &mut impl BufRead) -> anyhow::Result<Option<Request>> {
    let Some(op) = ask_operation(input)? else {
        return Ok(None);
    };
    let Some(a) = ask_operand(input, "A")? else {
        return Ok(None);
    };
    let b = if op.is_unary() {
        None
    } else {
        match ask_operand(input, "B")? {
            Some(b) => Some(b),
            None => return Ok(None),
        }
    };
    Ok(Some(Request { op, a, b }))
}

fn ask_operation(input: &mut impl BufRead) -> anyhow::Result<Option<Operation>> {
    let names: Vec<&str> = Operation::ALL.iter().map(|op| op.name()).collect();
    loop {
        print!("{} ", format!("operation ({}):", names.join(" ")).bold());
        io::stdout().flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.parse::<Operation>() {
            Ok(op) => return Ok(Some(op)),
            Err(e) => println!("{} {}", "!".yellow().bold(), e),
        }
    }
}

fn ask_operand(input: &mut impl BufRead, label: &str) -> anyhow::Result<Option<BinaryString>> {
    loop {
        print!(
            "{} ",
            format!("operand {label} (1-{MAX_WIDTH} bits, e.g. 1010):").bold()
        );
        io::stdout().flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.parse::<BinaryString>() {
            Ok(value) => return Ok(Some(value)),
            Err(e) => println!("{} {}", "!".yellow().bold(), e),
        }
    }
}

/// Reads one trimmed line; `None` on EOF.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}
