//! End-to-end tests for the bitwise engine
//!
//! These exercise the public contract: exhaustive truth tables,
//! padding and decimal semantics, determinism, and the rejection of
//! malformed input.

use bitboot_core::prelude::*;

fn bin(s: &str) -> BinaryString {
    BinaryString::parse(s).unwrap()
}

// ===== Truth tables (fully enumerable) =====

#[test]
fn test_binary_truth_tables_exhaustive() {
    // (op, results for (a,b) in (0,0), (0,1), (1,0), (1,1) order)
    let tables = [
        (Operation::And, ['0', '0', '0', '1']),
        (Operation::Or, ['0', '1', '1', '1']),
        (Operation::Xor, ['0', '1', '1', '0']),
        (Operation::Nand, ['1', '1', '1', '0']),
        (Operation::Nor, ['1', '0', '0', '0']),
        (Operation::Xnor, ['1', '0', '0', '1']),
    ];

    for (op, expected) in tables {
        let inputs = [
            (Bit::Zero, Bit::Zero),
            (Bit::Zero, Bit::One),
            (Bit::One, Bit::Zero),
            (Bit::One, Bit::One),
        ];
        for ((a, b), want) in inputs.into_iter().zip(expected) {
            let out = compute_bit(a, Some(b), op).unwrap();
            assert_eq!(out.as_char(), want, "{a} {op} {b}");
        }
    }
}

#[test]
fn test_not_truth_table_exhaustive() {
    assert_eq!(compute_bit(Bit::Zero, None, Operation::Not).unwrap(), Bit::One);
    assert_eq!(compute_bit(Bit::One, None, Operation::Not).unwrap(), Bit::Zero);
}

#[test]
fn test_negated_ops_invert_their_base_ops() {
    for a in [Bit::Zero, Bit::One] {
        for b in [Bit::Zero, Bit::One] {
            let pairs = [
                (Operation::Nand, Operation::And),
                (Operation::Nor, Operation::Or),
                (Operation::Xnor, Operation::Xor),
            ];
            for (negated, base) in pairs {
                let lhs = compute_bit(a, Some(b), negated).unwrap();
                let rhs = !compute_bit(a, Some(b), base).unwrap();
                assert_eq!(lhs, rhs, "{negated} vs NOT {base} at {a},{b}");
            }
        }
    }
}

// ===== Width, padding and decimal semantics =====

#[test]
fn test_shorter_operand_is_left_padded() {
    // "11" right-aligns against "101" as "011"
    let result = evaluate(&bin("101"), Some(&bin("11")), Operation::And).unwrap();
    assert_eq!(result.bits, "001");
    assert_eq!(result.decimal, 1);
}

#[test]
fn test_padding_leaves_originals_untouched() {
    let a = bin("101");
    let b = bin("11");
    evaluate(&a, Some(&b), Operation::And).unwrap();
    assert_eq!(a.to_string(), "101");
    assert_eq!(b.to_string(), "11");
}

#[test]
fn test_or_result_and_decimal() {
    let result = evaluate(&bin("1010"), Some(&bin("0101")), Operation::Or).unwrap();
    assert_eq!(result.bits, "1111");
    assert_eq!(result.decimal, 15);
}

#[test]
fn test_not_inverts_every_position() {
    let result = evaluate(&bin("1100"), None, Operation::Not).unwrap();
    assert_eq!(result.bits, "0011");
    assert_eq!(result.decimal, 3);
}

#[test]
fn test_full_width_operands() {
    let result = evaluate(&bin("11111111"), Some(&bin("00000000")), Operation::Xnor).unwrap();
    assert_eq!(result.bits, "00000000");
    assert_eq!(result.decimal, 0);
    assert_eq!(result.width(), MAX_WIDTH);
}

// ===== Determinism and explanation sequence =====

#[test]
fn test_repeated_evaluation_is_identical() {
    let a = bin("1011");
    let b = bin("0110");
    let first = evaluate(&a, Some(&b), Operation::Nand).unwrap();
    let second = evaluate(&a, Some(&b), Operation::Nand).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_explanation_sequence_invariant() {
    for op in Operation::ALL {
        let b = bin("01");
        let b = (!op.is_unary()).then_some(&b);
        let result = evaluate(&bin("1101"), b, op).unwrap();
        assert_eq!(result.steps.len(), result.width());
        assert_eq!(result.bits.len(), result.width());
        for (step, c) in result.steps.iter().zip(result.bits.chars()) {
            assert_eq!(step.out.as_char(), c, "step order mismatch for {op}");
            assert_eq!(step.op, op);
        }
    }
}

// ===== Error scenarios =====

#[test]
fn test_invalid_character_is_rejected() {
    let err = evaluate_str("102", Some("11"), "AND").unwrap_err();
    assert!(matches!(err, Error::InvalidOperand { .. }), "got {err:?}");
}

#[test]
fn test_unknown_operation_is_rejected() {
    let err = evaluate_str("1", Some("1"), "MAYBE").unwrap_err();
    assert_eq!(err, Error::InvalidOperation("MAYBE".to_string()));
}

#[test]
fn test_arity_mismatch_is_distinct() {
    assert!(matches!(
        evaluate_str("1", None, "AND"),
        Err(Error::OperandArityMismatch { expected: 2, got: 1, .. })
    ));
    assert!(matches!(
        evaluate_str("1", Some("1"), "NOT"),
        Err(Error::OperandArityMismatch { expected: 1, got: 2, .. })
    ));
}

#[test]
fn test_oversized_operand_is_rejected() {
    let nine_bits = "1".repeat(MAX_WIDTH + 1);
    let err = evaluate_str(&nine_bits, Some("1"), "OR").unwrap_err();
    assert!(matches!(err, Error::InvalidOperand { .. }));
}
