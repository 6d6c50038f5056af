//! Property-based tests for the accumulator
//!
//! These drive the accumulator the way a user would - one symbol and one
//! operator at a time - and check the state-machine invariants hold for
//! arbitrary inputs.

use std::cell::RefCell;
use std::rc::Rc;

use keypad_calculator::prelude::*;
use proptest::prelude::*;

type Acc = Accumulator<Box<dyn FnMut(&DisplaySnapshot)>>;

fn recording() -> (Acc, Rc<RefCell<Vec<DisplaySnapshot>>>) {
    let emitted = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&emitted);
    let acc = Accumulator::new(Box::new(move |snap: &DisplaySnapshot| {
        sink.borrow_mut().push(snap.clone());
    }) as Box<dyn FnMut(&DisplaySnapshot)>);
    (acc, emitted)
}

fn type_str(acc: &mut Acc, input: &str) {
    for ch in input.chars() {
        acc.append_symbol(ch);
    }
}

// ===== Strategy definitions =====

/// A plausible typed operand: digits with an optional fractional part
fn operand_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,8}",
        "[0-9]{1,6}\\.[0-9]{1,6}",
    ]
}

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

// ===== Entry properties =====

proptest! {
    /// Typed symbols round-trip into the current operand verbatim
    #[test]
    fn prop_typed_operand_roundtrips(operand in operand_strategy()) {
        let (mut acc, _emitted) = recording();
        type_str(&mut acc, &operand);
        prop_assert_eq!(acc.current_operand(), operand.as_str());
    }

    /// The current operand never holds more than one decimal point
    #[test]
    fn prop_single_decimal_point_invariant(input in "[0-9.]{0,24}") {
        let (mut acc, _emitted) = recording();
        type_str(&mut acc, &input);
        prop_assert!(acc.current_operand().matches('.').count() <= 1);
    }

    /// Deleting as many symbols as were typed always empties the operand
    #[test]
    fn prop_delete_drains_operand(operand in operand_strategy()) {
        let (mut acc, _emitted) = recording();
        type_str(&mut acc, &operand);
        for _ in 0..operand.len() + 2 {
            acc.delete_symbol();
        }
        prop_assert_eq!(acc.current_operand(), "");
    }
}

// ===== Pending-operation properties =====

proptest! {
    /// Applying an operator captures the left operand and shows it with the
    /// operator symbol
    #[test]
    fn prop_operator_captures_operand(
        operand in operand_strategy(),
        op in operator_strategy(),
    ) {
        let (mut acc, emitted) = recording();
        type_str(&mut acc, &operand);
        acc.apply_operator(op);

        prop_assert_eq!(acc.previous_operand(), operand.as_str());
        prop_assert_eq!(acc.current_operand(), "");
        prop_assert_eq!(acc.operator(), Some(op));

        let snap = emitted.borrow().last().cloned().unwrap();
        prop_assert!(snap.previous.ends_with(op.symbol()));
        // Stripping the separators and the operator suffix recovers the
        // operand: integer part normalized, fraction kept verbatim
        let shown = snap.previous
            .trim_end_matches(op.symbol())
            .trim_end()
            .replace(',', "");
        let (int_part, frac_part) = match operand.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (operand.as_str(), None),
        };
        let mut expected = int_part.parse::<f64>().unwrap().to_string();
        if let Some(frac) = frac_part {
            expected.push('.');
            expected.push_str(frac);
        }
        prop_assert_eq!(shown, expected);
    }

    /// Chained entry evaluates left-to-right, exactly as two explicit steps
    #[test]
    fn prop_chaining_is_left_associative(
        a in operand_strategy(),
        b in operand_strategy(),
        c in operand_strategy(),
        op1 in operator_strategy(),
        op2 in operator_strategy(),
    ) {
        let (mut acc, _emitted) = recording();
        type_str(&mut acc, &a);
        acc.apply_operator(op1);
        type_str(&mut acc, &b);
        acc.apply_operator(op2);
        type_str(&mut acc, &c);
        acc.calculate();

        let step1 = op1.apply(a.parse().unwrap(), b.parse().unwrap());
        // The intermediate result lives as a display string between steps
        let step1: f64 = step1.to_string().parse().unwrap();
        let expected = op2.apply(step1, c.parse().unwrap());

        prop_assert_eq!(acc.current_operand(), expected.to_string());
    }

    /// calculate without a pending operator never changes state
    #[test]
    fn prop_calculate_without_operator_is_noop(operand in operand_strategy()) {
        let (mut acc, emitted) = recording();
        type_str(&mut acc, &operand);
        let emissions = emitted.borrow().len();
        acc.calculate();
        prop_assert_eq!(acc.current_operand(), operand.as_str());
        prop_assert_eq!(emitted.borrow().len(), emissions);
    }

    /// clear returns to the entry state from anywhere
    #[test]
    fn prop_clear_resets_everything(
        a in operand_strategy(),
        b in "[0-9]{0,4}",
        op in operator_strategy(),
    ) {
        let (mut acc, emitted) = recording();
        type_str(&mut acc, &a);
        acc.apply_operator(op);
        type_str(&mut acc, &b);
        acc.clear();

        prop_assert_eq!(acc.current_operand(), "");
        prop_assert_eq!(acc.previous_operand(), "");
        prop_assert!(acc.operator().is_none());
        prop_assert_eq!(
            emitted.borrow().last().cloned().unwrap(),
            DisplaySnapshot::default()
        );
    }

    /// No input sequence panics or surfaces an error, division by zero
    /// included
    #[test]
    fn prop_no_input_sequence_panics(
        operands in proptest::collection::vec(operand_strategy(), 1..5),
        ops in proptest::collection::vec(operator_strategy(), 1..5),
    ) {
        let (mut acc, _emitted) = recording();
        for (operand, op) in operands.iter().zip(&ops) {
            type_str(&mut acc, operand);
            acc.apply_operator(*op);
        }
        type_str(&mut acc, "0");
        acc.calculate();
        // Whatever the numbers did, the snapshot is still well-formed
        let snap = acc.snapshot();
        prop_assert!(snap.previous.is_empty());
        let _ = snap.current;
    }
}
