#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::registry::OperatorRegistry;

/// Build entries from a space-separated RPN string using the built-in operators.
fn entries(src: &str) -> Vec<Entry> {
    let registry = OperatorRegistry::with_builtins();
    src.split_whitespace()
        .map(|token| match token.parse::<f64>() {
            Ok(value) => Entry::Operand(value),
            Err(_) => registry.lookup(token).unwrap().to_entry(),
        })
        .collect()
}

fn render(entries: &[Entry]) -> String {
    entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

mod complete {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_has_no_result() {
        let stack = entries("");
        let reduction = reduce(&stack);
        assert_eq!(reduction.result, None);
        assert!(reduction.remaining.is_empty());
    }

    #[test]
    fn single_operand() {
        let stack = entries("5");
        let reduction = reduce(&stack);
        assert_eq!(reduction.result, Some(5.0));
        assert!(reduction.remaining.is_empty());
    }

    #[test]
    fn only_top_expression_is_consumed() {
        let stack = entries("1 2");
        let reduction = reduce(&stack);
        assert_eq!(reduction.result, Some(2.0));
        assert_eq!(render(reduction.remaining), "1");
    }

    #[test]
    fn subtraction_is_farther_minus_closer() {
        assert_eq!(reduce(&entries("10 4 −")).result, Some(6.0));
    }

    #[test]
    fn division_is_farther_over_closer() {
        assert_eq!(reduce(&entries("8 2 ÷")).result, Some(4.0));
    }

    #[test]
    fn square_root() {
        assert_eq!(reduce(&entries("9 √")).result, Some(3.0));
    }

    #[test]
    fn nested_expression() {
        // (3 + 4) × 2
        assert_eq!(reduce(&entries("3 4 + 2 ×")).result, Some(14.0));
        // 2 × (3 + 4)
        assert_eq!(reduce(&entries("2 3 4 + ×")).result, Some(14.0));
        // (20 − 8) ÷ √9
        assert_eq!(reduce(&entries("20 8 − 9 √ ÷")).result, Some(4.0));
    }

    #[test]
    fn leftover_below_complete_expression() {
        let stack = entries("7 1 2 +");
        let reduction = reduce(&stack);
        assert_eq!(reduction.result, Some(3.0));
        assert_eq!(render(reduction.remaining), "7");
    }
}

mod incomplete {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn lone_operator() {
        let stack = entries("+");
        let reduction = reduce(&stack);
        assert_eq!(reduction.result, None);
        assert_eq!(reduction.remaining.len(), 1);
    }

    #[test]
    fn binary_missing_farther_operand_keeps_whole_input() {
        let stack = entries("4 +");
        let reduction = reduce(&stack);
        assert_eq!(reduction.result, None);
        assert_eq!(render(reduction.remaining), "4 +");
    }

    #[test]
    fn failure_keeps_input_not_partially_consumed_remainder() {
        // The closer operand `7 3 +` reduces fine, leaving nothing for the
        // farther one; the remainder is still all four entries.
        let stack = entries("7 3 + +");
        let reduction = reduce(&stack);
        assert_eq!(reduction.result, None);
        assert_eq!(render(reduction.remaining), "7 3 + +");
        assert!(std::ptr::eq(reduction.remaining, stack.as_slice()));
    }

    #[test]
    fn failure_propagates_through_unary() {
        let stack = entries("4 + √");
        let reduction = reduce(&stack);
        assert_eq!(reduction.result, None);
        assert_eq!(render(reduction.remaining), "4 + √");
    }
}

mod numeric {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn square_root_of_negative_is_nan() {
        assert!(reduce(&entries("-1 √")).result.unwrap().is_nan());
    }

    #[test]
    fn divide_by_zero_is_infinite() {
        assert_eq!(reduce(&entries("1 0 ÷")).result, Some(f64::INFINITY));
        assert_eq!(reduce(&entries("-1 0 ÷")).result, Some(f64::NEG_INFINITY));
    }

    #[test]
    fn nan_operand_propagates() {
        assert!(reduce(&entries("NaN 1 +")).result.unwrap().is_nan());
    }
}

mod depth {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn long_unary_chain() {
        let registry = OperatorRegistry::with_builtins();
        let root = registry.lookup("√").unwrap().to_entry();
        let mut stack = vec![Entry::Operand(1.0)];
        stack.extend(std::iter::repeat(root).take(100_000));

        assert_eq!(reduce(&stack).result, Some(1.0));
    }

    #[test]
    fn long_addition_chain() {
        let registry = OperatorRegistry::with_builtins();
        let plus = registry.lookup("+").unwrap().to_entry();
        let mut stack = vec![Entry::Operand(1.0)];
        for _ in 0..50_000 {
            stack.push(Entry::Operand(1.0));
            stack.push(plus.clone());
        }

        let reduction = reduce(&stack);
        assert_eq!(reduction.result, Some(50_001.0));
        assert!(reduction.remaining.is_empty());
    }
}
