//! Property-based tests for the search engine.

use proptest::prelude::*;

use crate::expression::{BinaryOp, Expression};
use crate::solver::search_numbers;

fn game_numbers() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(1u64..=25, 1..=4)
}

/// Check every node against the combination rules
fn is_well_formed(expr: &Expression) -> bool {
    let Some(op) = expr.as_operation() else {
        return expr.value() > 0;
    };
    let (l, r) = (op.left().value(), op.right().value());
    let node_ok = match op.op() {
        BinaryOp::Add => l.checked_add(r) == Some(op.value()),
        BinaryOp::Mul => l.checked_mul(r) == Some(op.value()),
        BinaryOp::Sub => l >= r && l - r == op.value(),
        BinaryOp::Div => r != 0 && l % r == 0 && l / r == op.value(),
    };
    node_ok && is_well_formed(op.left()) && is_well_formed(op.right())
}

proptest! {
    #[test]
    fn reported_expressions_hit_target(numbers in game_numbers(), target in 1u64..=200) {
        let mut reported = Vec::new();
        let stopped = search_numbers(&numbers, target, |expr| {
            reported.push(expr.clone());
            false
        });
        prop_assert!(!stopped);
        for expr in &reported {
            prop_assert_eq!(expr.value(), target);
            prop_assert!(is_well_formed(expr), "malformed: {}", expr);
            prop_assert!(expr.leaf_count() <= numbers.len());
        }
    }

    #[test]
    fn rendering_is_deterministic(numbers in game_numbers(), target in 1u64..=200) {
        search_numbers(&numbers, target, |expr| {
            let first = expr.render();
            assert_eq!(first, expr.render());
            assert_eq!(first, expr.clone().render());
            assert_eq!(first.matches('(').count(), expr.operation_count());
            false
        });
    }

    #[test]
    fn stopping_reports_exactly_once(numbers in game_numbers()) {
        // The first number is always reachable as a leaf
        let target = numbers[0];
        let mut calls = 0;
        let stopped = search_numbers(&numbers, target, |_| {
            calls += 1;
            true
        });
        prop_assert!(stopped);
        prop_assert_eq!(calls, 1);
    }
}
