use crate::expression::ast::{BinaryOp, Expression};
use crate::expression::errors::ExpressionError;
use crate::expression::operator::Operator;

fn leaf(n: u64) -> Expression {
    Expression::leaf(n)
}

#[test]
fn test_leaf_value_and_render() {
    let expr = leaf(25);
    assert_eq!(expr.value(), 25);
    assert!(expr.is_leaf());
    assert_eq!(expr.render(), "25");
    assert_eq!(expr.leaf_count(), 1);
    assert_eq!(expr.operation_count(), 0);
}

#[test]
fn test_combine_caches_value() {
    let result = Expression::combine(BinaryOp::Mul, leaf(6), leaf(7));
    assert!(result.is_ok());
    if let Ok(expr) = result {
        assert_eq!(expr.value(), 42);
        assert!(!expr.is_leaf());
        assert_eq!(expr.render(), "(6 * 7)");
    }
}

#[test]
fn test_subtraction_rejects_negative() {
    let result = Expression::combine(BinaryOp::Sub, leaf(3), leaf(7));
    assert_eq!(
        result,
        Err(ExpressionError::NegativeResult { left: 3, right: 7 })
    );
}

#[test]
fn test_subtraction_allows_zero() {
    let result = Expression::combine(BinaryOp::Sub, leaf(5), leaf(5));
    assert!(result.is_ok());
    if let Ok(expr) = result {
        assert_eq!(expr.value(), 0);
    }
}

#[test]
fn test_division_rejects_remainder() {
    let result = Expression::combine(BinaryOp::Div, leaf(7), leaf(2));
    assert_eq!(
        result,
        Err(ExpressionError::InexactDivision { left: 7, right: 2 })
    );
}

#[test]
fn test_division_by_zero_node() {
    let zero = Expression::combine(BinaryOp::Sub, leaf(4), leaf(4));
    assert!(zero.is_ok());
    if let Ok(zero) = zero {
        let result = Expression::combine(BinaryOp::Div, leaf(8), zero);
        assert_eq!(result, Err(ExpressionError::DivisionByZero));
    }
}

#[test]
fn test_multiplication_overflow_is_rejected() {
    let result = Expression::combine(BinaryOp::Mul, leaf(u64::MAX), leaf(2));
    assert_eq!(result, Err(ExpressionError::Overflow));
}

#[test]
fn test_nested_render_is_fully_parenthesized() {
    let sum = Expression::combine(BinaryOp::Add, leaf(1), leaf(2));
    assert!(sum.is_ok());
    if let Ok(sum) = sum {
        let product = Expression::combine(BinaryOp::Mul, sum, leaf(3));
        assert!(product.is_ok());
        if let Ok(product) = product {
            assert_eq!(product.render(), "((1 + 2) * 3)");
            assert_eq!(product.render(), product.render());
            assert_eq!(product.value(), 9);
            assert_eq!(product.leaf_count(), 3);
            assert_eq!(product.operation_count(), 2);
        }
    }
}

#[test]
fn test_identical_structure_renders_identically() {
    let a = Expression::combine(BinaryOp::Add, leaf(2), leaf(2));
    let b = Expression::combine(BinaryOp::Add, leaf(2), leaf(2));
    assert!(a.is_ok() && b.is_ok());
    if let (Ok(a), Ok(b)) = (a, b) {
        assert_eq!(a, b);
        assert_eq!(a.render(), b.render());
    }
}

#[test]
fn test_operator_order_and_symbols() {
    let symbols: Vec<char> = Operator::ALL.iter().map(|op| op.symbol()).collect();
    assert_eq!(symbols, vec!['+', '*', '-', '-', '/', '/']);
    assert!(Operator::SubSwapped.swaps_operands());
    assert!(Operator::DivSwapped.swaps_operands());
    assert!(!Operator::Sub.swaps_operands());
}

#[test]
fn test_swapped_subtraction_stores_effective_order() {
    let result = Operator::SubSwapped.apply(&leaf(3), &leaf(10));
    assert!(result.is_ok());
    if let Ok(expr) = result {
        assert_eq!(expr.value(), 7);
        assert_eq!(expr.render(), "(10 - 3)");
        if let Some(op) = expr.as_operation() {
            assert_eq!(op.left(), &leaf(10));
            assert_eq!(op.right(), &leaf(3));
        }
    }
    assert!(Operator::SubSwapped.apply(&leaf(10), &leaf(3)).is_err());
}

#[test]
fn test_swapped_division_matches_plain_division() {
    let plain = Operator::Div.apply(&leaf(8), &leaf(4));
    let swapped = Operator::DivSwapped.apply(&leaf(4), &leaf(8));
    assert!(plain.is_ok() && swapped.is_ok());
    if let (Ok(plain), Ok(swapped)) = (plain, swapped) {
        assert_eq!(plain.render(), "(8 / 4)");
        assert_eq!(plain.render(), swapped.render());
    }
    assert!(Operator::DivSwapped.apply(&leaf(8), &leaf(4)).is_err());
}

#[test]
fn test_compact_string_drops_redundant_parens() {
    let Ok(sum) = Expression::combine(BinaryOp::Add, leaf(1), leaf(2)) else {
        panic!("1 + 2 should be valid");
    };
    let Ok(diff) = Expression::combine(BinaryOp::Sub, leaf(9), leaf(4)) else {
        panic!("9 - 4 should be valid");
    };
    let Ok(product) = Expression::combine(BinaryOp::Mul, sum.clone(), leaf(3)) else {
        panic!("(1 + 2) * 3 should be valid");
    };
    assert_eq!(product.to_compact_string(), "(1 + 2) * 3");

    let Ok(chain) = Expression::combine(BinaryOp::Add, sum, leaf(3)) else {
        panic!("(1 + 2) + 3 should be valid");
    };
    assert_eq!(chain.to_compact_string(), "1 + 2 + 3");

    let Ok(nested) = Expression::combine(BinaryOp::Sub, leaf(10), diff) else {
        panic!("10 - (9 - 4) should be valid");
    };
    assert_eq!(nested.to_compact_string(), "10 - (9 - 4)");
}

#[test]
fn test_latex_rendering() {
    let Ok(quotient) = Expression::combine(BinaryOp::Div, leaf(100), leaf(4)) else {
        panic!("100 / 4 should be valid");
    };
    let Ok(sum) = Expression::combine(BinaryOp::Add, leaf(1), leaf(2)) else {
        panic!("1 + 2 should be valid");
    };
    let Ok(product) = Expression::combine(BinaryOp::Mul, sum, quotient) else {
        panic!("(1 + 2) * (100 / 4) should be valid");
    };
    assert_eq!(product.to_latex(), "\\left(1 + 2\\right) \\cdot \\frac{100}{4}");
    assert_eq!(leaf(7).to_latex(), "7");
}
