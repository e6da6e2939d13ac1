use log::debug;

use crate::expression::ast::{BinaryOp, Expression};
use crate::expression::errors::ExpressionError;

/// One way of combining an unordered pair of expressions.
///
/// The search only visits each pair of positions once, so the swapped
/// variants cover `rhs - lhs` and `rhs / lhs` without walking ordered pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Mul,
    Sub,
    SubSwapped,
    Div,
    DivSwapped,
}

impl Operator {
    /// Every variant, in the order the search tries them
    pub const ALL: [Operator; 6] = [
        Operator::Add,
        Operator::Mul,
        Operator::Sub,
        Operator::SubSwapped,
        Operator::Div,
        Operator::DivSwapped,
    ];

    pub fn op(self) -> BinaryOp {
        match self {
            Operator::Add => BinaryOp::Add,
            Operator::Mul => BinaryOp::Mul,
            Operator::Sub | Operator::SubSwapped => BinaryOp::Sub,
            Operator::Div | Operator::DivSwapped => BinaryOp::Div,
        }
    }

    pub fn symbol(self) -> char {
        self.op().symbol()
    }

    pub fn swaps_operands(self) -> bool {
        matches!(self, Operator::SubSwapped | Operator::DivSwapped)
    }

    /// Build the node for `lhs` and `rhs`, with the children stored in the
    /// order the computation actually uses them.
    ///
    /// # Errors
    ///
    /// Returns the guard that rejected the combination.
    pub fn apply(self, lhs: &Expression, rhs: &Expression) -> Result<Expression, ExpressionError> {
        let (left, right) = if self.swaps_operands() {
            (rhs, lhs)
        } else {
            (lhs, rhs)
        };

        let result = Expression::combine(self.op(), left.clone(), right.clone());
        if let Err(e) = &result {
            debug!("Skipping {:?} on ({}, {}): {}", self, lhs, rhs, e);
        }
        result
    }
}
