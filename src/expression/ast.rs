use crate::expression::errors::ExpressionError;

/// The four arithmetic operations an [`Operation`] node can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
        }
    }

    /// Apply the operation to two values, enforcing the game's rules.
    ///
    /// # Errors
    ///
    /// Returns an error when the result would be negative, when a division is
    /// by zero or leaves a remainder, or when the result does not fit in a `u64`.
    pub fn evaluate(self, left: u64, right: u64) -> Result<u64, ExpressionError> {
        match self {
            BinaryOp::Add => left.checked_add(right).ok_or(ExpressionError::Overflow),
            BinaryOp::Mul => left.checked_mul(right).ok_or(ExpressionError::Overflow),
            BinaryOp::Sub => {
                if right > left {
                    Err(ExpressionError::NegativeResult { left, right })
                } else {
                    Ok(left - right)
                }
            }
            BinaryOp::Div => {
                if right == 0 {
                    Err(ExpressionError::DivisionByZero)
                } else if left % right != 0 {
                    Err(ExpressionError::InexactDivision { left, right })
                } else {
                    Ok(left / right)
                }
            }
        }
    }
}

/// A binary node whose value was computed, and checked, when it was built
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Operation {
    value: u64,
    op: BinaryOp,
    left: Box<Expression>,
    right: Box<Expression>,
}

impl Operation {
    /// # Errors
    ///
    /// Returns the guard failure from [`BinaryOp::evaluate`] if `left op right`
    /// is not a legal combination.
    pub fn new(op: BinaryOp, left: Expression, right: Expression) -> Result<Self, ExpressionError> {
        let value = op.evaluate(left.value(), right.value())?;
        Ok(Self {
            value,
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn op(&self) -> BinaryOp {
        self.op
    }

    pub fn symbol(&self) -> char {
        self.op.symbol()
    }

    pub fn left(&self) -> &Expression {
        &self.left
    }

    pub fn right(&self) -> &Expression {
        &self.right
    }
}

/// An arithmetic expression built from the input numbers
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    Leaf(u64),
    Operation(Operation),
}

impl Expression {
    pub fn leaf(value: u64) -> Self {
        Expression::Leaf(value)
    }

    /// Combine two expressions into a checked operation node.
    ///
    /// # Errors
    ///
    /// See [`Operation::new`].
    pub fn combine(op: BinaryOp, left: Expression, right: Expression) -> Result<Self, ExpressionError> {
        Operation::new(op, left, right).map(Expression::Operation)
    }

    /// The cached value of this expression. Never re-evaluates the children.
    pub fn value(&self) -> u64 {
        match self {
            Expression::Leaf(n) => *n,
            Expression::Operation(op) => op.value(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Expression::Leaf(_))
    }

    pub fn as_operation(&self) -> Option<&Operation> {
        match self {
            Expression::Leaf(_) => None,
            Expression::Operation(op) => Some(op),
        }
    }

    /// Number of input numbers used by this expression
    pub fn leaf_count(&self) -> usize {
        match self {
            Expression::Leaf(_) => 1,
            Expression::Operation(op) => op.left().leaf_count() + op.right().leaf_count(),
        }
    }

    pub fn operation_count(&self) -> usize {
        match self {
            Expression::Leaf(_) => 0,
            Expression::Operation(op) => {
                1 + op.left().operation_count() + op.right().operation_count()
            }
        }
    }

    /// Canonical fully parenthesized infix form, used for display and deduplication
    pub fn render(&self) -> String {
        self.to_string()
    }
}
