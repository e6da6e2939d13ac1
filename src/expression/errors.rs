use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("{left} is not evenly divisible by {right}")]
    InexactDivision { left: u64, right: u64 },
    #[error("Subtracting {right} from {left} gives a negative result")]
    NegativeResult { left: u64, right: u64 },
    #[error("Result does not fit in a 64-bit unsigned integer")]
    Overflow,
}
