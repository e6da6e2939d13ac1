//! Expression trees over the input numbers and their renderings

mod ast;
mod display;
mod errors;
mod latex;
mod operator;

pub use ast::{BinaryOp, Expression, Operation};
pub use errors::ExpressionError;
pub use operator::Operator;

#[cfg(test)]
mod tests;
