//! Countdown - A solver for the numbers game
//!
//! Given up to six positive integers and a target, this library finds the
//! arithmetic expressions built from `+`, `-`, `*` and exact `/` that reach
//! the target. No intermediate result may be negative and every division must
//! leave no remainder.

pub mod expression;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{BinaryOp, Expression, ExpressionError, Operation, Operator};
pub use solver::{
    NumbersSolver, SearchOutcome, Solution, SolutionSet, Solutions, SolveMode, SolverConfig,
    SolverError, search_numbers as search,
};
pub use utils::{MAX_NUMBERS, UtilsError, validate_input};

/// Find every distinct expression over `numbers` that evaluates to `target`
///
/// This is a convenience function that validates the input, creates a default
/// solver and collects all solutions, deduplicated by their canonical
/// fully parenthesized rendering.
///
/// # Arguments
///
/// * `numbers` - Between one and six positive integers
/// * `target` - The positive integer to reach
///
/// # Errors
///
/// This function will return an error if:
/// * The target is zero
/// * Any number is zero
/// * No numbers, or more than six, are supplied
///
/// # Examples
///
/// ```
/// use countdown::find_expressions;
///
/// let solutions = find_expressions(&[8, 4], 2).unwrap();
/// let texts: Vec<&str> = solutions.iter().map(|s| s.text()).collect();
/// assert_eq!(texts, vec!["(8 / 4)"]);
/// ```
pub fn find_expressions(numbers: &[u64], target: u64) -> Result<Vec<Solution>, SolverError> {
    let solver = NumbersSolver::default();
    Ok(solver.solve(numbers, target)?.solutions)
}
