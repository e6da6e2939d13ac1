mod collector;
mod core;
mod errors;
mod search;

pub use collector::{SearchOutcome, Solution, SolutionSet, SolveMode, collect_solutions};
pub use self::core::{NumbersSolver, Solutions, SolverConfig};
pub use errors::SolverError;
pub use search::{reduce_working_set, search, search_numbers};


#[cfg(test)]
mod proptests;
