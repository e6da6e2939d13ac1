use std::fmt;

use log::{info, warn};

use crate::expression::Expression;
use crate::solver::collector::{SearchOutcome, Solution, SolutionSet, SolveMode, collect_solutions};
use crate::solver::errors::SolverError;
use crate::utils::validate_input;

/// Configuration for a solver run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    pub mode: SolveMode,
    /// Sort the numbers ascending before searching
    pub sort_numbers: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            mode: SolveMode::All,
            sort_numbers: true,
        }
    }
}

/// The result of solving one puzzle
#[derive(Debug, Clone)]
pub struct Solutions {
    pub target: u64,
    /// The numbers in the order they were searched
    pub numbers: Vec<u64>,
    pub solutions: Vec<Solution>,
    pub outcome: SearchOutcome,
}

impl Solutions {
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Solution> {
        self.solutions.iter()
    }
}

impl fmt::Display for Solutions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.solutions.is_empty() {
            return writeln!(f, "No solutions");
        }
        for solution in &self.solutions {
            writeln!(f, "{} = {}", self.target, solution)?;
        }
        Ok(())
    }
}

/// Main solver for the numbers game
#[derive(Debug, Clone, Default)]
pub struct NumbersSolver {
    config: SolverConfig,
}

impl NumbersSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Validate the input, then find every distinct solution (or only the
    /// first, depending on the configured mode).
    ///
    /// # Errors
    ///
    /// Returns an error for the first violated input precondition. The search
    /// is not started in that case.
    pub fn solve(&self, numbers: &[u64], target: u64) -> Result<Solutions, SolverError> {
        if let Err(e) = validate_input(numbers, target) {
            warn!("Rejecting input: {}", e);
            return Err(e.into());
        }

        let mut numbers = numbers.to_vec();
        if self.config.sort_numbers {
            numbers.sort_unstable();
        }

        info!(
            "Searching for {} using numbers {:?} ({:?} mode)",
            target, numbers, self.config.mode
        );

        let leaves: Vec<Expression> = numbers.iter().copied().map(Expression::leaf).collect();
        let mut set = SolutionSet::new();
        let outcome = collect_solutions(&leaves, target, self.config.mode, &mut set);

        info!(
            "Found {} distinct solutions from {} matches, exploring {} working sets",
            set.len(),
            outcome.matches,
            outcome.explored
        );

        Ok(Solutions {
            target,
            numbers,
            solutions: set.into_vec(),
            outcome,
        })
    }

    /// Find one expression from the numbers that evaluates to the target
    ///
    /// # Errors
    ///
    /// See [`NumbersSolver::solve`].
    pub fn find_expression(
        &self,
        numbers: &[u64],
        target: u64,
    ) -> Result<Option<Expression>, SolverError> {
        let solver = Self::new(SolverConfig {
            mode: SolveMode::First,
            ..self.config
        });
        let found = solver.solve(numbers, target)?;
        Ok(found
            .solutions
            .into_iter()
            .next()
            .map(Solution::into_expression))
    }
}
