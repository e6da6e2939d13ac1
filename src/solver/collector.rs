use std::collections::HashSet;
use std::fmt;

use log::debug;

use crate::expression::Expression;
use crate::solver::search::search_counted;

/// Whether to stop at the first solution or keep looking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolveMode {
    First,
    #[default]
    All,
}

/// A distinct solution and its canonical rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    text: String,
    expression: Expression,
}

impl Solution {
    pub fn new(expression: Expression) -> Self {
        Self {
            text: expression.render(),
            expression,
        }
    }

    /// Canonical fully parenthesized form
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn into_expression(self) -> Expression {
        self.expression
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Solutions deduplicated by canonical rendering, kept in discovery order
#[derive(Debug, Clone, Default)]
pub struct SolutionSet {
    seen: HashSet<String>,
    solutions: Vec<Solution>,
}

impl SolutionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `expression` unless an identical rendering is already present.
    /// Returns `true` if it was new.
    pub fn insert(&mut self, expression: &Expression) -> bool {
        let solution = Solution::new(expression.clone());
        if self.seen.contains(solution.text()) {
            return false;
        }
        self.seen.insert(solution.text.clone());
        self.solutions.push(solution);
        true
    }

    pub fn contains(&self, text: &str) -> bool {
        self.seen.contains(text)
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Solution> {
        self.solutions.iter()
    }

    pub fn into_vec(self) -> Vec<Solution> {
        self.solutions
    }
}

impl<'a> IntoIterator for &'a SolutionSet {
    type Item = &'a Solution;
    type IntoIter = std::slice::Iter<'a, Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// What happened during one collecting search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The callback asked the search to stop
    pub stopped_early: bool,
    /// Matches reported by the search, duplicates included
    pub matches: usize,
    /// Distinct solutions added to the set by this search
    pub new_solutions: usize,
    pub explored: usize,
}

/// Run the search and gather every match into `solutions`.
pub fn collect_solutions(
    expressions: &[Expression],
    target: u64,
    mode: SolveMode,
    solutions: &mut SolutionSet,
) -> SearchOutcome {
    let mut matches = 0;
    let mut new_solutions = 0;

    let mut on_found = |expr: &Expression| {
        matches += 1;
        if solutions.insert(expr) {
            new_solutions += 1;
        } else {
            debug!("Ignoring duplicate solution {}", expr);
        }
        mode == SolveMode::First
    };

    let (stopped_early, explored) = search_counted(expressions, target, &mut on_found);

    SearchOutcome {
        stopped_early,
        matches,
        new_solutions,
        explored,
    }
}
