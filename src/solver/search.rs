use log::{debug, trace};

use crate::expression::{Expression, Operator};

/// Depth-first walk over every way of combining a working set.
struct Search<'a, F> {
    target: u64,
    on_found: &'a mut F,
    explored: usize,
}

impl<F> Search<'_, F>
where
    F: FnMut(&Expression) -> bool,
{
    fn run(&mut self, expressions: &[Expression]) -> bool {
        self.explored += 1;
        trace!("Exploring working set of {} expressions", expressions.len());

        for expr in expressions {
            if expr.value() == self.target {
                debug!("Found match: {}", expr);
                if (self.on_found)(expr) {
                    return true;
                }
            }
        }

        for (i, lhs) in expressions.iter().enumerate() {
            for (j, rhs) in expressions.iter().enumerate().skip(i + 1) {
                for operator in Operator::ALL {
                    let Ok(combined) = operator.apply(lhs, rhs) else {
                        continue;
                    };

                    let reduced = reduce_working_set(expressions, combined, i, j);
                    if self.run(&reduced) {
                        return true;
                    }
                }
            }
        }

        false
    }
}

/// Build the next working set: `combined` takes position `i`, position `j`
/// is dropped and everything else keeps its relative order.
pub fn reduce_working_set(
    expressions: &[Expression],
    combined: Expression,
    i: usize,
    j: usize,
) -> Vec<Expression> {
    let mut combined = Some(combined);
    let mut reduced = Vec::with_capacity(expressions.len().saturating_sub(1));

    for (k, expr) in expressions.iter().enumerate() {
        if k == i {
            if let Some(node) = combined.take() {
                reduced.push(node);
            }
        } else if k != j {
            reduced.push(expr.clone());
        }
    }

    reduced
}

/// Search every combination of `expressions` for ones equal to `target`.
///
/// `on_found` is called for each matching expression as it is reached. The
/// same expression can be reached along different paths, so callers that
/// want distinct solutions should deduplicate by rendering. Returning `true`
/// from `on_found` stops the whole search, and `search` then returns `true`.
/// Returns `false` once every combination has been tried.
pub fn search<F>(expressions: &[Expression], target: u64, mut on_found: F) -> bool
where
    F: FnMut(&Expression) -> bool,
{
    search_counted(expressions, target, &mut on_found).0
}

/// Like [`search`], also returning how many working sets were explored
pub(crate) fn search_counted<F>(expressions: &[Expression], target: u64, on_found: &mut F) -> (bool, usize)
where
    F: FnMut(&Expression) -> bool,
{
    let mut state = Search {
        target,
        on_found,
        explored: 0,
    };
    let stopped = state.run(expressions);
    debug!(
        "Search for {} explored {} working sets (stopped early: {})",
        target, state.explored, stopped
    );
    (stopped, state.explored)
}

/// Search the numbers themselves. Every number must be positive and there
/// should be at most six of them; larger inputs are accepted but the work
/// grows combinatorially.
pub fn search_numbers<F>(numbers: &[u64], target: u64, on_found: F) -> bool
where
    F: FnMut(&Expression) -> bool,
{
    let leaves: Vec<Expression> = numbers.iter().copied().map(Expression::leaf).collect();
    search(&leaves, target, on_found)
}
