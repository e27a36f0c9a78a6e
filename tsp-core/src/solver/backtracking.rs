#[cfg(test)]
#[path = "../../tests/unit/solver/backtracking_test.rs"]
mod backtracking_test;

use super::search::SearchContext;
use super::*;
use crate::utils::{Float, Timer};

/// An exhaustive depth-first search over outgoing edges which returns an optimal tour.
/// Running time grows factorially with the graph size, so it is only viable for small graphs.
pub struct Backtracking {
    environment: Arc<Environment>,
}

impl Backtracking {
    /// Creates a new instance of `Backtracking`.
    pub fn new(environment: Arc<Environment>) -> Self {
        Self { environment }
    }
}

impl TourSolver for Backtracking {
    fn solve(&self, graph: &Graph, start: VertexId) -> Result<Tour, SolverError> {
        let start = get_start_index(graph, start)?;
        let mut context = SearchContext::new(graph, start, self.environment.as_ref());

        let (_, duration) = Timer::measure_duration(|| visit(&mut context, start, 0.));

        (self.environment.logger)(&format!(
            "backtracking: {} states explored in {}ms, best cost: {}, interrupted: {}",
            context.expansions(),
            duration.as_millis(),
            context.best_cost(),
            context.is_interrupted()
        ));

        context.into_tour(graph)
    }
}

fn visit(context: &mut SearchContext, current: usize, cost: Float) {
    if context.should_stop() {
        return;
    }

    if context.path.len() == context.size() {
        if let Some(closing) = context.closing_cost(current) {
            context.try_improve(cost + closing);
        }
        return;
    }

    for idx in 0..context.adjacency[current].len() {
        let (next, weight) = context.adjacency[current][idx];
        if context.visited[next] {
            continue;
        }

        context.visited[next] = true;
        context.path.push(next);

        visit(context, next, cost + weight);

        context.path.pop();
        context.visited[next] = false;

        if context.is_interrupted() {
            break;
        }
    }
}
