#[cfg(test)]
#[path = "../../tests/unit/solver/branch_bound_test.rs"]
mod branch_bound_test;

use super::search::SearchContext;
use super::*;
use crate::utils::{Float, Timer};

/// A depth-first search which abandons a partial path as soon as its cost reaches the cost of
/// the best known tour. Designed for sparse graphs, e.g. road networks.
pub struct BranchAndBound {
    environment: Arc<Environment>,
}

impl BranchAndBound {
    /// Creates a new instance of `BranchAndBound`.
    pub fn new(environment: Arc<Environment>) -> Self {
        Self { environment }
    }
}

impl TourSolver for BranchAndBound {
    fn solve(&self, graph: &Graph, start: VertexId) -> Result<Tour, SolverError> {
        let start = get_start_index(graph, start)?;

        if let Some(vertex) = graph.vertices().iter().find(|vertex| vertex.degree() < 2) {
            return Err(SolverError::Infeasible(format!(
                "vertex '{}' has {} neighbours, at least two are required",
                vertex.id(),
                vertex.degree()
            )));
        }

        let mut context = SearchContext::new(graph, start, self.environment.as_ref());
        context.sort_adjacency();

        let (_, duration) = Timer::measure_duration(|| search(&mut context));

        (self.environment.logger)(&format!(
            "branch-and-bound: {} states explored in {}ms, best cost: {}, interrupted: {}",
            context.expansions(),
            duration.as_millis(),
            context.best_cost(),
            context.is_interrupted()
        ));

        context.into_tour(graph)
    }
}

/// A partially explored search node.
struct Frame {
    vertex: usize,
    cost: Float,
    cursor: usize,
}

fn search(context: &mut SearchContext) {
    let mut stack = vec![Frame { vertex: context.start, cost: 0., cursor: 0 }];

    while let Some(frame) = stack.last_mut() {
        if context.should_stop() {
            break;
        }

        let current = frame.vertex;
        let edges = &context.adjacency[current];
        let next = edges[frame.cursor..].iter().position(|(to, _)| !context.visited[*to]).map(|offset| {
            frame.cursor += offset + 1;
            edges[frame.cursor - 1]
        });

        let Some((next, weight)) = next else {
            stack.pop();
            context.path.pop();
            context.visited[current] = false;
            continue;
        };

        let cost = frame.cost + weight;
        if cost >= context.best_cost() {
            continue;
        }

        context.visited[next] = true;
        context.path.push(next);

        if context.path.len() == context.size() {
            if let Some(closing) = context.closing_cost(next) {
                context.try_improve(cost + closing);
            }
        }

        stack.push(Frame { vertex: next, cost, cursor: 0 });
    }
}
