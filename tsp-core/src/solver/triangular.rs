#[cfg(test)]
#[path = "../../tests/unit/solver/triangular_test.rs"]
mod triangular_test;

use super::*;
use crate::algorithms::{SpanningMode, SpanningTree, build_spanning_tree};
use crate::utils::Timer;

/// Visits vertices in preorder of a minimum spanning tree. On graphs which respect the triangle
/// inequality the tour costs at most twice the optimum.
pub struct TriangularApproximation {
    environment: Arc<Environment>,
    mode: SpanningMode,
}

impl TriangularApproximation {
    /// Creates a new instance of `TriangularApproximation` with default spanning mode.
    pub fn new(environment: Arc<Environment>) -> Self {
        Self { environment, mode: SpanningMode::default() }
    }

    /// Sets a spanning tree mode.
    pub fn with_mode(mut self, mode: SpanningMode) -> Self {
        self.mode = mode;
        self
    }
}

impl TourSolver for TriangularApproximation {
    fn solve(&self, graph: &Graph, start: VertexId) -> Result<Tour, SolverError> {
        get_start_index(graph, start)?;

        let tree = create_spanning_tree(graph, start, self.mode, self.environment.as_ref())?;

        Ok(Tour::from_indices(graph, tree.preorder().as_slice()))
    }
}

/// Builds a spanning tree and checks that it covers every vertex.
pub(crate) fn create_spanning_tree(
    graph: &Graph,
    start: VertexId,
    mode: SpanningMode,
    environment: &Environment,
) -> Result<SpanningTree, SolverError> {
    let mode = mode.resolve(graph);
    let tree = Timer::measure_duration_with_callback(
        || build_spanning_tree(graph, start, mode),
        |duration| (environment.logger)(&format!("spanning tree ({mode:?}) built in {}ms", duration.as_millis())),
    )
    .ok_or(SolverError::VertexNotFound(start))?;

    if !tree.is_spanning() {
        return Err(SolverError::Disconnected { reached: tree.reached(), total: graph.size() });
    }

    Ok(tree)
}
