#[cfg(test)]
#[path = "../../tests/unit/solver/christofides_test.rs"]
mod christofides_test;

use super::triangular::create_spanning_tree;
use super::*;
use crate::algorithms::*;
use crate::utils::Timer;

/// A Christofides-style heuristic: the spanning tree is extended with a matching of its odd
/// degree vertices, an Euler circuit of the result is shortcut into a tour.
///
/// With `MatchingMode::Greedy` the matching is not of minimum weight, so the classic 1.5
/// approximation bound does not hold; `MatchingMode::Exact` restores it for small amounts of
/// odd vertices.
pub struct Christofides {
    environment: Arc<Environment>,
    spanning: SpanningMode,
    matching: MatchingMode,
}

impl Christofides {
    /// Creates a new instance of `Christofides` with default spanning and matching modes.
    pub fn new(environment: Arc<Environment>) -> Self {
        Self { environment, spanning: SpanningMode::default(), matching: MatchingMode::default() }
    }

    /// Sets a spanning tree mode.
    pub fn with_spanning_mode(mut self, mode: SpanningMode) -> Self {
        self.spanning = mode;
        self
    }

    /// Sets a matching mode.
    pub fn with_matching_mode(mut self, mode: MatchingMode) -> Self {
        self.matching = mode;
        self
    }

    fn match_vertices(&self, graph: &Graph, odd: &[usize]) -> Vec<(usize, usize)> {
        let distance = |from: usize, to: usize| graph.distance(from, to);

        Timer::measure_duration_with_callback(
            || match self.matching {
                MatchingMode::Greedy => greedy_matching(odd, distance),
                MatchingMode::Exact => exact_matching(odd, distance).unwrap_or_else(|| {
                    (self.environment.logger)(&format!(
                        "{} odd vertices exceed exact matching limit of {EXACT_MATCHING_LIMIT}, fallback to greedy",
                        odd.len()
                    ));
                    greedy_matching(odd, distance)
                }),
            },
            |duration| {
                (self.environment.logger)(&format!(
                    "matching ({:?}) of {} odd vertices built in {}ms",
                    self.matching,
                    odd.len(),
                    duration.as_millis()
                ))
            },
        )
    }
}

impl TourSolver for Christofides {
    fn solve(&self, graph: &Graph, start: VertexId) -> Result<Tour, SolverError> {
        let start_index = get_start_index(graph, start)?;

        let tree = create_spanning_tree(graph, start, self.spanning, self.environment.as_ref())?;
        (self.environment.logger)(&format!("christofides: lower bound is {}", tree.weight()));

        let mut companion = create_companion(graph, &tree);

        let odd = (0..graph.size()).filter(|&index| tree.degree(index) % 2 == 1).collect::<Vec<_>>();
        self.match_vertices(graph, odd.as_slice()).into_iter().for_each(|(from, to)| {
            companion.add_bidirectional_edge(graph.vertex(from).id(), graph.vertex(to).id(), graph.distance(from, to));
        });

        let circuit = euler_circuit(&companion, start_index)
            .ok_or_else(|| SolverError::Infeasible("cannot build euler circuit".to_string()))?;

        Ok(Tour::from_indices(graph, shortcut(circuit.as_slice()).as_slice()))
    }
}

/// Creates a graph with the same vertices, in the same order, which has only spanning tree edges.
fn create_companion(graph: &Graph, tree: &SpanningTree) -> Graph {
    let mut companion = Graph::new();

    graph.vertices().iter().for_each(|vertex| {
        companion.add_vertex_with_coordinate(vertex.id(), *vertex.coordinate());
    });

    tree.edges().for_each(|(parent, child, weight)| {
        companion.add_bidirectional_edge(graph.vertex(parent).id(), graph.vertex(child).id(), weight);
    });

    companion
}
