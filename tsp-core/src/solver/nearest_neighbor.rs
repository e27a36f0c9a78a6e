#[cfg(test)]
#[path = "../../tests/unit/solver/nearest_neighbor_test.rs"]
mod nearest_neighbor_test;

use super::*;
use crate::utils::compare_floats;

/// Builds a tour greedily: always moves to the closest unvisited vertex.
pub struct NearestNeighbor {
    environment: Arc<Environment>,
}

impl NearestNeighbor {
    /// Creates a new instance of `NearestNeighbor`.
    pub fn new(environment: Arc<Environment>) -> Self {
        Self { environment }
    }
}

impl TourSolver for NearestNeighbor {
    fn solve(&self, graph: &Graph, start: VertexId) -> Result<Tour, SolverError> {
        let start = get_start_index(graph, start)?;
        let size = graph.size();

        let mut visited = vec![false; size];
        let mut order = Vec::with_capacity(size);
        visited[start] = true;
        order.push(start);

        let mut current = start;
        while order.len() < size {
            let Some((next, _)) = (0..size)
                .filter(|&index| !visited[index])
                .map(|index| (index, graph.distance(current, index)))
                .min_by(|(_, a), (_, b)| compare_floats(*a, *b))
            else {
                break;
            };

            visited[next] = true;
            order.push(next);
            current = next;
        }

        let tour = Tour::from_indices(graph, &order);
        (self.environment.logger)(&format!("nearest-neighbor: tour cost is {}", tour.cost()));

        Ok(tour)
    }
}
