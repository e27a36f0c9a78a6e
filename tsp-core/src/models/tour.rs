#[cfg(test)]
#[path = "../../tests/unit/models/tour_test.rs"]
mod tour_test;

use crate::models::{Graph, VertexId};
use crate::utils::Float;
use rustc_hash::FxHashSet;

/// A closed circuit which visits every vertex exactly once and returns to its start.
#[derive(Clone, Debug, PartialEq)]
pub struct Tour {
    path: Vec<VertexId>,
    cost: Float,
}

impl Tour {
    /// Creates a new tour from a closed path (start is repeated at the end) and its total cost.
    pub fn new(path: Vec<VertexId>, cost: Float) -> Self {
        Self { path, cost }
    }

    /// Creates a tour from vertex positions in visiting order: the tour is closed back to the
    /// first position and its cost is a sum of consecutive graph distances.
    pub fn from_indices(graph: &Graph, order: &[usize]) -> Self {
        let cost = order
            .windows(2)
            .map(|pair| (pair[0], pair[1]))
            .chain(order.last().copied().zip(order.first().copied()))
            .map(|(from, to)| graph.distance(from, to))
            .sum();

        let path = order.iter().chain(order.first()).map(|&index| graph.vertex(index).id()).collect();

        Self { path, cost }
    }

    /// Returns visited vertex ids, the start is repeated at the end.
    pub fn path(&self) -> &[VertexId] {
        self.path.as_slice()
    }

    /// Returns total tour cost.
    pub fn cost(&self) -> Float {
        self.cost
    }

    /// Returns the start vertex id.
    pub fn start(&self) -> Option<VertexId> {
        self.path.first().copied()
    }

    /// Returns true if the path ends where it starts.
    pub fn is_closed(&self) -> bool {
        self.path.len() > 1 && self.path.first() == self.path.last()
    }

    /// Returns true if tour visits every vertex of the graph exactly once before closing the loop.
    pub fn is_hamiltonian(&self, graph: &Graph) -> bool {
        if !self.is_closed() || self.path.len() != graph.size() + 1 {
            return false;
        }

        let visited = self.path[..self.path.len() - 1].iter().copied().collect::<FxHashSet<_>>();

        visited.len() == graph.size() && visited.iter().all(|&id| graph.find_vertex(id).is_some())
    }
}
