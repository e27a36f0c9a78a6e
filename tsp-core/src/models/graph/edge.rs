use crate::models::VertexId;
use crate::utils::Float;

/// Represents a directed weighted link between two vertices. Edges are owned by the adjacency
/// list of their origin vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    /// Origin vertex id.
    pub origin: VertexId,
    /// Destination vertex id.
    pub destination: VertexId,
    /// Non-negative weight.
    pub weight: Float,
    /// True if edge was created together with its reverse as a bidirectional pair.
    pub is_paired: bool,
}

impl Edge {
    /// Creates a new instance of `Edge`.
    pub fn new(origin: VertexId, destination: VertexId, weight: Float, is_paired: bool) -> Self {
        Self { origin, destination, weight, is_paired }
    }

    /// Returns true if the given edge is a reverse of this one.
    pub fn is_reverse_of(&self, other: &Edge) -> bool {
        self.is_paired
            && other.is_paired
            && self.origin == other.destination
            && self.destination == other.origin
            && self.weight == other.weight
    }
}
