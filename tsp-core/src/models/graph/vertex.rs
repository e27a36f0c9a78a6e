use super::Edge;
use crate::models::{Coordinate, VertexId};

/// A vertex of the graph with its outgoing and incoming edge bookkeeping.
#[derive(Clone, Debug)]
pub struct Vertex {
    id: VertexId,
    coordinate: Coordinate,
    edges: Vec<Edge>,
    incoming: Vec<VertexId>,
}

impl Vertex {
    pub(crate) fn new(id: VertexId, coordinate: Coordinate) -> Self {
        Self { id, coordinate, edges: vec![], incoming: vec![] }
    }

    /// Returns vertex id.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Returns vertex coordinate, `(0, 0)` for non-geographic graphs.
    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    /// Returns outgoing edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        self.edges.as_slice()
    }

    /// Returns origins of incoming edges, one entry per edge.
    pub fn incoming(&self) -> &[VertexId] {
        self.incoming.as_slice()
    }

    /// Returns amount of distinct neighbours reachable by outgoing edges.
    pub fn degree(&self) -> usize {
        let mut neighbours =
            self.edges.iter().map(|edge| edge.destination).filter(|&id| id != self.id).collect::<Vec<_>>();
        neighbours.sort_unstable();
        neighbours.dedup();

        neighbours.len()
    }

    /// Returns true if there is at least one outgoing edge to the given vertex.
    pub fn has_edge_to(&self, destination: VertexId) -> bool {
        self.edges.iter().any(|edge| edge.destination == destination)
    }

    pub(crate) fn push_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub(crate) fn push_incoming(&mut self, origin: VertexId) {
        self.incoming.push(origin);
    }

    /// Removes all outgoing edges to the destination and returns how many were removed.
    pub(crate) fn remove_edges_to(&mut self, destination: VertexId) -> usize {
        let before = self.edges.len();
        self.edges.retain(|edge| edge.destination != destination);

        before - self.edges.len()
    }

    /// Removes up to `count` incoming entries of the given origin.
    pub(crate) fn remove_incoming(&mut self, origin: VertexId, count: usize) {
        let mut left = count;
        self.incoming.retain(|&id| {
            if left > 0 && id == origin {
                left -= 1;
                false
            } else {
                true
            }
        });
    }

    /// Clears pair flag on edges to the destination: their reverse edges are gone.
    pub(crate) fn unpair_edges_to(&mut self, destination: VertexId) {
        self.edges.iter_mut().filter(|edge| edge.destination == destination).for_each(|edge| edge.is_paired = false);
    }
}
