//! Contains a mutable labeled graph used as an input for all tour solvers.
//!
//! Vertices are kept in insertion order which is also the canonical iteration and indexing
//! order: solvers address vertices by their position and translate positions back to ids only
//! when a tour is produced.

#[cfg(test)]
#[path = "../../../tests/unit/models/graph_test.rs"]
mod graph_test;

mod edge;
pub use self::edge::Edge;

mod vertex;
pub use self::vertex::Vertex;

use crate::models::{Coordinate, DistanceMatrix, VertexId, haversine_distance};
use crate::utils::{Float, compare_floats, parallel_collect};
use rustc_hash::FxHashMap;

/// A graph of vertices with directed edges, optionally backed by a dense distance matrix.
#[derive(Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    index: FxHashMap<VertexId, usize>,
    matrix: Option<DistanceMatrix>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns amount of vertices.
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns vertices in insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        self.vertices.as_slice()
    }

    /// Returns vertex at given position.
    pub fn vertex(&self, index: usize) -> &Vertex {
        &self.vertices[index]
    }

    /// Finds a vertex by its id.
    pub fn find_vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.find_vertex_index(id).map(|index| &self.vertices[index])
    }

    /// Finds a position of the vertex with given id.
    pub fn find_vertex_index(&self, id: VertexId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Adds a vertex without coordinates. Returns false if a vertex with that id already exists.
    pub fn add_vertex(&mut self, id: VertexId) -> bool {
        self.add_vertex_with_coordinate(id, Coordinate::default())
    }

    /// Adds a vertex with geographic coordinates. Returns false if a vertex with that id already exists.
    pub fn add_vertex_with_coordinate(&mut self, id: VertexId, coordinate: Coordinate) -> bool {
        if self.index.contains_key(&id) {
            return false;
        }

        self.index.insert(id, self.vertices.len());
        self.vertices.push(Vertex::new(id, coordinate));

        if let Some(matrix) = self.matrix.as_mut() {
            matrix.grow();
        }

        true
    }

    /// Removes a vertex with all its outgoing and incoming edges.
    /// Returns false if there is no vertex with such id.
    pub fn remove_vertex(&mut self, id: VertexId) -> bool {
        let Some(index) = self.find_vertex_index(id) else {
            return false;
        };

        let mut destinations = self.vertices[index].edges().iter().map(|edge| edge.destination).collect::<Vec<_>>();
        destinations.sort_unstable();
        destinations.dedup();
        destinations.into_iter().for_each(|destination| {
            self.detach_edges(index, destination);
        });

        let mut origins = self.vertices[index]
            .incoming()
            .iter()
            .filter_map(|&origin| self.find_vertex_index(origin))
            .collect::<Vec<_>>();
        origins.sort_unstable();
        origins.dedup();
        for origin in origins {
            self.detach_edges(origin, id);
        }

        self.vertices.remove(index);
        self.index = self.vertices.iter().enumerate().map(|(index, vertex)| (vertex.id(), index)).collect();

        if let Some(matrix) = self.matrix.as_mut() {
            matrix.remove(index);
        }

        true
    }

    /// Adds a directed edge. Returns false if the origin or destination vertex does not exist.
    pub fn add_edge(&mut self, origin: VertexId, destination: VertexId, weight: Float) -> bool {
        match (self.find_vertex_index(origin), self.find_vertex_index(destination)) {
            (Some(from), Some(to)) => {
                self.insert_edge(from, to, weight, false);
                true
            }
            _ => false,
        }
    }

    /// Adds two edges in opposite directions linked as mutual reverses.
    /// Returns false if any vertex does not exist.
    pub fn add_bidirectional_edge(&mut self, origin: VertexId, destination: VertexId, weight: Float) -> bool {
        match (self.find_vertex_index(origin), self.find_vertex_index(destination)) {
            (Some(from), Some(to)) => {
                self.insert_edge(from, to, weight, true);
                self.insert_edge(to, from, weight, true);
                true
            }
            _ => false,
        }
    }

    /// Removes all edges from the origin to the destination (graph can have parallel edges).
    /// Returns true if at least one edge was removed.
    pub fn remove_edge(&mut self, origin: VertexId, destination: VertexId) -> bool {
        self.find_vertex_index(origin).is_some_and(|from| self.detach_edges(from, destination) > 0)
    }

    /// Returns the reverse of a paired edge.
    pub fn reverse_edge(&self, edge: &Edge) -> Option<&Edge> {
        if !edge.is_paired {
            return None;
        }

        self.find_vertex(edge.destination)
            .and_then(|vertex| vertex.edges().iter().find(|candidate| candidate.is_reverse_of(edge)))
    }

    /// Returns outgoing neighbours of the vertex at given position as `(position, weight)` pairs.
    pub fn adjacency(&self, index: usize) -> impl Iterator<Item = (usize, Float)> + '_ {
        self.vertices[index]
            .edges()
            .iter()
            .filter_map(|edge| self.find_vertex_index(edge.destination).map(|to| (to, edge.weight)))
    }

    /// Returns the cheapest explicit edge weight between vertices at given positions.
    pub fn edge_weight(&self, from: usize, to: usize) -> Option<Float> {
        let destination = self.vertices[to].id();

        self.vertices[from]
            .edges()
            .iter()
            .filter(|edge| edge.destination == destination)
            .map(|edge| edge.weight)
            .min_by(|&a, &b| compare_floats(a, b))
    }

    /// Returns the best known distance between vertices at given positions: a known matrix
    /// value, then the cheapest explicit edge, then haversine distance between coordinates.
    pub fn distance(&self, from: usize, to: usize) -> Float {
        if from == to {
            return 0.;
        }

        self.matrix
            .as_ref()
            .map(|matrix| matrix.get(from, to))
            .filter(|value| value.is_finite())
            .or_else(|| self.edge_weight(from, to))
            .unwrap_or_else(|| haversine_distance(self.vertices[from].coordinate(), self.vertices[to].coordinate()))
    }

    /// Returns the optional distance matrix.
    pub fn matrix(&self) -> Option<&DistanceMatrix> {
        self.matrix.as_ref()
    }

    /// Sets a symmetric distance matrix entry for two vertices, creating the matrix if needed.
    /// Returns false if any vertex does not exist.
    pub fn set_distance(&mut self, first: VertexId, second: VertexId, value: Float) -> bool {
        let (Some(first), Some(second)) = (self.find_vertex_index(first), self.find_vertex_index(second)) else {
            return false;
        };

        let size = self.size();
        let matrix = self.matrix.get_or_insert_with(|| DistanceMatrix::new(size));
        matrix.set(first, second, value);
        matrix.set(second, first, value);

        true
    }

    /// Gets a known distance matrix entry for two vertices.
    pub fn get_distance(&self, first: VertexId, second: VertexId) -> Option<Float> {
        let (first, second) = (self.find_vertex_index(first)?, self.find_vertex_index(second)?);

        self.matrix.as_ref().map(|matrix| matrix.get(first, second)).filter(|value| value.is_finite())
    }

    /// Materializes a complete distance matrix: every pair gets its best known distance.
    pub fn build_distance_matrix(&mut self) {
        let rows = (0..self.size()).collect::<Vec<_>>();
        let values = parallel_collect(&rows, |&from| rows.iter().map(|&to| self.distance(from, to)).collect::<Vec<_>>())
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();

        self.matrix = DistanceMatrix::from_values(values).ok();
    }

    /// Returns true if every pair of distinct vertices is connected directly or by a known matrix value.
    pub fn is_complete(&self) -> bool {
        let expected = self.size().saturating_sub(1);

        self.matrix.as_ref().is_some_and(|matrix| matrix.is_complete())
            || self.vertices.iter().all(|vertex| vertex.degree() == expected)
    }

    fn insert_edge(&mut self, from: usize, to: usize, weight: Float, is_paired: bool) {
        let (origin, destination) = (self.vertices[from].id(), self.vertices[to].id());

        self.vertices[from].push_edge(Edge::new(origin, destination, weight, is_paired));
        self.vertices[to].push_incoming(origin);

        if let Some(matrix) = self.matrix.as_mut().filter(|_| from != to) {
            if weight < matrix.get(from, to) {
                matrix.set(from, to, weight);
            }
        }
    }

    /// Removes all edges from the vertex at given position to the destination id, keeping
    /// incoming lists and pair flags consistent. Returns amount of removed edges.
    fn detach_edges(&mut self, from: usize, destination: VertexId) -> usize {
        let origin = self.vertices[from].id();
        let removed = self.vertices[from].remove_edges_to(destination);

        if removed > 0 {
            if let Some(to) = self.find_vertex_index(destination) {
                self.vertices[to].remove_incoming(origin, removed);
                self.vertices[to].unpair_edges_to(origin);
            }
        }

        removed
    }
}
