//! This module contains tour solvers: exact searches and construction heuristics.
//!
//! All solvers implement [`TourSolver`] and take a graph by shared reference: every run keeps
//! its transient state (visited flags, distance labels, tree links) in its own scratch
//! structures, so sequential and concurrent runs on the same graph do not interfere.

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

mod backtracking;
pub use self::backtracking::Backtracking;

mod branch_bound;
pub use self::branch_bound::BranchAndBound;

mod christofides;
pub use self::christofides::Christofides;

mod nearest_neighbor;
pub use self::nearest_neighbor::NearestNeighbor;

mod search;

mod triangular;
pub use self::triangular::TriangularApproximation;

use crate::models::{Graph, Tour, VertexId};
use crate::utils::{Environment, GenericError};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

/// A vertex id used as a tour start when nothing else is specified.
pub const DEFAULT_START: VertexId = 0;

/// Constructs a closed tour over all vertices of the graph.
pub trait TourSolver {
    /// Returns a tour which starts and ends at the vertex with given id.
    fn solve(&self, graph: &Graph, start: VertexId) -> Result<Tour, SolverError>;
}

/// Specifies why a solver could not produce a tour.
#[derive(Clone, Debug, PartialEq)]
pub enum SolverError {
    /// The start vertex is not present in the graph.
    VertexNotFound(VertexId),
    /// The graph admits no tour: too few vertices, vertex with degree less than two, etc.
    Infeasible(String),
    /// Not every vertex is reachable from the start.
    Disconnected {
        /// Amount of reached vertices.
        reached: usize,
        /// Total amount of vertices.
        total: usize,
    },
    /// Computational quota is reached before any tour was found.
    Interrupted,
}

impl Display for SolverError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverError::VertexNotFound(id) => write!(f, "cannot find start vertex: '{id}'"),
            SolverError::Infeasible(reason) => write!(f, "no feasible tour: {reason}"),
            SolverError::Disconnected { reached, total } => {
                write!(f, "graph is disconnected: only {reached} of {total} vertices are reachable")
            }
            SolverError::Interrupted => write!(f, "search is interrupted before any tour was found"),
        }
    }
}

impl std::error::Error for SolverError {}

impl From<SolverError> for GenericError {
    fn from(error: SolverError) -> Self {
        GenericError::from(error.to_string())
    }
}

/// Lists available tour solvers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Exhaustive backtracking search.
    Backtracking,
    /// Minimum spanning tree preorder walk (2-approximation on metric graphs).
    Triangular,
    /// Greedy nearest neighbor construction.
    NearestNeighbor,
    /// Spanning tree, matching of odd vertices, Euler circuit and shortcutting.
    Christofides,
    /// Exhaustive search with pruning by the best known cost.
    BranchAndBound,
}

impl Algorithm {
    /// Returns all algorithms in the order they are usually compared.
    pub fn all() -> &'static [Algorithm] {
        &[
            Algorithm::Backtracking,
            Algorithm::Triangular,
            Algorithm::NearestNeighbor,
            Algorithm::Christofides,
            Algorithm::BranchAndBound,
        ]
    }

    /// Returns algorithm name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Backtracking => "backtracking",
            Algorithm::Triangular => "triangular",
            Algorithm::NearestNeighbor => "nearest-neighbor",
            Algorithm::Christofides => "christofides",
            Algorithm::BranchAndBound => "branch-and-bound",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Algorithm::all()
            .iter()
            .find(|algorithm| algorithm.name() == value)
            .copied()
            .ok_or_else(|| format!("unknown algorithm: '{value}'").into())
    }
}

/// Creates a solver with default settings for the given algorithm.
pub fn create_solver(algorithm: Algorithm, environment: Arc<Environment>) -> Box<dyn TourSolver> {
    match algorithm {
        Algorithm::Backtracking => Box::new(Backtracking::new(environment)),
        Algorithm::Triangular => Box::new(TriangularApproximation::new(environment)),
        Algorithm::NearestNeighbor => Box::new(NearestNeighbor::new(environment)),
        Algorithm::Christofides => Box::new(Christofides::new(environment)),
        Algorithm::BranchAndBound => Box::new(BranchAndBound::new(environment)),
    }
}

/// Validates that graph can have a tour and returns a position of the start vertex.
pub(crate) fn get_start_index(graph: &Graph, start: VertexId) -> Result<usize, SolverError> {
    if graph.size() < 2 {
        return Err(SolverError::Infeasible(format!("graph has {} vertices, at least two are required", graph.size())));
    }

    graph.find_vertex_index(start).ok_or(SolverError::VertexNotFound(start))
}
