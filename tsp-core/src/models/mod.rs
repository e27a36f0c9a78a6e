//! A collection of models to represent a graph and a tour in Traveling Salesman Problem domain.

mod distance;
pub use self::distance::*;

mod generator;
pub use self::generator::{Area, GraphGenerator};

mod graph;
pub use self::graph::*;

mod matrix;
pub use self::matrix::DistanceMatrix;

mod tour;
pub use self::tour::Tour;

/// A unique, stable label of a vertex inside its graph.
pub type VertexId = usize;
