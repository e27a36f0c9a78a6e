//! Core crate contains building blocks to solve the ***Traveling Salesman Problem*** on weighted
//! graphs of delivery and shipping networks: a graph model, spanning tree, matching, Euler circuit
//! and a set of exact and heuristic tour solvers.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use tsp_core::prelude::*;
//!
//! let mut graph = Graph::new();
//! (0..4).for_each(|id| {
//!     graph.add_vertex(id);
//! });
//! for (from, to, weight) in [(0, 1, 10.), (0, 2, 15.), (0, 3, 20.), (1, 2, 35.), (1, 3, 25.), (2, 3, 30.)] {
//!     graph.add_bidirectional_edge(from, to, weight);
//! }
//!
//! let solver = create_solver(Algorithm::BranchAndBound, Arc::new(Environment::default()));
//! let tour = solver.solve(&graph, 0).expect("cannot solve");
//!
//! assert_eq!(tour.cost(), 80.);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
