//! This module reimports commonly used types.

pub use crate::models::Coordinate;
pub use crate::models::Graph;
pub use crate::models::GraphGenerator;
pub use crate::models::Tour;
pub use crate::models::VertexId;

pub use crate::algorithms::MatchingMode;
pub use crate::algorithms::SpanningMode;

pub use crate::solver::Algorithm;
pub use crate::solver::SolverError;
pub use crate::solver::TourSolver;
pub use crate::solver::create_solver;

pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;
