//! Contains extensions around core solvers: dataset formats, configuration and reports.

pub mod generate;
pub mod import;
pub mod solve;
