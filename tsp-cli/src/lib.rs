//! A command line interface library to solve *Traveling Salesman Problem* on delivery and
//! shipping networks: dataset import, solver configuration and result reports.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub use tsp_core as core;

pub mod extensions;
