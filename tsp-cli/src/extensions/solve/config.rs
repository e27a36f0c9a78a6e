//! Solver configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use serde::Deserialize;
use std::io::{BufReader, Read};
use std::str::FromStr;
use std::sync::Arc;
use tsp_core::prelude::*;
use tsp_core::solver::{Christofides, TriangularApproximation, DEFAULT_START};
use tsp_core::utils::{Quota, TimeQuota};

/// A name which selects every available algorithm.
pub const ALL_ALGORITHMS: &str = "all";

/// An algorithm used when nothing is specified.
pub const DEFAULT_ALGORITHM: &str = "triangular";

/// A solver configuration. Every field is optional, command line arguments take precedence.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Algorithm name or `all`.
    pub algorithm: Option<String>,
    /// Start vertex id.
    pub start: Option<VertexId>,
    /// Max time of a single algorithm run in seconds, checked by exact searches.
    pub max_time: Option<usize>,
    /// Spanning tree mode used by tree based heuristics.
    pub spanning: Option<SpanningType>,
    /// Matching mode used by christofides heuristic.
    pub matching: Option<MatchingType>,
}

/// A spanning tree mode.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SpanningType {
    /// Chosen by graph: every vertex pair for complete graphs, existing edges otherwise.
    Auto,
    /// Every vertex pair is considered.
    Complete,
    /// Only existing edges are considered.
    Adjacency,
}

/// A matching mode.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum MatchingType {
    /// Nearest unmatched partner.
    Greedy,
    /// Minimum weight perfect matching.
    Exact,
}

impl From<SpanningType> for SpanningMode {
    fn from(value: SpanningType) -> Self {
        match value {
            SpanningType::Auto => SpanningMode::Auto,
            SpanningType::Complete => SpanningMode::Complete,
            SpanningType::Adjacency => SpanningMode::Adjacency,
        }
    }
}

impl From<MatchingType> for MatchingMode {
    fn from(value: MatchingType) -> Self {
        match value {
            MatchingType::Greedy => MatchingMode::Greedy,
            MatchingType::Exact => MatchingMode::Exact,
        }
    }
}

impl Config {
    /// Returns a config where values of `other` replace values of this one.
    pub fn merge(self, other: Config) -> Config {
        Config {
            algorithm: other.algorithm.or(self.algorithm),
            start: other.start.or(self.start),
            max_time: other.max_time.or(self.max_time),
            spanning: other.spanning.or(self.spanning),
            matching: other.matching.or(self.matching),
        }
    }

    /// Returns algorithms to run.
    pub fn get_algorithms(&self) -> GenericResult<Vec<Algorithm>> {
        match self.algorithm.as_deref().unwrap_or(DEFAULT_ALGORITHM) {
            ALL_ALGORITHMS => Ok(Algorithm::all().to_vec()),
            name => Algorithm::from_str(name).map(|algorithm| vec![algorithm]),
        }
    }

    /// Returns start vertex id.
    pub fn get_start(&self) -> VertexId {
        self.start.unwrap_or(DEFAULT_START)
    }

    /// Creates an environment for a single algorithm run: a time quota starts with its creation.
    pub fn create_environment(&self, logger: InfoLogger) -> Arc<Environment> {
        let quota = self.max_time.map(|time| Arc::new(TimeQuota::new(time as Float)) as Arc<dyn Quota + Send + Sync>);

        Arc::new(Environment::new(logger, quota))
    }

    /// Creates a configured solver.
    pub fn create_solver(&self, algorithm: Algorithm, environment: Arc<Environment>) -> Box<dyn TourSolver> {
        let spanning = self.spanning.map(SpanningMode::from).unwrap_or_default();
        let matching = self.matching.map(MatchingMode::from).unwrap_or_default();

        match algorithm {
            Algorithm::Triangular => Box::new(TriangularApproximation::new(environment).with_mode(spanning)),
            Algorithm::Christofides => Box::new(
                Christofides::new(environment).with_spanning_mode(spanning).with_matching_mode(matching),
            ),
            _ => create_solver(algorithm, environment),
        }
    }
}

/// Reads config from json.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}
