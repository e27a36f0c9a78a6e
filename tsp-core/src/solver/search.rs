use crate::models::{Graph, Tour};
use crate::solver::SolverError;
use crate::utils::{Environment, Float, compare_floats};

/// Specifies how often the quota is checked, in expanded search states.
const QUOTA_CHECK_PERIOD: usize = 1024;

/// An owned state of an exhaustive tour search: created per run and read back after it completes.
pub(crate) struct SearchContext<'a> {
    pub adjacency: Vec<Vec<(usize, Float)>>,
    pub start: usize,
    pub visited: Vec<bool>,
    pub path: Vec<usize>,
    best: Option<(Float, Vec<usize>)>,
    environment: &'a Environment,
    expansions: usize,
    is_interrupted: bool,
}

impl<'a> SearchContext<'a> {
    pub fn new(graph: &Graph, start: usize, environment: &'a Environment) -> Self {
        let adjacency = (0..graph.size()).map(|index| graph.adjacency(index).collect()).collect();

        let mut visited = vec![false; graph.size()];
        visited[start] = true;

        Self {
            adjacency,
            start,
            visited,
            path: vec![start],
            best: None,
            environment,
            expansions: 0,
            is_interrupted: false,
        }
    }

    /// Orders every adjacency list by weight, cheapest first.
    pub fn sort_adjacency(&mut self) {
        self.adjacency.iter_mut().for_each(|edges| edges.sort_by(|(_, a), (_, b)| compare_floats(*a, *b)));
    }

    pub fn size(&self) -> usize {
        self.visited.len()
    }

    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Returns cost of the best tour found so far or infinity.
    pub fn best_cost(&self) -> Float {
        self.best.as_ref().map_or(Float::INFINITY, |(cost, _)| *cost)
    }

    /// Returns the cheapest edge weight from the vertex back to the start.
    pub fn closing_cost(&self, current: usize) -> Option<Float> {
        self.adjacency[current]
            .iter()
            .filter(|(to, _)| *to == self.start)
            .map(|(_, weight)| *weight)
            .min_by(|a, b| compare_floats(*a, *b))
    }

    /// Stores the current path as the best answer if its cost is lower.
    pub fn try_improve(&mut self, cost: Float) {
        if cost < self.best_cost() {
            self.best = Some((cost, self.path.clone()));
        }
    }

    /// Counts a search state expansion and returns true if search has to stop.
    pub fn should_stop(&mut self) -> bool {
        self.expansions += 1;

        if !self.is_interrupted && self.expansions % QUOTA_CHECK_PERIOD == 0 {
            self.is_interrupted = self.environment.is_quota_reached();
        }

        self.is_interrupted
    }

    pub fn is_interrupted(&self) -> bool {
        self.is_interrupted
    }

    /// Converts the best found answer into a tour.
    pub fn into_tour(self, graph: &Graph) -> Result<Tour, SolverError> {
        match (self.best, self.is_interrupted) {
            (Some((cost, path)), _) => {
                let path = path.iter().chain(path.first()).map(|&index| graph.vertex(index).id()).collect();
                Ok(Tour::new(path, cost))
            }
            (None, true) => Err(SolverError::Interrupted),
            (None, false) => Err(SolverError::Infeasible("graph has no hamiltonian cycle".to_string())),
        }
    }
}
