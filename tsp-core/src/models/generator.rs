#[cfg(test)]
#[path = "../../tests/unit/models/generator_test.rs"]
mod generator_test;

use crate::models::{Coordinate, Graph, haversine_distance};
use crate::utils::Float;
use rand::prelude::*;
use rand::rngs::SmallRng;

/// A bounding box used to sample geographic coordinates: `(min_lat, min_lng, max_lat, max_lng)`.
pub type Area = (Float, Float, Float, Float);

/// Generates synthetic fully connected graphs.
pub struct GraphGenerator {
    size: usize,
    seed: u64,
    max_weight: usize,
    area: Option<Area>,
}

impl GraphGenerator {
    /// Creates a new instance of `GraphGenerator` for a graph with `size` vertices.
    pub fn new(size: usize) -> Self {
        Self { size, seed: 0, max_weight: 100, area: None }
    }

    /// Sets a seed of the random generator.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets max edge weight used when coordinates are not generated.
    pub fn with_max_weight(mut self, max_weight: usize) -> Self {
        self.max_weight = max_weight.max(1);
        self
    }

    /// Generates coordinates inside the area and uses haversine distances as edge weights.
    pub fn with_area(mut self, area: Area) -> Self {
        self.area = Some(area);
        self
    }

    /// Builds a complete graph with bidirectional edges between every pair of vertices.
    pub fn build(&self) -> Graph {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut graph = Graph::new();

        (0..self.size).for_each(|id| {
            let coordinate = self
                .area
                .map(|(min_lat, min_lng, max_lat, max_lng)| {
                    Coordinate::new(sample(&mut rng, min_lat, max_lat), sample(&mut rng, min_lng, max_lng))
                })
                .unwrap_or_default();

            graph.add_vertex_with_coordinate(id, coordinate);
        });

        for from in 0..self.size {
            for to in (from + 1)..self.size {
                let weight = if self.area.is_some() {
                    haversine_distance(graph.vertex(from).coordinate(), graph.vertex(to).coordinate()).round()
                } else {
                    rng.gen_range(1..=self.max_weight) as Float
                };

                graph.add_bidirectional_edge(from, to, weight);
            }
        }

        graph
    }
}

fn sample(rng: &mut SmallRng, min: Float, max: Float) -> Float {
    if max > min { rng.gen_range(min..max) } else { min }
}
