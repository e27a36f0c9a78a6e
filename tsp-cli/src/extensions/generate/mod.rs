//! Contains synthetic graph generation.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/generate/generate_test.rs"]
mod generate_test;

use tsp_core::models::{Area, Graph, GraphGenerator};

/// An area used to sample coordinates of geographic graphs.
pub const DEFAULT_AREA: Area = (41.10, -8.70, 41.20, -8.55);

/// Generates a fully connected graph. When `area` is set, vertices get coordinates inside it
/// and edge weights are rounded great-circle distances.
pub fn generate_graph(size: usize, seed: Option<u64>, max_weight: Option<usize>, area: Option<Area>) -> Graph {
    let generator = GraphGenerator::new(size);
    let generator = if let Some(seed) = seed { generator.with_seed(seed) } else { generator };
    let generator = if let Some(max_weight) = max_weight { generator.with_max_weight(max_weight) } else { generator };
    let generator = if let Some(area) = area { generator.with_area(area) } else { generator };

    generator.build()
}
