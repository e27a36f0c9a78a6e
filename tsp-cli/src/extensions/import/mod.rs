//! Contains logic to import graphs from datasets.

mod csv;
pub use self::csv::*;

use std::io::{BufReader, Read};
use tsp_core::models::Graph;
use tsp_core::utils::GenericResult;

/// Lists supported dataset formats.
pub const FORMATS: &[&str] = &["toy", "complete", "geo"];

/// Imports a graph in the given format:
/// * `toy`: a single edge list;
/// * `complete`: a single edge list of a fully connected graph, a dense distance matrix is built;
/// * `geo`: a node list with coordinates followed by an edge list.
pub fn import_graph<R: Read>(format: &str, readers: Vec<BufReader<R>>) -> GenericResult<Graph> {
    let mut readers = readers.into_iter();

    match (format, readers.next(), readers.next(), readers.next()) {
        ("toy", Some(edges), None, None) => read_toy_graph(edges),
        ("complete", Some(edges), None, None) => read_complete_graph(edges),
        ("geo", Some(nodes), Some(edges), None) => read_geo_graph(nodes, edges),
        ("toy" | "complete", _, _, _) => Err(format!("{format} format expects exactly one edge list file").into()),
        ("geo", _, _, _) => Err("geo format expects node and edge list files".into()),
        _ => Err(format!("unknown format: '{format}'").into()),
    }
}
