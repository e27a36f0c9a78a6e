//! Import from a simple csv format logic.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/import/csv_test.rs"]
mod csv_test;

use csv::{ReaderBuilder, StringRecord, Trim, Writer};
use std::fmt::Display;
use std::io::{BufReader, Read, Write};
use std::str::FromStr;
use tsp_core::models::{Coordinate, Graph, VertexId};
use tsp_core::utils::{Float, GenericError, GenericResult};

/// An edge list entry. Columns after the distance (e.g. labels) are ignored.
#[derive(Clone, Debug, PartialEq)]
pub struct CsvEdge {
    /// Origin vertex id.
    pub origin: VertexId,
    /// Destination vertex id.
    pub destination: VertexId,
    /// Distance between vertices.
    pub distance: Float,
}

/// A node list entry of a geographic dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct CsvNode {
    /// Vertex id.
    pub id: VertexId,
    /// Vertex coordinate.
    pub coordinate: Coordinate,
}

/// Reads edges from the csv with `origin,destination,distance[,...]` columns and a header line.
pub fn read_edges<R: Read>(reader: BufReader<R>) -> GenericResult<Vec<CsvEdge>> {
    read_records(reader, 3, |record| {
        let distance = parse_field::<Float>(record, 2, "distance")?;
        if distance < 0. || !distance.is_finite() {
            return Err(format!("distance must be a non-negative number, got: '{distance}'").into());
        }

        Ok(CsvEdge {
            origin: parse_field(record, 0, "origin")?,
            destination: parse_field(record, 1, "destination")?,
            distance,
        })
    })
}

/// Reads nodes from the csv with `id,longitude,latitude` columns and a header line.
pub fn read_nodes<R: Read>(reader: BufReader<R>) -> GenericResult<Vec<CsvNode>> {
    read_records(reader, 3, |record| {
        let lng = parse_field(record, 1, "longitude")?;
        let lat = parse_field(record, 2, "latitude")?;

        Ok(CsvNode { id: parse_field(record, 0, "id")?, coordinate: Coordinate::new(lat, lng) })
    })
}

/// Reads a graph from an edge list: vertices are created in order of their first appearance,
/// every entry becomes a bidirectional edge.
pub fn read_toy_graph<R: Read>(reader: BufReader<R>) -> GenericResult<Graph> {
    let mut graph = Graph::new();

    read_edges(reader)?.into_iter().for_each(|edge| {
        graph.add_vertex(edge.origin);
        graph.add_vertex(edge.destination);
        graph.add_bidirectional_edge(edge.origin, edge.destination, edge.distance);
    });

    Ok(graph)
}

/// Reads a fully connected graph from an edge list and materializes its distance matrix.
pub fn read_complete_graph<R: Read>(reader: BufReader<R>) -> GenericResult<Graph> {
    let mut graph = read_toy_graph(reader)?;
    graph.build_distance_matrix();

    Ok(graph)
}

/// Reads a geographic graph from a node list and an edge list which refers to known nodes only.
pub fn read_geo_graph<R: Read>(nodes: BufReader<R>, edges: BufReader<R>) -> GenericResult<Graph> {
    let mut graph = Graph::new();

    for node in read_nodes(nodes)? {
        if !graph.add_vertex_with_coordinate(node.id, node.coordinate) {
            return Err(format!("duplicate node id: '{}'", node.id).into());
        }
    }

    for edge in read_edges(edges)? {
        if !graph.add_bidirectional_edge(edge.origin, edge.destination, edge.distance) {
            return Err(format!("edge '{}-{}' refers to unknown node", edge.origin, edge.destination).into());
        }
    }

    Ok(graph)
}

/// Writes every connected vertex pair once, as `origin,destination,distance` with the cheapest weight.
pub fn write_edges<W: Write>(graph: &Graph, writer: W) -> GenericResult<()> {
    let mut writer = Writer::from_writer(writer);

    writer.write_record(["origin", "destination", "distance"]).map_err(to_generic_error)?;

    for from in 0..graph.size() {
        for to in (from + 1)..graph.size() {
            let Some(distance) = graph.edge_weight(from, to).or_else(|| graph.edge_weight(to, from)) else {
                continue;
            };

            let (origin, destination) = (graph.vertex(from).id(), graph.vertex(to).id());

            writer
                .write_record(&[origin.to_string(), destination.to_string(), distance.to_string()])
                .map_err(to_generic_error)?;
        }
    }

    writer.flush().map_err(GenericError::from)
}

fn read_records<R, T, F>(reader: BufReader<R>, min_fields: usize, parse: F) -> GenericResult<Vec<T>>
where
    R: Read,
    F: Fn(&StringRecord) -> GenericResult<T>,
{
    let mut reader = ReaderBuilder::new().has_headers(true).flexible(true).trim(Trim::All).from_reader(reader);

    reader
        .records()
        .filter(|record| record.as_ref().map_or(true, |record| !is_blank(record)))
        .map(|record| -> GenericResult<T> {
            let record = record.map_err(to_generic_error)?;
            let line = record.position().map_or(0, |position| position.line());

            if record.len() < min_fields {
                return Err(format!("line {line} has {} fields, at least {min_fields} expected", record.len()).into());
            }

            parse(&record).map_err(|err| format!("cannot parse line {line}: {err}").into())
        })
        .collect()
}

fn parse_field<T>(record: &StringRecord, index: usize, name: &str) -> GenericResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    let value = record.get(index).unwrap_or_default();

    value.parse::<T>().map_err(|err| format!("invalid {name} '{value}': {err}").into())
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.is_empty())
}

fn to_generic_error(err: csv::Error) -> GenericError {
    GenericError::from(err.to_string())
}
