//! Contains result report writers.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/formats_test.rs"]
mod formats_test;

use serde::Serialize;
use std::io::Write;
use std::time::Duration;
use tsp_core::prelude::*;

/// Lists supported output formats.
pub const OUTPUT_FORMATS: &[&str] = &["text", "json"];

/// An outcome of a single algorithm run.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourReport {
    /// Algorithm name.
    pub algorithm: String,
    /// Tour cost, absent when solver has failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Float>,
    /// Execution time in milliseconds.
    pub duration_ms: u64,
    /// Visited vertex ids, the start is repeated at the end.
    pub path: Vec<VertexId>,
    /// Failure reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TourReport {
    /// Creates a new instance of `TourReport`.
    pub fn new(algorithm: Algorithm, result: &Result<Tour, SolverError>, duration: Duration) -> Self {
        let duration_ms = duration.as_millis() as u64;
        let algorithm = algorithm.to_string();

        match result {
            Ok(tour) => {
                Self { algorithm, cost: Some(tour.cost()), duration_ms, path: tour.path().to_vec(), error: None }
            }
            Err(err) => Self { algorithm, cost: None, duration_ms, path: vec![], error: Some(err.to_string()) },
        }
    }
}

/// Writes reports in the given output format.
pub fn write_reports<W: Write>(reports: &[TourReport], format: &str, writer: W) -> GenericResult<()> {
    match format {
        "text" => write_text_reports(reports, writer),
        "json" => write_json_reports(reports, writer),
        _ => Err(format!("unknown output format: '{format}'").into()),
    }
}

/// Writes human readable reports.
pub fn write_text_reports<W: Write>(reports: &[TourReport], mut writer: W) -> GenericResult<()> {
    for report in reports {
        writeln!(writer, "Algorithm: {}", report.algorithm)?;

        match (&report.cost, &report.error) {
            (Some(cost), _) => {
                let path = report.path.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(" -> ");
                writeln!(writer, "Cost: {cost}")?;
                writeln!(writer, "Execution time: {}ms", report.duration_ms)?;
                writeln!(writer, "Path: {path}")?;
            }
            (None, error) => {
                writeln!(writer, "Error: {}", error.as_deref().unwrap_or("unknown"))?;
                writeln!(writer, "Execution time: {}ms", report.duration_ms)?;
            }
        }

        writeln!(writer)?;
    }

    writer.flush().map_err(GenericError::from)
}

/// Writes reports as a pretty printed json array.
pub fn write_json_reports<W: Write>(reports: &[TourReport], mut writer: W) -> GenericResult<()> {
    serde_json::to_writer_pretty(&mut writer, reports).map_err(|err| format!("cannot write json: '{err}'"))?;
    writeln!(writer)?;

    writer.flush().map_err(GenericError::from)
}
