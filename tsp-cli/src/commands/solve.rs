#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use std::io::BufReader;
use std::sync::Arc;
use tsp_cli::extensions::import::{FORMATS, import_graph};
use tsp_cli::extensions::solve::config::{Config, MatchingType, SpanningType, read_config};
use tsp_cli::extensions::solve::formats::{OUTPUT_FORMATS, TourReport, write_reports};
use tsp_core::prelude::*;
use tsp_core::utils::Timer;

const FORMAT_ARG_NAME: &str = "FORMAT";
const INPUT_ARG_NAME: &str = "INPUT";
const ALGORITHM_ARG_NAME: &str = "algorithm";
const START_ARG_NAME: &str = "start";
const TIME_ARG_NAME: &str = "max-time";
const SPANNING_ARG_NAME: &str = "spanning";
const MATCHING_ARG_NAME: &str = "matching";
const CONFIG_ARG_NAME: &str = "config";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const OUT_FORMAT_ARG_NAME: &str = "out-format";
const LOG_ARG_NAME: &str = "log";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Solves Traveling Salesman Problem on a graph dataset")
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies the dataset type")
                .required(true)
                .value_parser(FORMATS.to_vec())
                .index(1),
        )
        .arg(
            Arg::new(INPUT_ARG_NAME)
                .help("Sets dataset files: an edge list, or a node list followed by an edge list for geo format")
                .required(true)
                .num_args(1..=2)
                .index(2),
        )
        .arg(
            Arg::new(ALGORITHM_ARG_NAME)
                .help("Specifies algorithm name or 'all' to compare every algorithm")
                .short('a')
                .long(ALGORITHM_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(START_ARG_NAME)
                .help("Specifies id of the vertex where tour starts")
                .short('s')
                .long(START_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max time of an exhaustive search in seconds")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(SPANNING_ARG_NAME)
                .help("Specifies whether spanning tree uses all vertex pairs or only existing edges, auto by default")
                .long(SPANNING_ARG_NAME)
                .required(false)
                .value_parser(["auto", "complete", "adjacency"]),
        )
        .arg(
            Arg::new(MATCHING_ARG_NAME)
                .help("Specifies how odd degree vertices are paired by christofides heuristic")
                .long(MATCHING_ARG_NAME)
                .required(false)
                .value_parser(["greedy", "exact"]),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to solver configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file where results are appended")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_FORMAT_ARG_NAME)
                .help("Specifies output format")
                .long(OUT_FORMAT_ARG_NAME)
                .required(false)
                .default_value("text")
                .value_parser(OUTPUT_FORMATS.to_vec()),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .required(false)
                .action(ArgAction::SetTrue),
        )
}

/// Runs solver commands.
pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> GenericResult<()> {
    let format = matches.get_one::<String>(FORMAT_ARG_NAME).map(String::as_str).unwrap_or_default();
    let inputs = matches
        .get_many::<String>(INPUT_ARG_NAME)
        .into_iter()
        .flatten()
        .map(|path| open_file(path, "input").map(BufReader::new))
        .collect::<GenericResult<Vec<_>>>()?;

    let config = get_config(matches)?;
    let algorithms = config.get_algorithms()?;
    let start = config.get_start();

    let logger: InfoLogger =
        if matches.get_flag(LOG_ARG_NAME) { Arc::new(|msg: &str| println!("{msg}")) } else { Arc::new(|_: &str| {}) };

    let graph = Timer::measure_duration_with_callback(
        || import_graph(format, inputs),
        |duration| (logger)(&format!("dataset is imported in {}ms", duration.as_millis())),
    )?;
    (logger)(&format!("graph has {} vertices", graph.size()));

    let reports = algorithms
        .into_iter()
        .map(|algorithm| {
            let solver = config.create_solver(algorithm, config.create_environment(logger.clone()));
            let (result, duration) = Timer::measure_duration(|| solver.solve(&graph, start));

            TourReport::new(algorithm, &result, duration)
        })
        .collect::<Vec<_>>();

    let out_format = matches.get_one::<String>(OUT_FORMAT_ARG_NAME).map(String::as_str).unwrap_or("text");
    let out_result =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| append_file(path, "out result")).transpose()?;

    write_reports(reports.as_slice(), out_format, out_writer_func(out_result))?;

    match reports.iter().map(|report| report.error.as_ref()).collect::<Option<Vec<_>>>() {
        Some(errors) if !errors.is_empty() => Err(format!("cannot find any tour: {}", errors[0]).into()),
        _ => Ok(()),
    }
}

/// Reads config file if specified and overrides its values with command line arguments.
fn get_config(matches: &ArgMatches) -> GenericResult<Config> {
    let file_config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| open_file(path, "config").and_then(|file| read_config(BufReader::new(file))))
        .transpose()?
        .unwrap_or_default();

    let args_config = Config {
        algorithm: matches.get_one::<String>(ALGORITHM_ARG_NAME).cloned(),
        start: parse_int_value::<VertexId>(matches, START_ARG_NAME, "start vertex")?,
        max_time: parse_int_value::<usize>(matches, TIME_ARG_NAME, "max time")?,
        spanning: matches.get_one::<String>(SPANNING_ARG_NAME).map(|value| match value.as_str() {
            "complete" => SpanningType::Complete,
            "adjacency" => SpanningType::Adjacency,
            _ => SpanningType::Auto,
        }),
        matching: matches.get_one::<String>(MATCHING_ARG_NAME).map(|value| match value.as_str() {
            "exact" => MatchingType::Exact,
            _ => MatchingType::Greedy,
        }),
    };

    Ok(file_config.merge(args_config))
}
