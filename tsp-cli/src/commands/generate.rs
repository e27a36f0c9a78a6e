#[cfg(test)]
#[path = "../../tests/unit/commands/generate_test.rs"]
mod generate_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use tsp_cli::extensions::generate::{DEFAULT_AREA, generate_graph};
use tsp_cli::extensions::import::write_edges;

const SIZE_ARG_NAME: &str = "size";
const SEED_ARG_NAME: &str = "seed";
const MAX_WEIGHT_ARG_NAME: &str = "max-weight";
const GEO_ARG_NAME: &str = "geo";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_generate_app() -> Command {
    Command::new("generate")
        .about("Generates a fully connected graph as an edge list")
        .arg(
            Arg::new(SIZE_ARG_NAME)
                .help("Amount of vertices in the generated graph")
                .short('n')
                .long(SIZE_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies randomization seed to get reproducible graphs")
                .long(SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(MAX_WEIGHT_ARG_NAME)
                .help("Specifies max edge weight")
                .long(MAX_WEIGHT_ARG_NAME)
                .required(false)
                .conflicts_with(GEO_ARG_NAME),
        )
        .arg(
            Arg::new(GEO_ARG_NAME)
                .help("Uses great-circle distances between random coordinates as edge weights")
                .long(GEO_ARG_NAME)
                .required(false)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_generate(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> GenericResult<()> {
    let size = parse_int_value::<usize>(matches, SIZE_ARG_NAME, "graph size")?
        .ok_or_else(|| format!("{SIZE_ARG_NAME} argument is required"))?;
    let seed = parse_int_value::<u64>(matches, SEED_ARG_NAME, "seed")?;
    let max_weight = parse_int_value::<usize>(matches, MAX_WEIGHT_ARG_NAME, "max weight")?;
    let area = matches.get_flag(GEO_ARG_NAME).then_some(DEFAULT_AREA);

    let graph = generate_graph(size, seed, max_weight, area);

    let out_result =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    write_edges(&graph, out_writer_func(out_result))
}
