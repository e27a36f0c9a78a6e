//! A command line interface to *Traveling Salesman Problem* solvers.

#[cfg(test)]
#[path = "../tests/unit/main_test.rs"]
mod main_test;

mod commands;

use self::commands::create_write_buffer;
use self::commands::generate::{get_generate_app, run_generate};
use self::commands::solve::{get_solve_app, run_solve};
use clap::Command;
use std::process;

fn main() {
    let cli_args = get_app().get_matches();

    let result = match cli_args.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer),
        Some(("generate", generate_matches)) => run_generate(generate_matches, create_write_buffer),
        _ => {
            eprintln!("no subcommand was used. Use -h to print help information.");
            process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn get_app() -> Command {
    Command::new("Traveling Salesman Problem Solver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to exact and approximate Traveling Salesman Problem solvers")
        .subcommand(get_solve_app())
        .subcommand(get_generate_app())
}
