//! CLI entry: solve a 2×2 puzzle and print the measurement histogram.
//!
//! No flags. An optional positional argument gives the puzzle as one
//! character per cell (default `1000`, qubit 0 first), an optional second
//! argument overrides the shot count.

use std::env;
use std::process;

use log::error;
use sudoku_grover_sim::histogram;
use sudoku_grover_sim::prelude::*;

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let puzzle_arg = args.next().unwrap_or_else(|| String::from("1000"));
    let shots_arg = args.next();

    if let Err(err) = run(&puzzle_arg, shots_arg.as_deref()) {
        error!("{err}");
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(puzzle_arg: &str, shots_arg: Option<&str>) -> Result<(), SolveError> {
    let puzzle: Puzzle = puzzle_arg.parse()?;

    let mut config = SolveConfig::default();
    if let Some(raw) = shots_arg {
        match raw.parse() {
            Ok(shots) => config.shots = shots,
            Err(_) => eprintln!(
                "ignoring unparsable shot count '{raw}', using {}",
                config.shots
            ),
        }
    }

    let backend = StatevectorBackend::new();
    let counts = solve(&puzzle, &backend, &config)?;

    println!(
        "Puzzle {puzzle} after one Grover iteration, {} shots:",
        config.shots
    );
    println!();
    print!("{}", histogram::render(&counts));
    Ok(())
}
