//! Command-line front end for the SAT-based Sudoku solver.
//!
//! Reads a puzzle (a file, a directory of files, or the bundled example),
//! encodes it to CNF, runs the bundled DPLL procedure, and prints the
//! solved grid — or reports that no solution exists.

use clap::Parser;

mod command_line;

use command_line::cli::{Cli, run};

/// Global allocator using `tikv-jemallocator`, which also backs the memory
/// numbers in the statistics output.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
