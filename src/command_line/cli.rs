//! Argument parsing and command dispatch for the solver binary.
//!
//! Uses `clap` for parsing. A bare path solves that puzzle file; with no
//! arguments at all the bundled example puzzle is solved.

use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Duration;
use sudoku_sat::sat::assignment::Model;
use sudoku_sat::sat::clause::Clause;
use sudoku_sat::sat::cnf::Cnf;
use sudoku_sat::sat::dpll::Dpll;
use sudoku_sat::sat::solver::{SearchStats, Solver};
use sudoku_sat::sudoku::board::{Board, EXAMPLE};
use sudoku_sat::sudoku::encode::Encoding;
use sudoku_sat::sudoku::puzzle::Puzzle;
use tikv_jemalloc_ctl::{epoch, stats};

/// Defines the command-line interface for the Sudoku solver application.
#[derive(Parser, Debug)]
#[command(name = "sudoku_sat", version, about = "A SAT-based Sudoku solver")]
pub(crate) struct Cli {
    /// An optional global path argument. If provided without a subcommand,
    /// it's treated as the path to a puzzle file to solve.
    #[arg(global = true)]
    pub path: Option<PathBuf>,

    /// Specifies the subcommand to execute (e.g. `solve`, `dir`).
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    pub common: CommonOptions,
}

/// Enumerates the available subcommands.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Solve a single puzzle file.
    Solve {
        /// Path to the puzzle file: nine rows of nine digits, `0` or `.`
        /// for an empty cell.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve every `.sudoku` file under a directory.
    Dir {
        /// Path to the directory to scan.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Default, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub(crate) struct CommonOptions {
    /// Enable debug output, providing more verbose information about the
    /// generated formula and the search.
    #[arg(short, long, default_value_t = false)]
    pub(crate) debug: bool,

    /// Check the found model against the CNF formula before decoding it.
    #[arg(short, long, default_value_t = true)]
    pub(crate) verify: bool,

    /// Print encoding and search statistics after solving.
    #[arg(short, long, default_value_t = true)]
    pub(crate) stats: bool,

    /// Print the satisfying model (the true variable identifiers).
    #[arg(short, long, default_value_t = false)]
    pub(crate) print_solution: bool,

    /// Print the generated DIMACS CNF, and write it next to the puzzle
    /// file when solving one.
    #[arg(short, long, default_value_t = false)]
    pub(crate) export_dimacs: bool,
}

/// Dispatches the parsed command line.
pub(crate) fn run(cli: Cli) -> Result<(), String> {
    if let Some(path) = cli.path.clone() {
        if cli.command.is_none() {
            return solve_file(&path, &cli.common);
        }
    }

    match cli.command {
        Some(Commands::Solve { path, common }) => solve_file(&path, &common),
        Some(Commands::Dir { path, common }) => solve_dir(&path, &common),
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "sudoku_sat",
                &mut std::io::stdout(),
            );
            Ok(())
        }
        // No path and no subcommand: solve the bundled example puzzle.
        None => solve_board(&Board::new(EXAMPLE), None, &cli.common),
    }
}

/// Solves a single puzzle file.
///
/// # Errors
///
/// If the file cannot be read or does not contain a well-formed grid.
fn solve_file(path: &PathBuf, common: &CommonOptions) -> Result<(), String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("unable to read {}: {e}", path.display()))?;
    let board = Board::parse(&text).map_err(|e| format!("{}: {e}", path.display()))?;
    solve_board(&board, Some(path.as_path()), common)
}

/// Solves every `.sudoku` file under a directory.
///
/// # Errors
///
/// If the path is not a directory, or any contained puzzle fails to solve.
fn solve_dir(path: &PathBuf, common: &CommonOptions) -> Result<(), String> {
    if !path.is_dir() {
        return Err(format!(
            "provided path is not a directory: {}",
            path.display()
        ));
    }

    for entry in walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(Result::ok)
    {
        let file_path = entry.path().to_path_buf();
        if !file_path.is_file() {
            continue;
        }
        if file_path.extension().is_none_or(|ext| ext != "sudoku") {
            continue;
        }
        solve_file(&file_path, common)?;
    }

    Ok(())
}

/// Encodes, solves, and reports one puzzle.
fn solve_board(board: &Board, label: Option<&Path>, common: &CommonOptions) -> Result<(), String> {
    println!("Puzzle:\n{board}");

    let puzzle = Puzzle::from_board(board).map_err(|e| e.to_string())?;
    puzzle.check_givens().map_err(|e| e.to_string())?;

    let time = std::time::Instant::now();
    let encoding = Encoding::new();
    let cnf = encoding.encode(&puzzle);
    let encode_time = time.elapsed();

    if common.debug {
        println!("Variables: {}", cnf.num_vars());
        println!("Clauses: {}", cnf.len());
        println!("Givens: {}", puzzle.len());
    }

    if common.export_dimacs {
        export_dimacs(&cnf, label)?;
    }

    let time = std::time::Instant::now();
    let mut solver = Dpll::new(cnf.clone());
    let sol = solver.solve();
    let solve_time = time.elapsed();

    if common.debug {
        println!("Time: {solve_time:?}");
    }

    epoch::advance().unwrap();
    let allocated_bytes = stats::allocated::mib().unwrap().read().unwrap();
    let resident_bytes = stats::resident::mib().unwrap().read().unwrap();
    #[allow(clippy::cast_precision_loss)]
    let allocated_mib = allocated_bytes as f64 / (1024.0 * 1024.0);
    #[allow(clippy::cast_precision_loss)]
    let resident_mib = resident_bytes as f64 / (1024.0 * 1024.0);

    if common.verify {
        verify_solution(&cnf, sol.as_ref());
    }

    if common.stats {
        print_stats(
            encode_time,
            solve_time,
            &cnf,
            &solver.stats(),
            allocated_mib,
            resident_mib,
            common.print_solution,
            sol.as_ref(),
        );
    }

    match sol {
        Some(model) => {
            let solved = encoding.decode(&model).map_err(|e| e.to_string())?;
            println!("Solution:\n{solved}");
        }
        None => println!("No solution"),
    }

    Ok(())
}

/// Prints the DIMACS rendering of `cnf`, and writes it next to the puzzle
/// file when one was given.
fn export_dimacs(cnf: &Cnf, label: Option<&Path>) -> Result<(), String> {
    let dimacs = cnf.to_string();
    if let Some(path) = label {
        let dimacs_path = format!("{}.cnf", path.display());
        std::fs::write(&dimacs_path, &dimacs)
            .map_err(|e| format!("unable to write {dimacs_path}: {e}"))?;
        println!("DIMACS written to: {dimacs_path}");
    } else {
        println!("DIMACS:\n{dimacs}");
    }
    Ok(())
}

/// Checks a found model against the formula. Panics on a failed check,
/// since that indicates a solver defect rather than a bad puzzle.
fn verify_solution(cnf: &Cnf, sol: Option<&Model>) {
    if let Some(model) = sol {
        let ok = cnf.verify(model);
        println!("Verified: {ok:?}");
        assert!(ok, "model failed verification!");
    } else {
        println!("UNSAT");
    }
}

/// Helper function to print a single statistic line in a formatted table row.
fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate
/// (value/second).
#[allow(clippy::cast_precision_loss)]
fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

/// Prints a summary of problem and search statistics.
#[allow(clippy::too_many_arguments)]
fn print_stats(
    encode_time: Duration,
    solve_time: Duration,
    cnf: &Cnf,
    s: &SearchStats,
    allocated: f64,
    resident: f64,
    print_solution: bool,
    sol: Option<&Model>,
) {
    let elapsed_secs = solve_time.as_secs_f64();

    println!("\n======================[ Problem Statistics ]=========================");
    stat_line(
        "Encode time (s)",
        format!("{:.3}", encode_time.as_secs_f64()),
    );
    stat_line("Variables", cnf.num_vars());
    stat_line("Clauses", cnf.len());
    stat_line("Literals", cnf.iter().map(Clause::len).sum::<usize>());

    println!("=======================[ Search Statistics ]=========================");
    stat_line_with_rate("Decisions", s.decisions, elapsed_secs);
    stat_line_with_rate("Propagations", s.propagations, elapsed_secs);
    stat_line_with_rate("Conflicts", s.conflicts, elapsed_secs);
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");

    if let Some(model) = sol {
        if print_solution {
            println!("Model: {model}");
        }
    }

    if sol.is_some() {
        println!("\nSATISFIABLE");
    } else {
        println!("\nUNSATISFIABLE");
    }
}
