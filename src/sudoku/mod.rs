//! Sudoku puzzles as satisfiability problems.
//!
//! A puzzle travels through a fixed pipeline: clue validation, variable
//! allocation, CNF construction, search behind the [`Solver`] boundary, and
//! model decoding back to a grid. Every stage only consumes the output of
//! earlier stages, and each puzzle instance carries its own state — nothing
//! is shared between runs.
//!
//! [`Solver`]: crate::sat::solver::Solver

/// Boards: the 9x9 digit grid, parsing and printing.
pub mod board;
/// The puzzle-to-CNF encoding and model decoding.
pub mod encode;
/// Error conditions for puzzle handling.
pub mod error;
/// Clues and puzzle instances.
pub mod puzzle;
/// End-to-end solving convenience functions.
pub mod solver;

/// Grid side length; also the number of digits.
pub const SIZE: usize = 9;

/// Side length of one box (the 3x3 subgrids), the square root of [`SIZE`].
pub const BOX_SIZE: usize = 3;
