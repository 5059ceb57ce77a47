#![deny(missing_docs)]
//! A SAT-based Sudoku solver.
//!
//! Puzzles are encoded into propositional logic in conjunctive normal form —
//! one boolean variable per (row, column, digit) triple, with the Sudoku
//! rules expressed as "exactly one" cardinality constraints — and handed to
//! a decision procedure behind the [`Solver`](sat::solver::Solver) trait.
//! A satisfying model is decoded back into a solved grid; unsatisfiability
//! is reported as the absence of a solution. A small DPLL procedure is
//! bundled so the crate works out of the box, but any conforming solver can
//! take its place.

/// The `sat` module provides the propositional-logic layer: literals,
/// clauses, CNF formulas, variable pooling, cardinality encodings, the
/// solver boundary, and a bundled DPLL procedure.
pub mod sat;

/// The `sudoku` module provides the puzzle layer: boards, clues, the
/// puzzle-to-CNF encoding, and model decoding.
pub mod sudoku;
