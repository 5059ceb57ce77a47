#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Propositional-logic building blocks: literals, clauses, CNF formulas,
//! variable pooling, cardinality encodings, and the solver boundary.

/// Partial and complete truth assignments.
pub mod assignment;
/// Cardinality constraints ("exactly one of these literals").
pub mod cardinality;
/// Clauses: disjunctions of literals.
pub mod clause;
/// CNF formulas: append-only conjunctions of clauses.
pub mod cnf;
/// The bundled DPLL reference solver.
pub mod dpll;
/// Literals and variable identifiers.
pub mod literal;
/// Proposition-to-variable identifier pooling.
pub mod pool;
/// The `Solver` trait: the boundary to any decision procedure.
pub mod solver;
