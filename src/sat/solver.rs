//! The boundary between formula construction and satisfiability search.

use crate::sat::assignment::Model;
use crate::sat::cnf::Cnf;

/// Counters describing one run of a search procedure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Branching choices made.
    pub decisions: usize,
    /// Assignments forced by unit clauses.
    pub propagations: usize,
    /// Branches abandoned after falsifying a clause.
    pub conflicts: usize,
}

/// A complete decision procedure for CNF formulas.
///
/// Implementations take ownership of a fully built formula and either
/// produce a model covering every declared variable or report that none
/// exists. Unsatisfiability is a normal outcome (`None`), never an error.
/// Any sound and complete procedure may stand behind this trait; the rest of
/// the crate depends on nothing beyond it.
pub trait Solver {
    /// Prepares a solver for the given formula.
    fn new(cnf: Cnf) -> Self;

    /// Runs the search. Returns a satisfying model, or `None` when the
    /// formula is unsatisfiable. The call may block for as long as the
    /// search takes; callers wanting bounded time must impose it here.
    fn solve(&mut self) -> Option<Model>;

    /// Counters from the most recent [`solve`](Solver::solve) call.
    fn stats(&self) -> SearchStats;
}
