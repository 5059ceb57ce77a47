//! A small DPLL (Davis-Putnam-Logemann-Loveland) decision procedure.
//!
//! This is the crate's bundled reference implementation of the [`Solver`]
//! trait: unit propagation to fixpoint, then branching on the
//! lowest-numbered unassigned variable, trying `true` before `false`.
//! Backtracking is handled by cloning the partial assignment at each
//! decision and discarding the clone when a branch fails; the formula
//! itself is shared immutably throughout the search.
//!
//! It makes no claim to competitiveness — no watched literals, no clause
//! learning, no restarts — but it is sound and complete, which is all the
//! trait demands, and it handles one-hot constraint formulas comfortably
//! because almost every assignment is forced by propagation.

use crate::sat::assignment::{Assignment, Model};
use crate::sat::clause::Clause;
use crate::sat::cnf::Cnf;
use crate::sat::literal::Literal;
use crate::sat::solver::{SearchStats, Solver};

/// What one clause contributes under the current partial assignment.
enum ClauseStatus {
    /// Some literal is already true.
    Satisfied,
    /// Every literal is false; the current branch is dead.
    Falsified,
    /// Exactly one literal is unassigned and the rest are false, forcing it.
    Unit(Literal),
    /// Two or more literals are still unassigned.
    Unresolved,
}

/// A recursive DPLL solver over an immutable formula.
#[derive(Debug, Clone)]
pub struct Dpll {
    cnf: Cnf,
    stats: SearchStats,
}

impl Solver for Dpll {
    fn new(cnf: Cnf) -> Self {
        Self {
            cnf,
            stats: SearchStats::default(),
        }
    }

    fn solve(&mut self) -> Option<Model> {
        self.stats = SearchStats::default();
        let mut assignment = Assignment::new(self.cnf.num_vars());
        if Self::search(&self.cnf, &mut assignment, &mut self.stats) {
            Some(assignment.into_model())
        } else {
            None
        }
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }
}

impl Dpll {
    /// Tries to extend `assignment` into one satisfying `cnf`. On success
    /// the satisfying assignment is left in `assignment`.
    fn search(cnf: &Cnf, assignment: &mut Assignment, stats: &mut SearchStats) -> bool {
        if !Self::propagate(cnf, assignment, stats) {
            stats.conflicts += 1;
            return false;
        }

        if Self::satisfied(cnf, assignment) {
            return true;
        }

        // Propagation reached fixpoint without a conflict and some clause is
        // still open, so an unassigned variable must exist.
        let Some(var) = assignment.first_unassigned() else {
            return false;
        };

        stats.decisions += 1;

        for value in [true, false] {
            let mut branch = assignment.clone();
            branch.assign(var, value);
            if Self::search(cnf, &mut branch, stats) {
                *assignment = branch;
                return true;
            }
        }

        false
    }

    /// Repeatedly sweeps the formula, assigning every literal forced by a
    /// unit clause, until a sweep changes nothing. Returns `false` as soon
    /// as a falsified clause is found.
    fn propagate(cnf: &Cnf, assignment: &mut Assignment, stats: &mut SearchStats) -> bool {
        loop {
            let mut changed = false;
            for clause in cnf.iter() {
                match Self::status(clause, assignment) {
                    ClauseStatus::Falsified => return false,
                    ClauseStatus::Unit(lit) => {
                        assignment.assign(lit.variable(), lit.polarity());
                        stats.propagations += 1;
                        changed = true;
                    }
                    ClauseStatus::Satisfied | ClauseStatus::Unresolved => {}
                }
            }
            if !changed {
                return true;
            }
        }
    }

    /// `true` once every clause contains a true literal.
    fn satisfied(cnf: &Cnf, assignment: &Assignment) -> bool {
        cnf.iter().all(|clause| {
            clause
                .iter()
                .any(|lit| assignment.literal_value(*lit) == Some(true))
        })
    }

    fn status(clause: &Clause, assignment: &Assignment) -> ClauseStatus {
        let mut open = None;
        let mut open_count = 0usize;

        for &lit in clause.iter() {
            match assignment.literal_value(lit) {
                Some(true) => return ClauseStatus::Satisfied,
                Some(false) => {}
                None => {
                    open_count += 1;
                    open = Some(lit);
                }
            }
        }

        match (open_count, open) {
            (1, Some(lit)) => ClauseStatus::Unit(lit),
            (0, _) => ClauseStatus::Falsified,
            _ => ClauseStatus::Unresolved,
        }
    }
}
