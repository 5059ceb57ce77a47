//! Error conditions raised by puzzle handling.
//!
//! An unsolvable puzzle is not represented here: unsatisfiability is a
//! normal solver outcome, surfaced as the absence of a solution rather than
//! an error value.

use std::error::Error;
use std::fmt;

/// Everything that can go wrong before or after the satisfiability search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SudokuError {
    /// A clue's row, column, or digit lies outside `1..=9`. Rejected at
    /// construction, before any encoding takes place.
    ClueOutOfRange {
        /// Row of the offending clue.
        row: usize,
        /// Column of the offending clue.
        col: usize,
        /// Digit of the offending clue.
        digit: usize,
    },
    /// Two given clues assign different digits to the same cell.
    ContradictoryGivens {
        /// Row of the doubly-assigned cell.
        row: usize,
        /// Column of the doubly-assigned cell.
        col: usize,
    },
    /// The solver returned a model in which some cell has no digit set, or
    /// more than one. This is a contract violation by the solver, never a
    /// property of the puzzle.
    InconsistentModel {
        /// Row of the cell with a malformed digit assignment.
        row: usize,
        /// Column of the cell with a malformed digit assignment.
        col: usize,
    },
    /// Puzzle text did not describe a 9x9 grid of digits.
    MalformedGrid(String),
}

impl fmt::Display for SudokuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClueOutOfRange { row, col, digit } => {
                write!(f, "clue ({row},{col})={digit} is outside the 1..=9 range")
            }
            Self::ContradictoryGivens { row, col } => {
                write!(f, "two given clues assign different digits to cell ({row},{col})")
            }
            Self::InconsistentModel { row, col } => {
                write!(f, "solver model sets zero or several digits for cell ({row},{col})")
            }
            Self::MalformedGrid(reason) => write!(f, "malformed puzzle grid: {reason}"),
        }
    }
}

impl Error for SudokuError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_cell() {
        let err = SudokuError::ContradictoryGivens { row: 3, col: 8 };
        assert!(err.to_string().contains("(3,8)"));

        let err = SudokuError::ClueOutOfRange { row: 1, col: 2, digit: 10 };
        assert!(err.to_string().contains("(1,2)=10"));
    }
}
