//! Puzzles as collections of given clues.

use crate::sudoku::SIZE;
use crate::sudoku::board::Board;
use crate::sudoku::error::SudokuError;
use rustc_hash::FxHashMap;

/// One given digit: cell (`row`, `col`) holds `digit`, all 1-based.
///
/// Construction is the validation point: a `Clue` that exists is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Clue {
    row: usize,
    col: usize,
    digit: usize,
}

impl Clue {
    /// Creates a clue after checking all three coordinates.
    ///
    /// # Errors
    ///
    /// [`SudokuError::ClueOutOfRange`] if `row`, `col`, or `digit` falls
    /// outside `1..=9`.
    pub fn new(row: usize, col: usize, digit: usize) -> Result<Self, SudokuError> {
        let in_range = |v: usize| (1..=SIZE).contains(&v);
        if in_range(row) && in_range(col) && in_range(digit) {
            Ok(Self { row, col, digit })
        } else {
            Err(SudokuError::ClueOutOfRange { row, col, digit })
        }
    }

    /// The clue's row, 1-based.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// The clue's column, 1-based.
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// The clue's digit, in `1..=9`.
    #[must_use]
    pub const fn digit(self) -> usize {
        self.digit
    }
}

/// A puzzle instance: the set of given clues.
///
/// Contradictory clues (two digits for one cell) are representable on
/// purpose — encoding them yields an unsatisfiable formula, which is a
/// legitimate outcome. [`Puzzle::check_givens`] detects the contradiction
/// up front for callers that prefer an eager diagnosis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Puzzle {
    clues: Vec<Clue>,
}

impl Puzzle {
    /// Creates a puzzle from already-validated clues.
    #[must_use]
    pub const fn new(clues: Vec<Clue>) -> Self {
        Self { clues }
    }

    /// Collects every non-empty cell of `board` as a clue.
    ///
    /// # Errors
    ///
    /// [`SudokuError::ClueOutOfRange`] if the board holds a digit outside
    /// `1..=9` (possible for boards built from raw arrays).
    pub fn from_board(board: &Board) -> Result<Self, SudokuError> {
        let mut clues = Vec::new();
        for row in 1..=SIZE {
            for col in 1..=SIZE {
                let digit = board.digit(row, col);
                if digit != 0 {
                    clues.push(Clue::new(row, col, digit as usize)?);
                }
            }
        }
        Ok(Self::new(clues))
    }

    /// The clues, in the order supplied.
    #[must_use]
    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    /// Number of given clues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clues.len()
    }

    /// `true` for a puzzle with no givens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clues.is_empty()
    }

    /// Scans the givens for two clues that assign different digits to one
    /// cell. Duplicate clues with the same digit are harmless and pass.
    ///
    /// # Errors
    ///
    /// [`SudokuError::ContradictoryGivens`] naming the first cell found
    /// with conflicting assignments.
    pub fn check_givens(&self) -> Result<(), SudokuError> {
        let mut cells: FxHashMap<(usize, usize), usize> = FxHashMap::default();
        for clue in &self.clues {
            match cells.insert((clue.row, clue.col), clue.digit) {
                Some(previous) if previous != clue.digit => {
                    return Err(SudokuError::ContradictoryGivens {
                        row: clue.row,
                        col: clue.col,
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }
}

impl FromIterator<Clue> for Puzzle {
    fn from_iter<I: IntoIterator<Item = Clue>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sudoku::board::EXAMPLE;

    #[test]
    fn test_clue_accepts_full_range() {
        for v in 1..=SIZE {
            assert!(Clue::new(v, v, v).is_ok());
        }
    }

    #[test]
    fn test_clue_rejects_zero_and_ten() {
        assert_eq!(
            Clue::new(0, 3, 6),
            Err(SudokuError::ClueOutOfRange { row: 0, col: 3, digit: 6 })
        );
        assert_eq!(
            Clue::new(1, 10, 6),
            Err(SudokuError::ClueOutOfRange { row: 1, col: 10, digit: 6 })
        );
        assert_eq!(
            Clue::new(1, 3, 0),
            Err(SudokuError::ClueOutOfRange { row: 1, col: 3, digit: 0 })
        );
        assert_eq!(
            Clue::new(1, 3, 10),
            Err(SudokuError::ClueOutOfRange { row: 1, col: 3, digit: 10 })
        );
    }

    #[test]
    fn test_from_board_collects_givens() {
        let puzzle = Puzzle::from_board(&Board::new(EXAMPLE)).expect("board digits in range");
        assert_eq!(puzzle.len(), 25);
        assert!(puzzle.clues().contains(&Clue::new(1, 3, 6).unwrap()));
        assert!(puzzle.clues().contains(&Clue::new(9, 8, 4).unwrap()));
    }

    #[test]
    fn test_from_board_rejects_wild_digit() {
        let mut cells = [[0u8; SIZE]; SIZE];
        cells[4][4] = 200;
        assert!(matches!(
            Puzzle::from_board(&Board::new(cells)),
            Err(SudokuError::ClueOutOfRange { .. })
        ));
    }

    #[test]
    fn test_check_givens_detects_contradiction() {
        let puzzle: Puzzle = [Clue::new(2, 2, 5).unwrap(), Clue::new(2, 2, 6).unwrap()]
            .into_iter()
            .collect();
        assert_eq!(
            puzzle.check_givens(),
            Err(SudokuError::ContradictoryGivens { row: 2, col: 2 })
        );
    }

    #[test]
    fn test_check_givens_allows_duplicates_and_distinct_cells() {
        let puzzle: Puzzle = [
            Clue::new(2, 2, 5).unwrap(),
            Clue::new(2, 2, 5).unwrap(),
            Clue::new(3, 2, 6).unwrap(),
        ]
        .into_iter()
        .collect();
        assert!(puzzle.check_givens().is_ok());
    }
}
