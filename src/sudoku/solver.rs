//! End-to-end solving: encode, search, decode.

use crate::sat::dpll::Dpll;
use crate::sat::solver::Solver;
use crate::sudoku::board::Board;
use crate::sudoku::encode::Encoding;
use crate::sudoku::error::SudokuError;
use crate::sudoku::puzzle::Puzzle;

/// Solves `puzzle` with the search procedure `S`.
///
/// Returns `Ok(Some(board))` with the solved grid, or `Ok(None)` when no
/// assignment of digits satisfies the givens — an unsolvable puzzle is a
/// legitimate input, not an error.
///
/// # Errors
///
/// [`SudokuError::InconsistentModel`] if the solver hands back a model that
/// violates the cell constraints (a defect in `S`, not in the puzzle).
pub fn solve_with<S: Solver>(puzzle: &Puzzle) -> Result<Option<Board>, SudokuError> {
    let encoding = Encoding::new();
    let cnf = encoding.encode(puzzle);
    let mut solver = S::new(cnf);
    match solver.solve() {
        Some(model) => encoding.decode(&model).map(Some),
        None => Ok(None),
    }
}

/// Solves `puzzle` with the bundled DPLL procedure.
///
/// # Errors
///
/// As for [`solve_with`].
pub fn solve(puzzle: &Puzzle) -> Result<Option<Board>, SudokuError> {
    solve_with::<Dpll>(puzzle)
}
