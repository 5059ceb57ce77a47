//! Translation between puzzles and CNF formulas.
//!
//! One boolean proposition exists per (row, column, digit) triple — "this
//! cell holds this digit" — 729 in all. [`Encoding`] allocates the
//! propositions' variable identifiers in row-major (row, column, digit)
//! order and keeps them in one flat array, so the four views the
//! constraints need (a cell's digits, a row for one digit, a column for one
//! digit, a box for one digit) are pure stride arithmetic over that array:
//! nothing is stored per view, and each accessor costs nine index
//! computations.
//!
//! The constraint families are all instances of the same shape, "exactly
//! one of these nine propositions": each cell holds exactly one digit, each
//! digit appears exactly once per row, per column, and per box. With the
//! pairwise cardinality encoding that is 324 families of 37 clauses —
//! 11 988 structural clauses — plus one unit clause per given.

use crate::sat::assignment::Model;
use crate::sat::cardinality::exactly_one;
use crate::sat::cnf::Cnf;
use crate::sat::literal::{Literal, Variable};
use crate::sat::pool::VarPool;
use crate::sudoku::board::Board;
use crate::sudoku::error::SudokuError;
use crate::sudoku::puzzle::Puzzle;
use crate::sudoku::{BOX_SIZE, SIZE};

/// A single "cell (row, col) holds digit" proposition, all fields 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Proposition {
    /// Row of the cell, in `1..=9`.
    pub row: usize,
    /// Column of the cell, in `1..=9`.
    pub col: usize,
    /// The digit asserted for the cell, in `1..=9`.
    pub digit: usize,
}

/// The variable numbering for one puzzle instance.
///
/// Built once per puzzle, immutable afterwards. Because the pool hands out
/// identifiers sequentially and construction requests every triple in
/// row-major order, identifiers are dense in `1..=729` and the geometry
/// accessors below can recover any view by index arithmetic.
#[derive(Debug, Clone)]
pub struct Encoding {
    vars: Vec<Variable>,
}

impl Default for Encoding {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoding {
    /// Allocates the 729 proposition variables.
    #[must_use]
    pub fn new() -> Self {
        let mut pool = VarPool::new();
        let mut vars = Vec::with_capacity(SIZE * SIZE * SIZE);
        for row in 1..=SIZE {
            for col in 1..=SIZE {
                for digit in 1..=SIZE {
                    vars.push(pool.id(Proposition { row, col, digit }));
                }
            }
        }
        Self { vars }
    }

    /// Number of variables allocated (729).
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.vars.len()
    }

    /// Position of a triple in the flat array: row-major by row, then
    /// column, then digit. All inputs 1-based.
    const fn index(row: usize, col: usize, digit: usize) -> usize {
        (row - 1) * SIZE * SIZE + (col - 1) * SIZE + (digit - 1)
    }

    /// The variable asserting that cell (`row`, `col`) holds `digit`.
    #[must_use]
    pub fn variable(&self, row: usize, col: usize, digit: usize) -> Variable {
        self.vars[Self::index(row, col, digit)]
    }

    /// The nine digit-variables of one cell: a contiguous run of the array.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> [Variable; SIZE] {
        let start = Self::index(row, col, 1);
        core::array::from_fn(|d| self.vars[start + d])
    }

    /// For a fixed digit, the nine variables across the columns of `row`:
    /// stride [`SIZE`] through the array.
    #[must_use]
    pub fn row_digit(&self, row: usize, digit: usize) -> [Variable; SIZE] {
        core::array::from_fn(|col| self.vars[Self::index(row, col + 1, digit)])
    }

    /// For a fixed digit, the nine variables down the rows of `col`: stride
    /// `SIZE * SIZE` through the array.
    #[must_use]
    pub fn col_digit(&self, col: usize, digit: usize) -> [Variable; SIZE] {
        core::array::from_fn(|row| self.vars[Self::index(row + 1, col, digit)])
    }

    /// For a fixed digit, the nine variables of one 3x3 box. `box_row` and
    /// `box_col` index the box grid, both in `1..=3`. The result is three
    /// row segments of three contiguous columns, concatenated top to
    /// bottom.
    #[must_use]
    pub fn box_digit(&self, box_row: usize, box_col: usize, digit: usize) -> [Variable; SIZE] {
        core::array::from_fn(|i| {
            let row = (box_row - 1) * BOX_SIZE + i / BOX_SIZE + 1;
            let col = (box_col - 1) * BOX_SIZE + i % BOX_SIZE + 1;
            self.vars[Self::index(row, col, digit)]
        })
    }

    /// Builds the full CNF formula for `puzzle`: the four structural
    /// constraint families, then one unit clause per given clue. Clause
    /// order is deterministic; it matters for reproducibility, not meaning.
    #[must_use]
    pub fn encode(&self, puzzle: &Puzzle) -> Cnf {
        let mut cnf = Cnf::new(self.num_vars());

        // Each cell holds exactly one digit.
        for row in 1..=SIZE {
            for col in 1..=SIZE {
                cnf.extend(exactly_one(&positives(self.cell(row, col))));
            }
        }

        // Each digit appears exactly once in each row.
        for row in 1..=SIZE {
            for digit in 1..=SIZE {
                cnf.extend(exactly_one(&positives(self.row_digit(row, digit))));
            }
        }

        // Each digit appears exactly once in each column.
        for col in 1..=SIZE {
            for digit in 1..=SIZE {
                cnf.extend(exactly_one(&positives(self.col_digit(col, digit))));
            }
        }

        // Each digit appears exactly once in each box.
        for box_row in 1..=BOX_SIZE {
            for box_col in 1..=BOX_SIZE {
                for digit in 1..=SIZE {
                    cnf.extend(exactly_one(&positives(self.box_digit(
                        box_row, box_col, digit,
                    ))));
                }
            }
        }

        for clue in puzzle.clues() {
            cnf.add_unit(Literal::positive(self.variable(
                clue.row(),
                clue.col(),
                clue.digit(),
            )));
        }

        cnf
    }

    /// Reads a solved board out of a model: for each cell, the one digit
    /// whose proposition is true.
    ///
    /// # Errors
    ///
    /// [`SudokuError::InconsistentModel`] if some cell has zero or several
    /// true digit-propositions. A sound solver given the formula from
    /// [`encode`](Self::encode) never produces such a model, so this
    /// signals a solver defect rather than a puzzle property.
    pub fn decode(&self, model: &Model) -> Result<Board, SudokuError> {
        let mut cells = [[0u8; SIZE]; SIZE];
        for row in 1..=SIZE {
            for col in 1..=SIZE {
                let mut found = None;
                for digit in 1..=SIZE {
                    if model.value(self.variable(row, col, digit)) {
                        if found.is_some() {
                            return Err(SudokuError::InconsistentModel { row, col });
                        }
                        found = Some(digit as u8);
                    }
                }
                match found {
                    Some(digit) => cells[row - 1][col - 1] = digit,
                    None => return Err(SudokuError::InconsistentModel { row, col }),
                }
            }
        }
        Ok(Board::new(cells))
    }
}

/// Positive literals over a block of nine variables.
fn positives(vars: [Variable; SIZE]) -> [Literal; SIZE] {
    vars.map(Literal::positive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sudoku::board::EXAMPLE;
    use std::collections::HashSet;

    /// Structural clause count: 324 exactly-one families of 37 clauses.
    const STRUCTURAL_CLAUSES: usize = 4 * SIZE * SIZE * 37;

    #[test]
    fn test_variables_are_dense_and_injective() {
        let enc = Encoding::new();
        assert_eq!(enc.num_vars(), 729);

        let mut seen = HashSet::new();
        for row in 1..=SIZE {
            for col in 1..=SIZE {
                for digit in 1..=SIZE {
                    let var = enc.variable(row, col, digit);
                    assert!((1..=729).contains(&(var as usize)));
                    assert!(seen.insert(var));
                }
            }
        }
        assert_eq!(seen.len(), 729);
    }

    #[test]
    fn test_cell_is_contiguous() {
        let enc = Encoding::new();
        assert_eq!(enc.cell(1, 1), core::array::from_fn(|d| (d + 1) as Variable));
        // Cell (2,3): skips one full row (81) plus two cells (18).
        let base = 81 + 18;
        assert_eq!(
            enc.cell(2, 3),
            core::array::from_fn(|d| (base + d + 1) as Variable)
        );
    }

    #[test]
    fn test_row_digit_strides_by_nine() {
        let enc = Encoding::new();
        let vars = enc.row_digit(1, 5);
        for (col, &var) in vars.iter().enumerate() {
            assert_eq!(var, enc.variable(1, col + 1, 5));
            assert_eq!(var as usize, col * 9 + 5);
        }
    }

    #[test]
    fn test_col_digit_strides_by_eighty_one() {
        let enc = Encoding::new();
        let vars = enc.col_digit(4, 2);
        for (row, &var) in vars.iter().enumerate() {
            assert_eq!(var, enc.variable(row + 1, 4, 2));
            assert_eq!(var as usize, row * 81 + 3 * 9 + 2);
        }
    }

    #[test]
    fn test_box_digit_concatenates_row_segments() {
        let enc = Encoding::new();
        // Box (2,3) covers rows 4..=6, columns 7..=9.
        let vars = enc.box_digit(2, 3, 1);
        let expected: [Variable; SIZE] = core::array::from_fn(|i| {
            let row = 4 + i / 3;
            let col = 7 + i % 3;
            enc.variable(row, col, 1)
        });
        assert_eq!(vars, expected);
    }

    #[test]
    fn test_views_cover_the_same_universe() {
        let enc = Encoding::new();
        let mut from_rows = HashSet::new();
        let mut from_boxes = HashSet::new();
        for digit in 1..=SIZE {
            for i in 1..=SIZE {
                from_rows.extend(enc.row_digit(i, digit));
            }
            for box_row in 1..=BOX_SIZE {
                for box_col in 1..=BOX_SIZE {
                    from_boxes.extend(enc.box_digit(box_row, box_col, digit));
                }
            }
        }
        assert_eq!(from_rows.len(), 729);
        assert_eq!(from_rows, from_boxes);
    }

    #[test]
    fn test_structural_clause_count() {
        let enc = Encoding::new();
        let cnf = enc.encode(&Puzzle::default());
        assert_eq!(cnf.len(), STRUCTURAL_CLAUSES);
        assert_eq!(cnf.len(), 11_988);
        assert_eq!(cnf.num_vars(), 729);
    }

    #[test]
    fn test_givens_append_unit_clauses() {
        let enc = Encoding::new();
        let puzzle = Puzzle::from_board(&Board::new(EXAMPLE)).unwrap();
        let cnf = enc.encode(&puzzle);
        assert_eq!(cnf.len(), STRUCTURAL_CLAUSES + 25);

        let units: Vec<_> = cnf.iter().filter(|c| c.is_unit()).collect();
        assert_eq!(units.len(), 25);
        // First clue of the example board in row-major order: (1,3) holds 6.
        assert_eq!(units[0][0], Literal::positive(enc.variable(1, 3, 6)));
    }

    #[test]
    fn test_decode_reads_one_digit_per_cell() {
        let enc = Encoding::new();
        let mut model = Model::all_false(enc.num_vars());
        for row in 1..=SIZE {
            for col in 1..=SIZE {
                let digit = (row + col) % SIZE + 1;
                model.set(enc.variable(row, col, digit), true);
            }
        }

        let board = enc.decode(&model).expect("one digit per cell");
        assert_eq!(board.digit(1, 1), 3);
        assert_eq!(board.digit(9, 9), 1);
    }

    #[test]
    fn test_decode_rejects_empty_cell() {
        let enc = Encoding::new();
        let model = Model::all_false(enc.num_vars());
        assert_eq!(
            enc.decode(&model),
            Err(SudokuError::InconsistentModel { row: 1, col: 1 })
        );
    }

    #[test]
    fn test_decode_rejects_double_assignment() {
        let enc = Encoding::new();
        let mut model = Model::all_false(enc.num_vars());
        for row in 1..=SIZE {
            for col in 1..=SIZE {
                model.set(enc.variable(row, col, 1), true);
            }
        }
        model.set(enc.variable(3, 4, 7), true);
        assert_eq!(
            enc.decode(&model),
            Err(SudokuError::InconsistentModel { row: 3, col: 4 })
        );
    }
}
