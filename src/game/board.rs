/// Largest supported number of rows or columns.
pub const MAX_DIM: usize = 16;
const MAX_CELLS: usize = MAX_DIM * MAX_DIM;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Max,
    Min,
}

/// Fixed-capacity H×W grid. Row 0 is the top, row H-1 is the bottom.
///
/// The cells live inline so a board is copied, not reallocated, when the
/// search derives a child position.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: [Cell; MAX_CELLS],
}

impl Board {
    /// Create an empty board. Dimensions must be in `1..=MAX_DIM`.
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        assert!(
            (1..=MAX_DIM).contains(&rows) && (1..=MAX_DIM).contains(&cols),
            "board dimensions {rows}x{cols} outside 1..={MAX_DIM}"
        );
        Board {
            rows,
            cols,
            cells: [Cell::Empty; MAX_CELLS],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    /// A column is full once its top cell is occupied.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.get(0, col) != Cell::Empty
    }

    /// Number of empty cells in a column.
    pub fn empty_in_column(&self, col: usize) -> usize {
        (0..self.rows)
            .filter(|&row| self.get(row, col) == Cell::Empty)
            .count()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// Copy of row `row`, left to right.
    pub fn row(&self, row: usize) -> Vec<Cell> {
        (0..self.cols).map(|col| self.get(row, col)).collect()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols, "({row}, {col}) off board");
        row * MAX_DIM + col
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field(
                "cells",
                &(0..self.rows).map(|r| self.row(r)).collect::<Vec<_>>(),
            )
            .finish()
    }
}
