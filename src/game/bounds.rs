//! Line geometry around a single cell.
//!
//! Win detection and heuristic scoring both look only at the four lines
//! through the last move, each clipped to 3 cells either side of it and to
//! the board edges. Both call [`get_bounds`] so they always see the same
//! extents.

use super::state::Position;

/// Reach of a window on either side of the centre cell.
pub const REACH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Top-left to bottom-right (`\`).
    Downward,
    /// Bottom-left to top-right (`/`).
    Upward,
}

/// A run of cells starting at `start` and walking `len` steps in `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub start: Position,
    pub direction: Direction,
    pub len: usize,
}

impl Line {
    /// The `i`-th cell of the line.
    pub fn at(&self, i: usize) -> Position {
        debug_assert!(i < self.len);
        let Position { row, col } = self.start;
        match self.direction {
            Direction::Horizontal => Position::new(row, col + i),
            Direction::Vertical => Position::new(row + i, col),
            Direction::Downward => Position::new(row + i, col + i),
            Direction::Upward => Position::new(row - i, col + i),
        }
    }

    pub fn end(&self) -> Position {
        self.at(self.len - 1)
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let line = *self;
        (0..line.len).map(move |i| line.at(i))
    }
}

/// The clamped window around one cell and the four lines through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBounds {
    pub min_row: usize,
    pub min_col: usize,
    pub max_row: usize,
    pub max_col: usize,
    pub horizontal: Line,
    pub vertical: Line,
    pub downward: Line,
    pub upward: Line,
}

impl LineBounds {
    pub fn lines(&self) -> [Line; 4] {
        [self.horizontal, self.vertical, self.downward, self.upward]
    }
}

/// Compute the four clamped lines through `pos` on a `rows`×`cols` board.
///
/// Pure geometry: the board contents are never read.
pub fn get_bounds(rows: usize, cols: usize, pos: Position) -> LineBounds {
    let Position { row, col } = pos;
    debug_assert!(row < rows && col < cols, "{pos:?} off a {rows}x{cols} board");

    let max_row = (row + REACH).min(rows - 1);
    let max_col = (col + REACH).min(cols - 1);
    let min_row = row.saturating_sub(REACH);
    let min_col = col.saturating_sub(REACH);

    let horizontal = Line {
        start: Position::new(row, min_col),
        direction: Direction::Horizontal,
        len: max_col - min_col + 1,
    };
    let vertical = Line {
        start: Position::new(min_row, col),
        direction: Direction::Vertical,
        len: max_row - min_row + 1,
    };

    let up_left = (row - min_row).min(col - min_col);
    let down_right = (max_row - row).min(max_col - col);
    let downward = Line {
        start: Position::new(row - up_left, col - up_left),
        direction: Direction::Downward,
        len: up_left + down_right + 1,
    };

    let down_left = (max_row - row).min(col - min_col);
    let up_right = (row - min_row).min(max_col - col);
    let upward = Line {
        start: Position::new(row + down_left, col - down_left),
        direction: Direction::Upward,
        len: down_left + up_right + 1,
    };

    LineBounds {
        min_row,
        min_col,
        max_row,
        max_col,
        horizontal,
        vertical,
        downward,
        upward,
    }
}
