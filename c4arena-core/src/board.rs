//! Board geometry and gravity-constrained piece placement

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of rows (row 0 is the bottom)
pub const ROWS: usize = 6;

/// Number of columns
pub const COLS: usize = 7;

/// Index of the center column
pub const CENTER_COL: usize = COLS / 2;

/// A move is the index of the column a piece is dropped into
pub type Move = usize;

/// One of the two players
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Red,
    Yellow,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Red => Side::Yellow,
            Side::Yellow => Side::Red,
        }
    }

    /// Single-character symbol used by the text renderer
    pub fn symbol(self) -> char {
        match self {
            Side::Red => 'R',
            Side::Yellow => 'Y',
        }
    }
}

/// Errors raised by board operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("column {0} is full")]
    ColumnFull(Move),

    #[error("column {0} is out of range (0-{max})", max = COLS - 1)]
    ColumnOutOfRange(Move),
}

/// 6x7 grid, copied by value on every drop
///
/// Occupied cells in each column always form a contiguous run from row 0,
/// tracked by `heights`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Side>; COLS]; ROWS],
    heights: [u8; COLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Empty board
    pub const fn new() -> Self {
        Self {
            cells: [[None; COLS]; ROWS],
            heights: [0; COLS],
        }
    }

    /// Replay a sequence of columns, alternating sides starting with `first`
    pub fn replay(moves: &[Move], first: Side) -> Result<Self, BoardError> {
        let mut board = Self::new();
        let mut side = first;
        for &col in moves {
            board = board.drop(col, side)?;
            side = side.opponent();
        }
        Ok(board)
    }

    /// Cell contents at (row, col); row 0 is the bottom
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Side> {
        self.cells[row][col]
    }

    /// Number of pieces in a column
    #[inline]
    pub fn height(&self, col: Move) -> usize {
        self.heights[col] as usize
    }

    /// A column accepts a piece while its top cell is empty
    #[inline]
    pub fn is_legal(&self, col: Move) -> bool {
        col < COLS && self.height(col) < ROWS
    }

    /// Return a new board with `side`'s piece in the lowest empty row of `col`
    pub fn drop(&self, col: Move, side: Side) -> Result<Board, BoardError> {
        if col >= COLS {
            return Err(BoardError::ColumnOutOfRange(col));
        }
        let row = self.height(col);
        if row >= ROWS {
            return Err(BoardError::ColumnFull(col));
        }

        let mut next = *self;
        next.cells[row][col] = Some(side);
        next.heights[col] += 1;
        Ok(next)
    }

    /// Non-full columns in ascending order
    pub fn legal_moves(&self) -> Vec<Move> {
        (0..COLS).filter(|&col| self.height(col) < ROWS).collect()
    }

    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&h| h as usize == ROWS)
    }

    /// Total pieces on the board
    pub fn piece_count(&self) -> usize {
        self.heights.iter().map(|&h| h as usize).sum()
    }

    /// Pieces of `side` in the given column
    pub fn column_count(&self, col: Move, side: Side) -> usize {
        (0..ROWS).filter(|&row| self.cells[row][col] == Some(side)).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            for col in 0..COLS {
                let c = self.cells[row][col].map_or('.', Side::symbol);
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        let labels: Vec<String> = (0..COLS).map(|c| c.to_string()).collect();
        writeln!(f, "{}", labels.join(" "))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        write!(f, "{}", self)?;
        write!(f, "}}")
    }
}
