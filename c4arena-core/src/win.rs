//! Four-in-a-row detection and terminal-state classification

use crate::board::{Board, Side, COLS, ROWS};

/// Cells in a line that count as a win (and as a heuristic window)
pub const WINDOW_LEN: usize = 4;

/// Line orientations as (row step, col step):
/// horizontal, vertical, rising diagonal, falling diagonal
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Number of length-4 windows on a 6x7 board (24 + 21 + 12 + 12)
pub const WINDOW_COUNT: usize = 69;

/// Every length-4 window as (row, col) cells, grouped by orientation
pub const WINDOWS: [[(usize, usize); WINDOW_LEN]; WINDOW_COUNT] = build_windows();

const fn build_windows() -> [[(usize, usize); WINDOW_LEN]; WINDOW_COUNT] {
    let mut out = [[(0, 0); WINDOW_LEN]; WINDOW_COUNT];
    let mut n = 0;
    let mut d = 0;
    while d < DIRECTIONS.len() {
        let (dr, dc) = DIRECTIONS[d];
        let mut row = 0;
        while row < ROWS {
            let mut col = 0;
            while col < COLS {
                let end_r = row as isize + dr * (WINDOW_LEN as isize - 1);
                let end_c = col as isize + dc * (WINDOW_LEN as isize - 1);
                if end_r >= 0 && end_r < ROWS as isize && end_c < COLS as isize {
                    let mut k = 0;
                    while k < WINDOW_LEN {
                        let r = (row as isize + dr * k as isize) as usize;
                        let c = (col as isize + dc * k as isize) as usize;
                        out[n][k] = (r, c);
                        k += 1;
                    }
                    n += 1;
                }
                col += 1;
            }
            row += 1;
        }
        d += 1;
    }
    out
}

/// Outcome of a board position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Ongoing,
    Won(Side),
    Draw,
}

impl GameResult {
    pub fn of(board: &Board) -> Self {
        match winner(board) {
            Some(side) => GameResult::Won(side),
            None if board.is_full() => GameResult::Draw,
            None => GameResult::Ongoing,
        }
    }

    pub fn is_over(self) -> bool {
        self != GameResult::Ongoing
    }
}

/// True on the first window fully owned by `side`
pub fn has_four_in_row(board: &Board, side: Side) -> bool {
    WINDOWS
        .iter()
        .any(|window| window.iter().all(|&(r, c)| board.get(r, c) == Some(side)))
}

/// Side holding a four-in-a-row, if any
pub fn winner(board: &Board) -> Option<Side> {
    [Side::Red, Side::Yellow]
        .into_iter()
        .find(|&side| has_four_in_row(board, side))
}

/// A side has won or no column accepts a piece
pub fn is_terminal(board: &Board) -> bool {
    has_four_in_row(board, Side::Red) || has_four_in_row(board, Side::Yellow) || board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_table() {
        assert_eq!(WINDOWS.len(), 69);
        for window in WINDOWS.iter() {
            for &(r, c) in window {
                assert!(r < ROWS && c < COLS);
            }
        }
        // Horizontal windows come first
        assert_eq!(WINDOWS[0], [(0, 0), (0, 1), (0, 2), (0, 3)]);
        // Last window is the top-right falling diagonal
        assert_eq!(WINDOWS[68], [(5, 3), (4, 4), (3, 5), (2, 6)]);
    }

    #[test]
    fn test_horizontal_win() {
        let board = Board::replay(&[0, 0, 1, 1, 2, 2, 3], Side::Red).unwrap();
        assert!(has_four_in_row(&board, Side::Red));
        assert!(!has_four_in_row(&board, Side::Yellow));
        assert_eq!(winner(&board), Some(Side::Red));
        assert!(is_terminal(&board));
    }

    #[test]
    fn test_vertical_win() {
        let board = Board::replay(&[4, 5, 4, 5, 4, 5, 1, 5], Side::Red).unwrap();
        assert!(has_four_in_row(&board, Side::Yellow));
        assert!(!has_four_in_row(&board, Side::Red));
        assert_eq!(GameResult::of(&board), GameResult::Won(Side::Yellow));
    }

    #[test]
    fn test_rising_diagonal_win() {
        // Red at (0,0) (1,1) (2,2) (3,3)
        let board = Board::replay(
            &[0, 1, 1, 2, 2, 3, 2, 3, 3, 6, 3],
            Side::Red,
        )
        .unwrap();
        assert!(has_four_in_row(&board, Side::Red));
        assert!(!has_four_in_row(&board, Side::Yellow));
    }

    #[test]
    fn test_falling_diagonal_win() {
        // Red at (3,0) (2,1) (1,2) (0,3)
        let board = Board::replay(
            &[3, 2, 2, 1, 1, 0, 1, 0, 0, 6, 0],
            Side::Red,
        )
        .unwrap();
        assert!(has_four_in_row(&board, Side::Red));
        assert!(!has_four_in_row(&board, Side::Yellow));
    }

    #[test]
    fn test_three_is_not_a_win() {
        let board = Board::replay(&[0, 0, 1, 1, 2, 2], Side::Red).unwrap();
        assert!(!has_four_in_row(&board, Side::Red));
        assert!(!is_terminal(&board));
        assert_eq!(GameResult::of(&board), GameResult::Ongoing);
    }

    #[test]
    fn test_empty_board_not_terminal() {
        assert!(!is_terminal(&Board::new()));
        assert_eq!(winner(&Board::new()), None);
    }
}
