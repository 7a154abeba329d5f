//! C4ARENA Core - Connect Four engine and search
//!
//! This crate provides the core game logic for C4ARENA:
//! - Board representation with gravity-constrained drops
//! - Four-in-a-row detection over the 69 winning windows
//! - Sliding-window positional heuristic
//! - Minimax search with optional alpha-beta pruning

pub mod board;
pub mod win;
pub mod eval;
pub mod search;

// Re-exports for convenient access
pub use board::{Board, BoardError, Move, Side, COLS, ROWS, CENTER_COL};
pub use win::{has_four_in_row, is_terminal, winner, GameResult, WINDOWS};
pub use eval::{evaluate, score, window_score, Heuristics, Score, MAX_JITTER, MAX_WEIGHT, WIN_SCORE};
pub use search::{search, SearchConfig, SearchEngine, SearchOutcome};
