//! Random playouts from a position to the end of the game

use c4arena_core::{Board, GameResult, Move, Side};
use rand::prelude::*;

/// Result of a single playout
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RolloutResult {
    /// Winner, `None` for a filled board
    pub winner: Option<Side>,
    /// Plies played during the playout
    pub plies: u32,
}

/// Play uniformly random legal moves, alternating sides from `to_move`,
/// until one side connects four or the board fills
pub fn playout<R: Rng>(board: &Board, to_move: Side, rng: &mut R) -> RolloutResult {
    let mut current = *board;
    let mut side = to_move;
    let mut plies = 0;

    loop {
        match GameResult::of(&current) {
            GameResult::Won(winner) => {
                return RolloutResult {
                    winner: Some(winner),
                    plies,
                }
            }
            GameResult::Draw => return RolloutResult { winner: None, plies },
            GameResult::Ongoing => {}
        }

        let moves = current.legal_moves();
        let Some(col) = select_random_move(&moves, rng) else {
            return RolloutResult { winner: None, plies };
        };
        let Ok(next) = current.drop(col, side) else {
            return RolloutResult { winner: None, plies };
        };

        current = next;
        side = side.opponent();
        plies += 1;
    }
}

/// Select a move uniformly from the list
pub fn select_random_move<R: Rng>(moves: &[Move], rng: &mut R) -> Option<Move> {
    moves.choose(rng).copied()
}
