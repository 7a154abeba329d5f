//! Game runner - executes single games between two strategies
//!
//! Level 3 - Step-level implementation

use std::time::{Duration, Instant};

use c4arena_core::{winner, Board, GameResult, Move, Side};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::agent::Agent;
use crate::config::StrategyConfig;
use crate::report::{BoardSnapshot, LastMove, Renderer};

/// One of the two tournament entrants. Seat A always plays Red.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    A,
    B,
}

impl Seat {
    pub fn side(self) -> Side {
        match self {
            Seat::A => Side::Red,
            Seat::B => Side::Yellow,
        }
    }

    pub fn from_side(side: Side) -> Self {
        match side {
            Side::Red => Seat::A,
            Side::Yellow => Seat::B,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Seat::A => Seat::B,
            Seat::B => Seat::A,
        }
    }

    fn index(self) -> usize {
        match self {
            Seat::A => 0,
            Seat::B => 1,
        }
    }
}

/// Outcome of a single game
#[derive(Clone, Debug)]
pub struct GameOutcome {
    /// Winning seat, `None` for a draw
    pub winner: Option<Seat>,
    /// Seat that made the first move
    pub starter: Seat,
    pub plies: u32,
    /// Move history, starting with the starter's first move
    pub moves: Vec<Move>,
    pub final_board: Board,
    decision_time: [Duration; 2],
    decisions: [u32; 2],
}

impl GameOutcome {
    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }

    /// Wall-clock time `seat` spent choosing moves
    pub fn decision_time(&self, seat: Seat) -> Duration {
        self.decision_time[seat.index()]
    }

    /// Number of moves `seat` was asked for
    pub fn decisions(&self, seat: Seat) -> u32 {
        self.decisions[seat.index()]
    }
}

/// Play one game from the empty board.
///
/// Each seat gets its own agent seeded from `seed`. If an agent returns no
/// move before the game is decided, the game ends with no winner.
pub fn play_game(
    a: &StrategyConfig,
    b: &StrategyConfig,
    starter: Seat,
    seed: u64,
    mut renderer: Option<&mut dyn Renderer>,
) -> GameOutcome {
    let mut seeder = ChaCha8Rng::seed_from_u64(seed);
    let mut agents = [
        Agent::from_config(a, seeder.gen()),
        Agent::from_config(b, seeder.gen()),
    ];

    let mut board = Board::new();
    let mut moves = Vec::new();
    let mut decision_time = [Duration::ZERO; 2];
    let mut decisions = [0u32; 2];
    let mut seat = starter;

    if let Some(r) = renderer.as_mut() {
        r.render(&BoardSnapshot {
            board: &board,
            last_move: None,
            ply: 0,
        });
    }

    while GameResult::of(&board) == GameResult::Ongoing {
        let side = seat.side();

        let start = Instant::now();
        let mv = agents[seat.index()].choose_move(&board, side);
        decision_time[seat.index()] += start.elapsed();
        decisions[seat.index()] += 1;

        let Some(column) = mv else {
            tracing::warn!(seat = ?seat, ply = moves.len(), "agent returned no move, ending game");
            break;
        };

        board = match board.drop(column, side) {
            Ok(next) => next,
            Err(err) => {
                tracing::warn!(seat = ?seat, %err, "agent chose an illegal move, ending game");
                break;
            }
        };
        moves.push(column);

        if let Some(r) = renderer.as_mut() {
            r.render(&BoardSnapshot {
                board: &board,
                last_move: Some(LastMove { column, side }),
                ply: moves.len() as u32,
            });
        }

        seat = seat.other();
    }

    GameOutcome {
        winner: winner(&board).map(Seat::from_side),
        starter,
        plies: moves.len() as u32,
        moves,
        final_board: board,
        decision_time,
        decisions,
    }
}
