//! Presentation seams for games in progress and finished tournaments
//!
//! Level 4 - Utilities

use std::io;

use c4arena_core::{Board, Move, Side};

use crate::tournament::TournamentResult;

/// The most recent drop on the board
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LastMove {
    pub column: Move,
    pub side: Side,
}

/// Board state handed to a `Renderer` after every ply
#[derive(Clone, Copy, Debug)]
pub struct BoardSnapshot<'a> {
    pub board: &'a Board,
    /// `None` before the first move
    pub last_move: Option<LastMove>,
    pub ply: u32,
}

/// Observes a game as it is played
pub trait Renderer {
    fn render(&mut self, snapshot: &BoardSnapshot<'_>);
}

/// Formats final tournament counters and timings
pub trait Reporter {
    fn report(&self, result: &TournamentResult, out: &mut dyn io::Write) -> io::Result<()>;
}
