//! Depth-limited minimax with optional alpha-beta pruning
//!
//! One parameterized search covers every variant: plain minimax,
//! alpha-beta, and either of those with leaf-score jitter.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Move, Side};
use crate::eval::{evaluate, Heuristics, Score, WIN_SCORE};
use crate::win::GameResult;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Search parameters
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies to explore before falling back to the heuristic
    pub depth: u32,
    /// Stop evaluating siblings once alpha >= beta
    pub pruning: bool,
    /// Uniform perturbation in [-jitter, jitter] added to heuristic leaves
    #[serde(default)]
    pub jitter: Option<Score>,
    #[serde(default)]
    pub heuristics: Heuristics,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 5,
            pruning: true,
            jitter: None,
            heuristics: Heuristics::default(),
        }
    }
}

impl SearchConfig {
    /// Plain minimax at the given depth
    pub fn minimax(depth: u32) -> Self {
        Self {
            depth,
            pruning: false,
            ..Default::default()
        }
    }

    /// Minimax with alpha-beta pruning at the given depth
    pub fn alpha_beta(depth: u32) -> Self {
        Self {
            depth,
            pruning: true,
            ..Default::default()
        }
    }

    pub fn with_jitter(mut self, jitter: Score) -> Self {
        self.jitter = Some(jitter);
        self
    }

    pub fn with_heuristics(mut self, heuristics: Heuristics) -> Self {
        self.heuristics = heuristics;
        self
    }
}

// ============================================================================
// SEARCH
// ============================================================================

/// Result of a search from the root
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// `None` only when the root has no move to make
    pub best_move: Option<Move>,
    /// Root value from the searching side's perspective
    pub score: Score,
    /// Nodes visited, including the root
    pub nodes: u64,
}

/// Search `board` for `side`, which is the maximizing player
pub fn search<R: Rng>(
    board: &Board,
    side: Side,
    config: &SearchConfig,
    rng: &mut R,
) -> SearchOutcome {
    let mut ctx = Search {
        maximizer: side,
        config,
        rng,
        nodes: 0,
    };
    let (best_move, score) = ctx.minimax(board, config.depth, Score::MIN, Score::MAX, true);

    SearchOutcome {
        best_move,
        score,
        nodes: ctx.nodes,
    }
}

struct Search<'a, R> {
    maximizer: Side,
    config: &'a SearchConfig,
    rng: &'a mut R,
    nodes: u64,
}

impl<R: Rng> Search<'_, R> {
    fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> (Option<Move>, Score) {
        self.nodes += 1;

        match GameResult::of(board) {
            GameResult::Won(side) if side == self.maximizer => return (None, WIN_SCORE),
            GameResult::Won(_) => return (None, -WIN_SCORE),
            GameResult::Draw => return (None, 0),
            GameResult::Ongoing => {}
        }

        if depth == 0 {
            return (None, self.leaf_score(board));
        }

        let moves = board.legal_moves();
        // Fallback when no child ever improves on the initial bound
        let mut best_move = match moves.choose(&mut *self.rng) {
            Some(&mv) => mv,
            None => return (None, self.leaf_score(board)),
        };

        let mover = if maximizing {
            self.maximizer
        } else {
            self.maximizer.opponent()
        };
        let mut best = if maximizing { Score::MIN } else { Score::MAX };

        for col in moves {
            let Ok(child) = board.drop(col, mover) else {
                continue;
            };
            let (_, value) = self.minimax(&child, depth - 1, alpha, beta, !maximizing);

            if maximizing {
                if value > best {
                    best = value;
                    best_move = col;
                }
                alpha = alpha.max(best);
            } else {
                if value < best {
                    best = value;
                    best_move = col;
                }
                beta = beta.min(best);
            }

            // Must follow the bound update for this child
            if self.config.pruning && alpha >= beta {
                break;
            }
        }

        (Some(best_move), best)
    }

    /// Heuristic from the maximizer's perspective, regardless of who is to move
    ///
    /// Kept strictly inside `(-WIN_SCORE, WIN_SCORE)` so a proven result
    /// always outranks a heuristic one.
    fn leaf_score(&mut self, board: &Board) -> Score {
        let base = evaluate(board, self.maximizer, &self.config.heuristics);
        let score = match self.config.jitter {
            Some(j) if j > 0 => base.saturating_add(self.rng.gen_range(-j..=j)),
            _ => base,
        };
        score.clamp(-WIN_SCORE + 1, WIN_SCORE - 1)
    }
}

// ============================================================================
// SEARCH ENGINE
// ============================================================================

/// Search player owning its configuration and random source
pub struct SearchEngine {
    config: SearchConfig,
    rng: ChaCha8Rng,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_seed(config, 42)
    }

    pub fn with_seed(config: SearchConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Full search result for `side` to move
    pub fn search(&mut self, board: &Board, side: Side) -> SearchOutcome {
        let outcome = search(board, side, &self.config, &mut self.rng);
        tracing::debug!(
            side = ?side,
            depth = self.config.depth,
            pruning = self.config.pruning,
            best_move = ?outcome.best_move,
            score = outcome.score,
            nodes = outcome.nodes,
            "search complete"
        );
        outcome
    }

    /// Best column for `side`, `None` when no move is available
    pub fn best_move(&mut self, board: &Board, side: Side) -> Option<Move> {
        self.search(board, side).best_move
    }
}

// ============================================================================
// TESTS
// ============================================================================
