//! Agents - a configured strategy bound to its own random source
//!
//! Level 4 - Utilities

use c4arena_core::{Board, Move, SearchEngine, Side};
use c4arena_rollout::{select_random_move, RolloutEvaluator};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{StrategyConfig, StrategyKind};

/// A playing agent created from a `StrategyConfig`
pub enum Agent {
    Search(SearchEngine),
    Rollout(RolloutEvaluator),
    Random(ChaCha8Rng),
}

impl Agent {
    /// Build an agent whose random choices are fully determined by `seed`
    pub fn from_config(config: &StrategyConfig, seed: u64) -> Self {
        if let Some(search) = config.search_config() {
            return Agent::Search(SearchEngine::with_seed(search, seed));
        }
        if let Some(rollout) = config.rollout_config() {
            return Agent::Rollout(RolloutEvaluator::with_seed(rollout, seed));
        }
        debug_assert_eq!(config.kind, StrategyKind::Random);
        Agent::Random(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Column to play for `side`, `None` when the agent has no move
    pub fn choose_move(&mut self, board: &Board, side: Side) -> Option<Move> {
        match self {
            Agent::Search(engine) => engine.best_move(board, side),
            Agent::Rollout(evaluator) => evaluator.best_move(board, side),
            Agent::Random(rng) => select_random_move(&board.legal_moves(), rng),
        }
    }
}
