//! C4ARENA Rollout - flat Monte-Carlo move evaluation
//!
//! For each candidate column the evaluator runs independent random playouts
//! and keeps the column with the best aggregate outcome. No statistics are
//! carried between calls and there is no tree: this is a flat evaluator,
//! not tree search.
//!
//! ## Architecture
//! - `evaluator`: per-move sampling and selection
//! - `rollout`: single playouts and random move selection

pub mod evaluator;
pub mod rollout;

pub use evaluator::{MoveStatistics, RolloutEvaluator};
pub use rollout::{playout, select_random_move, RolloutResult};

use serde::{Deserialize, Serialize};

/// How playout outcomes are aggregated per candidate move
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RolloutScoring {
    /// Count playouts won by the evaluating side
    #[default]
    Wins,
    /// +1 per win, -1 per loss, 0 per draw
    NetOutcome,
}

/// Rollout evaluator configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolloutConfig {
    /// Independent playouts per legal move
    pub samples_per_move: u32,
    #[serde(default)]
    pub scoring: RolloutScoring,
}

impl Default for RolloutConfig {
    fn default() -> Self {
        Self {
            samples_per_move: 100,
            scoring: RolloutScoring::Wins,
        }
    }
}

impl RolloutConfig {
    pub fn new(samples_per_move: u32) -> Self {
        Self {
            samples_per_move,
            ..Default::default()
        }
    }

    pub fn with_scoring(mut self, scoring: RolloutScoring) -> Self {
        self.scoring = scoring;
        self
    }
}
