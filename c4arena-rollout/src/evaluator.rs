//! Flat Monte-Carlo evaluator: sample every legal move, keep the best
//!
//! Each candidate move draws one base seed from the evaluator's RNG and
//! every sample derives its own RNG from that seed and the sample index, so
//! sequential and parallel runs produce identical statistics.

use c4arena_core::{Board, Move, Side};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::rollout::{playout, RolloutResult};
use crate::{RolloutConfig, RolloutScoring};

/// Aggregate playout statistics for one candidate move
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveStatistics {
    pub mv: Move,
    pub samples: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Aggregate under the configured scoring mode
    pub score: i64,
}

impl MoveStatistics {
    fn from_results(mv: Move, side: Side, results: &[RolloutResult], scoring: RolloutScoring) -> Self {
        let mut wins = 0;
        let mut losses = 0;
        let mut draws = 0;
        for result in results {
            match result.winner {
                Some(w) if w == side => wins += 1,
                Some(_) => losses += 1,
                None => draws += 1,
            }
        }

        let score = match scoring {
            RolloutScoring::Wins => wins as i64,
            RolloutScoring::NetOutcome => wins as i64 - losses as i64,
        };

        Self {
            mv,
            samples: results.len() as u32,
            wins,
            losses,
            draws,
            score,
        }
    }

    pub fn win_rate(&self) -> f32 {
        if self.samples == 0 {
            0.0
        } else {
            self.wins as f32 / self.samples as f32
        }
    }
}

/// Rollout player owning its configuration and random source
pub struct RolloutEvaluator {
    config: RolloutConfig,
    rng: ChaCha8Rng,
}

impl RolloutEvaluator {
    pub fn new(config: RolloutConfig) -> Self {
        Self::with_seed(config, 42)
    }

    pub fn with_seed(config: RolloutConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &RolloutConfig {
        &self.config
    }

    /// Statistics for every legal move in ascending column order
    pub fn evaluate_moves(&mut self, board: &Board, side: Side) -> Vec<MoveStatistics> {
        let samples = self.config.samples_per_move;
        let scoring = self.config.scoring;

        board
            .legal_moves()
            .into_iter()
            .filter_map(|mv| {
                let base_seed: u64 = self.rng.gen();
                let child = board.drop(mv, side).ok()?;
                let results = run_samples(&child, side.opponent(), samples, base_seed);
                Some(MoveStatistics::from_results(mv, side, &results, scoring))
            })
            .collect()
    }

    /// Column with the highest aggregate score; ties keep the lowest column
    pub fn best_move(&mut self, board: &Board, side: Side) -> Option<Move> {
        let stats = self.evaluate_moves(board, side);
        let best = select_best(&stats);

        if let Some(best) = best {
            tracing::debug!(
                side = ?side,
                best_move = best.mv,
                score = best.score,
                win_rate = best.win_rate(),
                samples = self.config.samples_per_move,
                "rollout evaluation complete"
            );
        }

        best.map(|s| s.mv)
    }
}

/// First-seen wins; only a strictly greater score replaces the incumbent
fn select_best(stats: &[MoveStatistics]) -> Option<&MoveStatistics> {
    let mut best: Option<&MoveStatistics> = None;
    for s in stats {
        if best.map_or(true, |b| s.score > b.score) {
            best = Some(s);
        }
    }
    best
}

fn sample_rng(base_seed: u64, index: u32) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(base_seed.wrapping_add(index as u64))
}

#[cfg(not(feature = "parallel"))]
fn run_samples(board: &Board, to_move: Side, samples: u32, base_seed: u64) -> Vec<RolloutResult> {
    (0..samples)
        .map(|i| playout(board, to_move, &mut sample_rng(base_seed, i)))
        .collect()
}

#[cfg(feature = "parallel")]
fn run_samples(board: &Board, to_move: Side, samples: u32, base_seed: u64) -> Vec<RolloutResult> {
    use rayon::prelude::*;

    (0..samples)
        .into_par_iter()
        .map(|i| playout(board, to_move, &mut sample_rng(base_seed, i)))
        .collect()
}
