//! Tournament - a series of games between two fixed strategies
//!
//! Level 1/2 - Orchestration and phases

use std::time::Duration;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::config::{ConfigError, StartPolicy, StrategyConfig, TournamentConfig};
use crate::game_runner::{play_game, GameOutcome, Seat};

/// Per-strategy counters over a tournament
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StrategySummary {
    pub label: String,
    pub wins: u32,
    /// Wins in games this strategy started
    pub wins_as_starter: u32,
    /// Games this strategy started
    pub starts: u32,
    /// Moves this strategy was asked for
    pub decisions: u32,
    /// Total wall-clock time spent choosing moves
    pub decision_time: Duration,
}

impl StrategySummary {
    fn new(label: String) -> Self {
        Self {
            label,
            ..Default::default()
        }
    }

    pub fn win_rate(&self, games_played: u32) -> f32 {
        if games_played == 0 {
            0.0
        } else {
            self.wins as f32 / games_played as f32
        }
    }

    pub fn avg_decision_time(&self) -> Duration {
        if self.decisions == 0 {
            Duration::ZERO
        } else {
            self.decision_time / self.decisions
        }
    }
}

/// Result of a tournament
#[derive(Clone, Debug)]
pub struct TournamentResult {
    pub a: StrategySummary,
    pub b: StrategySummary,
    pub draws: u32,
    pub games_played: u32,
    pub total_plies: u64,
    /// Individual game outcomes in game order
    pub game_outcomes: Vec<GameOutcome>,
}

impl TournamentResult {
    pub fn empty(a_label: String, b_label: String) -> Self {
        Self {
            a: StrategySummary::new(a_label),
            b: StrategySummary::new(b_label),
            draws: 0,
            games_played: 0,
            total_plies: 0,
            game_outcomes: Vec::new(),
        }
    }

    pub fn summary(&self, seat: Seat) -> &StrategySummary {
        match seat {
            Seat::A => &self.a,
            Seat::B => &self.b,
        }
    }

    fn summary_mut(&mut self, seat: Seat) -> &mut StrategySummary {
        match seat {
            Seat::A => &mut self.a,
            Seat::B => &mut self.b,
        }
    }

    pub fn draw_rate(&self) -> f32 {
        if self.games_played == 0 {
            0.0
        } else {
            self.draws as f32 / self.games_played as f32
        }
    }

    pub fn avg_plies(&self) -> f32 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_plies as f32 / self.games_played as f32
        }
    }

    /// Fold one finished game into the counters
    pub fn record(&mut self, outcome: GameOutcome) {
        self.games_played += 1;
        self.total_plies += outcome.plies as u64;

        for seat in [Seat::A, Seat::B] {
            let summary = self.summary_mut(seat);
            summary.decisions += outcome.decisions(seat);
            summary.decision_time += outcome.decision_time(seat);
        }
        self.summary_mut(outcome.starter).starts += 1;

        match outcome.winner {
            Some(seat) => {
                let summary = self.summary_mut(seat);
                summary.wins += 1;
                if seat == outcome.starter {
                    summary.wins_as_starter += 1;
                }
            }
            None => self.draws += 1,
        }

        self.game_outcomes.push(outcome);
    }
}

/// Play `config.games` games between strategies `a` and `b` (Level 1)
///
/// Starting sides and per-game seeds are drawn from one tournament RNG
/// before any game runs, so parallel and sequential runs agree.
pub fn run_tournament(
    a: &StrategyConfig,
    b: &StrategyConfig,
    config: &TournamentConfig,
) -> Result<TournamentResult, ConfigError> {
    a.validate()?;
    b.validate()?;

    let base_seed = config
        .seed
        .unwrap_or_else(|| ChaCha8Rng::from_entropy().gen());

    tracing::info!(
        a = %a.label(),
        b = %b.label(),
        games = config.games,
        start_policy = ?config.start_policy,
        seed = base_seed,
        parallel = config.parallel,
        "starting tournament"
    );

    let schedule = prepare_schedule(config.games, config.start_policy, base_seed);
    let outcomes = if config.parallel {
        execute_games_parallel(a, b, &schedule)
    } else {
        execute_games(a, b, &schedule)
    };

    let mut result = TournamentResult::empty(a.label(), b.label());
    for outcome in outcomes {
        result.record(outcome);
    }

    tracing::info!(
        a_wins = result.a.wins,
        b_wins = result.b.wins,
        draws = result.draws,
        avg_plies = result.avg_plies(),
        "tournament complete"
    );

    Ok(result)
}

// ============================================================================
// Level 3 - Steps
// ============================================================================

/// Starting seat and seed for one game
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ScheduledGame {
    index: usize,
    starter: Seat,
    seed: u64,
}

/// Separates the starting-side stream from every per-game seed stream
const SCHEDULE_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

fn schedule_rng(base_seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(base_seed ^ SCHEDULE_SALT)
}

fn prepare_schedule(games: usize, policy: StartPolicy, base_seed: u64) -> Vec<ScheduledGame> {
    let mut rng = schedule_rng(base_seed);

    (0..games)
        .map(|index| {
            let starter = match policy {
                StartPolicy::Random => {
                    if rng.gen_bool(0.5) {
                        Seat::A
                    } else {
                        Seat::B
                    }
                }
                StartPolicy::Alternate => {
                    if index % 2 == 0 {
                        Seat::A
                    } else {
                        Seat::B
                    }
                }
            };
            ScheduledGame {
                index,
                starter,
                seed: base_seed.wrapping_add(index as u64),
            }
        })
        .collect()
}

fn play_scheduled(a: &StrategyConfig, b: &StrategyConfig, game: &ScheduledGame) -> GameOutcome {
    let outcome = play_game(a, b, game.starter, game.seed, None);
    tracing::info!(
        game = game.index + 1,
        starter = ?game.starter,
        winner = ?outcome.winner,
        plies = outcome.plies,
        "game finished"
    );
    outcome
}

fn execute_games(a: &StrategyConfig, b: &StrategyConfig, schedule: &[ScheduledGame]) -> Vec<GameOutcome> {
    schedule.iter().map(|game| play_scheduled(a, b, game)).collect()
}

fn execute_games_parallel(
    a: &StrategyConfig,
    b: &StrategyConfig,
    schedule: &[ScheduledGame],
) -> Vec<GameOutcome> {
    schedule.par_iter().map(|game| play_scheduled(a, b, game)).collect()
}
