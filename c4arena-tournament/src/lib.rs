//! C4ARENA Tournament - strategy comparison through game playing
//!
//! This crate provides tournament infrastructure:
//! - Strategy configuration and parsing
//! - Single games between two configured agents
//! - Multi-game tournaments with seeded, optionally parallel execution
//! - Renderer / Reporter seams for presentation
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run_tournament (orchestration)
//! - Level 2: schedule and execute games (phases)
//! - Level 3: play_game (steps)
//! - Level 4: agents, configuration, presentation traits

mod agent;
mod config;
mod game_runner;
mod report;
mod tournament;

pub use agent::Agent;
pub use config::{ConfigError, StartPolicy, StrategyConfig, StrategyKind, TournamentConfig};
pub use game_runner::{play_game, GameOutcome, Seat};
pub use report::{BoardSnapshot, LastMove, Renderer, Reporter};
pub use tournament::{run_tournament, StrategySummary, TournamentResult};
