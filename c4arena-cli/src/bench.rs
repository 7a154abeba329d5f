//! Bench command - time single decisions of several strategies
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: parse_position(), benchmark_strategy(), report_results()
//! - Level 4: formatting utilities

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Args;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use c4arena_core::{Board, Move, Side};
use c4arena_tournament::{Agent, StrategyConfig};

use crate::match_cmd::parse_strategy;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct BenchArgs {
    /// Strategies to time (repeatable)
    #[arg(
        long = "strategy",
        default_values_t = [
            "minimax:4".to_string(),
            "alpha-beta:4".to_string(),
            "alpha-beta:6".to_string(),
            "rollout:100".to_string(),
        ]
    )]
    pub strategies: Vec<String>,

    /// Comma-separated columns played from the empty board, Red first
    #[arg(long, default_value = "")]
    pub moves: String,

    /// Decisions timed per strategy
    #[arg(long, default_value = "5")]
    pub iterations: u32,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Timing for one strategy
#[derive(Clone, Debug)]
struct BenchmarkResult {
    label: String,
    iterations: u32,
    total_time: Duration,
    chosen: Option<Move>,
}

impl BenchmarkResult {
    fn avg_time(&self) -> Duration {
        if self.iterations == 0 {
            Duration::ZERO
        } else {
            self.total_time / self.iterations
        }
    }
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run bench command
pub fn run(args: BenchArgs, seed: Option<u64>) -> Result<()> {
    let board = parse_position(&args.moves)?;
    let side = side_to_move(&board);
    let seed = seed.unwrap_or_else(|| ChaCha8Rng::from_entropy().gen());

    tracing::info!(
        "Benchmarking {} strategies, {} iterations, {:?} to move",
        args.strategies.len(),
        args.iterations,
        side
    );

    let mut results = Vec::with_capacity(args.strategies.len());
    for (i, spec) in args.strategies.iter().enumerate() {
        let config = parse_strategy(spec, &format!("#{}", i + 1))?;
        tracing::info!("Benchmarking {}...", config.label());
        results.push(benchmark_strategy(&config, &board, side, args.iterations, seed));
    }

    if args.json {
        print_json_results(&results)?;
    } else {
        print_text_results(&board, &results);
    }
    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn parse_position(moves: &str) -> Result<Board> {
    let columns = moves
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<Move>()
                .with_context(|| format!("Invalid column '{}'", s))
        })
        .collect::<Result<Vec<_>>>()?;

    Board::replay(&columns, Side::Red).with_context(|| format!("Invalid position '{}'", moves))
}

fn benchmark_strategy(
    config: &StrategyConfig,
    board: &Board,
    side: Side,
    iterations: u32,
    seed: u64,
) -> BenchmarkResult {
    let mut agent = Agent::from_config(config, seed);
    let mut chosen = None;

    let start = Instant::now();
    for _ in 0..iterations {
        chosen = agent.choose_move(board, side);
    }

    BenchmarkResult {
        label: config.label(),
        iterations,
        total_time: start.elapsed(),
        chosen,
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn side_to_move(board: &Board) -> Side {
    if board.piece_count() % 2 == 0 {
        Side::Red
    } else {
        Side::Yellow
    }
}

fn print_text_results(board: &Board, results: &[BenchmarkResult]) {
    println!("\n=== Decision Benchmark ===");
    println!("{}", board);
    println!("| Strategy | Avg Decision | Move |");
    println!("|----------|--------------|------|");
    for r in results {
        let mv = r.chosen.map_or("-".to_string(), |m| m.to_string());
        println!(
            "| {} | {:.2}ms | {} |",
            r.label,
            r.avg_time().as_secs_f64() * 1000.0,
            mv
        );
    }
}

fn print_json_results(results: &[BenchmarkResult]) -> Result<()> {
    #[derive(serde::Serialize)]
    struct JsonResult<'a> {
        strategy: &'a str,
        iterations: u32,
        total_secs: f64,
        avg_decision_ms: f64,
        chosen: Option<Move>,
    }

    let output: Vec<JsonResult> = results
        .iter()
        .map(|r| JsonResult {
            strategy: &r.label,
            iterations: r.iterations,
            total_secs: r.total_time.as_secs_f64(),
            avg_decision_ms: r.avg_time().as_secs_f64() * 1000.0,
            chosen: r.chosen,
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("").unwrap(), Board::new());
        let board = parse_position("3, 3,4").unwrap();
        assert_eq!(board.piece_count(), 3);
        assert_eq!(board.get(1, 3), Some(Side::Yellow));
        assert_eq!(side_to_move(&board), Side::Yellow);

        assert!(parse_position("3,x").is_err());
        assert!(parse_position("9").is_err());
        assert!(parse_position("0,0,0,0,0,0,0").is_err());
    }

    #[test]
    fn test_benchmark_strategy() {
        let board = parse_position("3,0,3,5,3,6").unwrap();
        let result = benchmark_strategy(&StrategyConfig::alpha_beta(3), &board, Side::Red, 2, 1);
        assert_eq!(result.iterations, 2);
        assert_eq!(result.chosen, Some(3));
        assert!(result.avg_time() <= result.total_time);
    }
}
