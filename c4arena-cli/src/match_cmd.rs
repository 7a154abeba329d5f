//! Match command - a tournament between two strategies
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_plan(), run_tournament(), report_results()
//! - Level 3: load_plan_file(), parse_strategy()
//! - Level 4: reporters (see `report`)

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;

use c4arena_tournament::{
    run_tournament, Reporter, StartPolicy, StrategyConfig, TournamentConfig, TournamentResult,
};

use crate::report::{JsonReporter, TextReporter};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct MatchArgs {
    /// Strategy A, e.g. alpha-beta:5, minimax:4:jitter=1, rollout:200, random
    #[arg(long, default_value = "alpha-beta:4")]
    pub a: String,

    /// Strategy B, same format as --a
    #[arg(long, default_value = "rollout:100")]
    pub b: String,

    /// Number of games to play
    #[arg(long, default_value = "100")]
    pub games: usize,

    /// Alternate the starting side instead of a coin flip per game
    #[arg(long)]
    pub alternate: bool,

    /// Play games on all cores
    #[arg(long)]
    pub parallel: bool,

    /// JSON match file with `a`, `b` and optional `tournament` sections;
    /// overrides --a, --b, --games, --alternate and --parallel
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Everything needed to run one tournament
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MatchPlan {
    pub a: StrategyConfig,
    pub b: StrategyConfig,
    #[serde(default)]
    pub tournament: TournamentConfig,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run match command
///
/// This function reads like a table of contents:
/// 1. Build both strategies and the tournament settings
/// 2. Play the tournament
/// 3. Report results
pub fn run(args: MatchArgs, seed: Option<u64>) -> Result<()> {
    let plan = build_plan(&args, seed)?;

    tracing::info!(
        "Starting match: {} vs {} ({} games)",
        plan.a.label(),
        plan.b.label(),
        plan.tournament.games
    );

    let result = run_tournament(&plan.a, &plan.b, &plan.tournament)
        .context("Invalid match configuration")?;

    report_results(&result, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Resolve strategies and settings from the match file or the arguments.
/// A `--seed` given on the command line wins over the file's seed.
pub fn build_plan(args: &MatchArgs, seed: Option<u64>) -> Result<MatchPlan> {
    let mut plan = match &args.config {
        Some(path) => load_plan_file(path)?,
        None => MatchPlan {
            a: parse_strategy(&args.a, "A")?,
            b: parse_strategy(&args.b, "B")?,
            tournament: TournamentConfig::new(args.games)
                .with_start_policy(if args.alternate {
                    StartPolicy::Alternate
                } else {
                    StartPolicy::Random
                })
                .with_parallel(args.parallel),
        },
    };

    if seed.is_some() {
        plan.tournament.seed = seed;
    }

    Ok(plan)
}

fn report_results(result: &TournamentResult, json: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        JsonReporter.report(result, &mut out)?;
    } else {
        TextReporter.report(result, &mut out)?;
    }
    out.flush()?;
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn load_plan_file(path: &Path) -> Result<MatchPlan> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read match file: {}", path.display()))?;
    let plan: MatchPlan = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse match file: {}", path.display()))?;

    plan.a.validate().context("Invalid strategy A")?;
    plan.b.validate().context("Invalid strategy B")?;
    Ok(plan)
}

pub fn parse_strategy(spec: &str, name: &str) -> Result<StrategyConfig> {
    spec.parse()
        .with_context(|| format!("Invalid strategy {}: '{}'", name, spec))
}
