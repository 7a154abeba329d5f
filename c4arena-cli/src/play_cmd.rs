//! Play command - watch a single game between two strategies

use std::io;

use anyhow::Result;
use clap::Args;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use c4arena_tournament::{play_game, GameOutcome, Renderer, Seat};

use crate::match_cmd::parse_strategy;
use crate::report::TextRenderer;

#[derive(Args)]
pub struct PlayArgs {
    /// Strategy A (plays Red)
    #[arg(long, default_value = "alpha-beta:5")]
    pub a: String,

    /// Strategy B (plays Yellow)
    #[arg(long, default_value = "random")]
    pub b: String,

    /// Let strategy B move first
    #[arg(long)]
    pub b_starts: bool,
}

/// Run play command
pub fn run(args: PlayArgs, seed: Option<u64>) -> Result<()> {
    let a = parse_strategy(&args.a, "A")?;
    let b = parse_strategy(&args.b, "B")?;
    let starter = if args.b_starts { Seat::B } else { Seat::A };
    let seed = seed.unwrap_or_else(|| ChaCha8Rng::from_entropy().gen());

    tracing::info!("Playing {} (Red) vs {} (Yellow), seed={}", a.label(), b.label(), seed);

    let mut renderer = TextRenderer::new(io::stdout());
    let outcome = play_game(&a, &b, starter, seed, Some(&mut renderer as &mut dyn Renderer));

    println!("{}", describe_outcome(&outcome, &a.label(), &b.label()));
    Ok(())
}

fn describe_outcome(outcome: &GameOutcome, a_label: &str, b_label: &str) -> String {
    match outcome.winner {
        Some(Seat::A) => format!("{} (Red) wins after {} plies", a_label, outcome.plies),
        Some(Seat::B) => format!("{} (Yellow) wins after {} plies", b_label, outcome.plies),
        None => format!("Draw after {} plies", outcome.plies),
    }
}
