//! C4ARENA CLI - Command-line interface
//!
//! Commands:
//! - match: Run a tournament between two strategies
//! - play: Watch a single game
//! - bench: Time single decisions of several strategies

mod bench;
mod match_cmd;
mod play_cmd;
mod report;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "c4arena")]
#[command(about = "Connect Four strategy arena")]
struct Cli {
    /// Random seed for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a tournament between two strategies
    Match(match_cmd::MatchArgs),
    /// Play and print a single game
    Play(play_cmd::PlayArgs),
    /// Time single decisions on a fixed position
    Bench(bench::BenchArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Match(args) => match_cmd::run(args, cli.seed),
        Commands::Play(args) => play_cmd::run(args, cli.seed),
        Commands::Bench(args) => bench::run(args, cli.seed),
    }
}
