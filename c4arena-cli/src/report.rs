//! Text and JSON presentation of games and tournament results
//!
//! Level 4 - formatting utilities

use std::io::{self, Write};

use serde::Serialize;

use c4arena_tournament::{BoardSnapshot, Renderer, Reporter, StrategySummary, TournamentResult};

// ============================================================================
// RENDERER
// ============================================================================

/// Prints the board after every ply
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_snapshot(&mut self, snapshot: &BoardSnapshot<'_>) -> io::Result<()> {
        match snapshot.last_move {
            Some(last) => writeln!(
                self.out,
                "Ply {}: {:?} plays column {}",
                snapshot.ply, last.side, last.column
            )?,
            None => writeln!(self.out, "Start")?,
        }
        writeln!(self.out, "{}", snapshot.board)
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, snapshot: &BoardSnapshot<'_>) {
        if let Err(err) = self.write_snapshot(snapshot) {
            tracing::warn!(%err, "failed to render board");
        }
    }
}

// ============================================================================
// REPORTERS
// ============================================================================

/// Human-readable summary table
pub struct TextReporter;

impl TextReporter {
    fn write_strategy(
        out: &mut dyn Write,
        name: &str,
        summary: &StrategySummary,
        games: u32,
    ) -> io::Result<()> {
        writeln!(out, "{} [{}]", name, summary.label)?;
        writeln!(
            out,
            "  Wins:            {} ({:.1}%)",
            summary.wins,
            summary.win_rate(games) * 100.0
        )?;
        writeln!(
            out,
            "  Wins as starter: {} of {} starts",
            summary.wins_as_starter, summary.starts
        )?;
        writeln!(
            out,
            "  Decision time:   {:.3}s total, {:.2}ms avg over {} moves",
            summary.decision_time.as_secs_f64(),
            summary.avg_decision_time().as_secs_f64() * 1000.0,
            summary.decisions
        )
    }
}

impl Reporter for TextReporter {
    fn report(&self, result: &TournamentResult, out: &mut dyn Write) -> io::Result<()> {
        let games = result.games_played;

        writeln!(out, "\n=== Tournament Results ===")?;
        writeln!(out, "Total games: {}", games)?;
        Self::write_strategy(out, "A", &result.a, games)?;
        Self::write_strategy(out, "B", &result.b, games)?;
        writeln!(
            out,
            "Draws:       {} ({:.1}%)",
            result.draws,
            result.draw_rate() * 100.0
        )?;
        writeln!(out, "Avg length:  {:.1} plies", result.avg_plies())
    }
}

/// Pretty-printed JSON document
pub struct JsonReporter;

#[derive(Serialize)]
struct JsonStrategy<'a> {
    label: &'a str,
    wins: u32,
    win_rate: f32,
    wins_as_starter: u32,
    starts: u32,
    decisions: u32,
    decision_time_secs: f64,
    avg_decision_ms: f64,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    games_played: u32,
    draws: u32,
    total_plies: u64,
    avg_plies: f32,
    a: JsonStrategy<'a>,
    b: JsonStrategy<'a>,
}

impl<'a> JsonStrategy<'a> {
    fn new(summary: &'a StrategySummary, games: u32) -> Self {
        Self {
            label: &summary.label,
            wins: summary.wins,
            win_rate: summary.win_rate(games),
            wins_as_starter: summary.wins_as_starter,
            starts: summary.starts,
            decisions: summary.decisions,
            decision_time_secs: summary.decision_time.as_secs_f64(),
            avg_decision_ms: summary.avg_decision_time().as_secs_f64() * 1000.0,
        }
    }
}

impl Reporter for JsonReporter {
    fn report(&self, result: &TournamentResult, out: &mut dyn Write) -> io::Result<()> {
        let output = JsonOutput {
            games_played: result.games_played,
            draws: result.draws,
            total_plies: result.total_plies,
            avg_plies: result.avg_plies(),
            a: JsonStrategy::new(&result.a, result.games_played),
            b: JsonStrategy::new(&result.b, result.games_played),
        };
        serde_json::to_writer_pretty(&mut *out, &output)?;
        writeln!(out)
    }
}
