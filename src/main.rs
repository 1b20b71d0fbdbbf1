/*!
 * RPS Rendezvous - Main Entry Point
 *
 * Reads the round count (flag, environment or prompt), plays one game with
 * three player threads and prints the scores.
 */

use clap::Parser;
use std::io::{self, Write};
use std::sync::Arc;
use tracing::info;

use rps_rendezvous::{
    init_tracing, prompt_rounds, ConsoleReporter, Game, GameError, Rounds, ScoreReporter,
    TracingReporter,
};

#[derive(Parser)]
#[command(name = "rps")]
#[command(about = "Three threads play rock-paper-scissors in lock-step")]
struct Args {
    /// Number of rounds to play (1-100); prompts when omitted
    #[arg(short, long, env = "RPS_ROUNDS", value_parser = parse_rounds)]
    rounds: Option<Rounds>,

    /// Seed for deterministic player choices
    #[arg(long, env = "RPS_SEED")]
    seed: Option<u64>,

    /// Print the game outcome as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_rounds(s: &str) -> Result<Rounds, String> {
    s.parse().map_err(|e: GameError| e.to_string())
}

fn main() -> miette::Result<()> {
    let args = Args::parse();
    init_tracing(if args.verbose { "debug" } else { "info" });

    let rounds = match args.rounds {
        Some(rounds) => rounds,
        None => prompt_rounds(io::stdin().lock(), io::stdout())?,
    };

    let reporter: Arc<dyn ScoreReporter> = if args.json {
        Arc::new(TracingReporter)
    } else {
        Arc::new(ConsoleReporter::default())
    };

    let game = Game::builder(rounds)
        .seed(args.seed)
        .reporter(reporter)
        .build();
    info!(game_id = %game.id(), %rounds, "game configured");

    let outcome = game.play()?;

    if args.json {
        let rendered = serde_json::to_string_pretty(&outcome).map_err(GameError::from)?;
        writeln!(io::stdout().lock(), "{rendered}").map_err(GameError::from)?;
    }

    Ok(())
}
