//! Headless Quoridor self-play
//!
//! Usage: quoridor-selfplay [--config match.json] [--games N] [--p0 easy] [--p1 hard] [-v]

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;

use quoridor_engine::types::Difficulty;
use xfquoridor::core::{init_tracing, load_config, read_config, SeatConfig};
use xfquoridor::game::{GameSession, MatchOutcome};

/// Play AI-vs-AI Quoridor games and print a summary
#[derive(Parser, Debug)]
#[command(name = "quoridor-selfplay")]
#[command(about = "Run AI-vs-AI Quoridor games", long_about = None)]
struct Args {
    /// Match config JSON; missing or invalid files fall back to defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fail instead of falling back when the config file cannot be used
    #[arg(long, requires = "config")]
    strict: bool,

    /// Number of games to play
    #[arg(long)]
    games: Option<usize>,

    /// Difficulty for player 0
    #[arg(long)]
    p0: Option<Difficulty>,

    /// Difficulty for player 1
    #[arg(long)]
    p1: Option<Difficulty>,

    /// Base random seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Turn cap per game before it is called a draw
    #[arg(long)]
    max_turns: Option<usize>,

    /// Print the final board of every game
    #[arg(long)]
    show_board: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = match (&args.config, args.strict) {
        (Some(path), true) => read_config(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        (Some(path), false) => load_config(path),
        (None, _) => Default::default(),
    };

    if let Some(games) = args.games {
        config.games = games;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(max_turns) = args.max_turns {
        config.max_turns = max_turns;
    }
    for (player, difficulty) in [args.p0, args.p1].into_iter().enumerate() {
        if let Some(difficulty) = difficulty {
            config.seats[player] = SeatConfig::Ai { difficulty };
        }
    }
    config.validate().context("invalid match settings")?;

    if !config.seats.iter().all(SeatConfig::is_ai) {
        bail!("self-play needs both seats AI-controlled");
    }

    info!(
        "[SELFPLAY] Playing {} game(s): {:?} vs {:?}",
        config.games, config.seats[0], config.seats[1]
    );

    let mut outcomes = Vec::with_capacity(config.games);
    for game_index in 0..config.games {
        let mut session = GameSession::from_config(&config, game_index);
        let outcome = session
            .run_to_completion()
            .with_context(|| format!("game {} aborted", game_index + 1))?;

        println!(
            "game {:>3}: {} in {} turns (walls {}/{}, stuck {}, fallbacks {})",
            game_index + 1,
            describe_winner(&outcome),
            outcome.turns,
            outcome.walls_placed[0],
            outcome.walls_placed[1],
            outcome.stuck_recoveries,
            outcome.fallbacks
        );
        if args.show_board {
            println!("{}\n", session.state());
        }
        outcomes.push(outcome);
    }

    print_summary(&outcomes);
    Ok(())
}

fn describe_winner(outcome: &MatchOutcome) -> String {
    match outcome.winner {
        Some(player) => format!("player {} wins", player),
        None => "draw".to_string(),
    }
}

fn print_summary(outcomes: &[MatchOutcome]) {
    let wins = [0, 1].map(|player| {
        outcomes
            .iter()
            .filter(|o| o.winner == Some(player))
            .count()
    });
    let draws = outcomes.iter().filter(|o| o.is_draw()).count();
    let turns: usize = outcomes.iter().map(|o| o.turns).sum();
    let average = if outcomes.is_empty() {
        0.0
    } else {
        turns as f64 / outcomes.len() as f64
    };

    println!(
        "\nP0 wins: {} | P1 wins: {} | draws: {} | avg turns: {:.1}",
        wins[0], wins[1], draws, average
    );
}
