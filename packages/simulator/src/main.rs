//! Self-play simulator: runs whole games with random movers and writes one
//! JSON line per game.

mod output;
mod simulator;
mod types;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use engine::ai::{create_mover, Mover};
use engine::domain::Opening;
use engine::telemetry::{init_tracing, LogFormat};
use engine::{PassPolicy, RulesConfig};
use output::{GameRecord, OutputWriter};
use simulator::{GameResult, Simulator};
use tracing::{info, warn};
use types::PolicyArg;

#[derive(Parser)]
#[command(name = "tienlen-sim")]
#[command(about = "In-memory Tiến Lên self-play simulator")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Players at the table (2-4)
    #[arg(short, long, default_value = "4", value_parser = clap::value_parser!(u8).range(2..=4))]
    players: u8,

    /// Base seed; game N uses seed + N - 1. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Pass policy; defaults to TIENLEN_PASS_POLICY or reset
    #[arg(long)]
    pass_policy: Option<PolicyArg>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    log_json: bool,

    /// JSON-lines output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    init_tracing(LogFormat::from_json_flag(args.log_json), filter);

    let mut rules = RulesConfig::from_env()?;
    if let Some(policy) = args.pass_policy {
        rules.pass_policy = PassPolicy::from(policy);
    }
    let players = args.players as usize;
    let base_seed = args.seed.unwrap_or_else(rand::random);

    info!(
        games = args.games,
        players,
        base_seed,
        pass_policy = ?rules.pass_policy,
        "Starting simulation"
    );

    let movers = create_movers(players, base_seed)?;
    let simulator = Simulator::new(players, rules);
    let mut output_writer = OutputWriter::new(args.output.as_deref())?;

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;
    // The previous game's winner leads the next one.
    let mut opening = Opening::LowestCard;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let seed = base_seed.wrapping_add(u64::from(game_num - 1));

        match simulator.simulate_game(seed, opening, &movers) {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let record =
                    GameRecord::new(game_num, players, rules.pass_policy, &result, duration_ms);
                if let Err(e) = output_writer.write_game(&record) {
                    warn!("Failed to write result for game {}: {}", game_num, e);
                }
                if let Some(winner) = result.winner() {
                    opening = Opening::Player(winner);
                }
                if args.verbose {
                    info!(
                        game = game_num,
                        standings = ?result.standings,
                        tricks = result.tricks,
                        "Game completed"
                    );
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Game {} failed: {}", game_num, e);
            }
        }
    }

    if let Some(path) = output_writer.path() {
        info!("Results written to: {}", path.display());
    }
    output_writer.finish()?;

    log_summary(&results, players, errors, start.elapsed(), args.games);
    Ok(())
}

fn create_movers(
    players: usize,
    base_seed: u64,
) -> Result<Vec<Box<dyn Mover>>, Box<dyn std::error::Error>> {
    (0..players)
        .map(|seat| {
            let seed = base_seed ^ (0x9E37_79B9_7F4A_7C15u64.wrapping_mul(seat as u64 + 1));
            create_mover("random", Some(seed))
                .ok_or_else(|| "Unknown mover type: random".into())
        })
        .collect()
}

fn log_summary(
    results: &[GameResult],
    players: usize,
    errors: u32,
    elapsed: std::time::Duration,
    total: u32,
) {
    info!(
        completed = results.len(),
        total,
        errors,
        elapsed_ms = elapsed.as_millis() as u64,
        "Simulation finished"
    );
    if results.is_empty() {
        return;
    }

    let mut wins = vec![0u32; players];
    let mut last_places = vec![0u32; players];
    let mut tricks = 0u64;
    for result in results {
        if let Some(winner) = result.winner() {
            wins[winner as usize] += 1;
        }
        if let Some(&last) = result.standings.last() {
            last_places[last as usize] += 1;
        }
        tricks += u64::from(result.tricks);
    }

    let games = results.len() as f64;
    info!(avg_tricks = tricks as f64 / games, "Average tricks per game");
    for seat in 0..players {
        info!(
            seat,
            wins = wins[seat],
            win_rate = %format!("{:.1}%", wins[seat] as f64 / games * 100.0),
            last_places = last_places[seat],
            "Seat results"
        );
    }
}
