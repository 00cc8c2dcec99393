//! Hexbot - Replay Driver
//!
//! Feeds recorded rounds (JSON) through the decision engine and prints one
//! JSON report per round on stdout.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use hexbot::replay::{parse_rounds, replay};
use hexbot::{EngineConfig, Result, RoundController, Sampler};

/// Replay recorded rounds through the hexbot decision engine
#[derive(Parser, Debug)]
#[command(name = "hexbot")]
#[command(about = "Decide bot actions for recorded hex-grid rounds")]
struct Args {
    /// Rounds to replay (JSON array or one round per line). Reads stdin when omitted.
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,

    /// Engine config (TOML)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Print the configured bot names and exit
    #[arg(long)]
    names: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hexbot=info")),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    if args.names {
        for name in &config.bot_names {
            println!("{}", name);
        }
        return Ok(());
    }

    let sampler = match args.seed {
        Some(seed) => Sampler::with_seed(seed, config.map_radius),
        None => Sampler::from_entropy(config.map_radius),
    };

    let input = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let rounds = parse_rounds(&input)?;
    tracing::info!("Replaying {} rounds", rounds.len());

    let mut controller = RoundController::new(config, sampler)?;
    let reports = replay(&mut controller, rounds);

    let mut late = 0;
    for report in &reports {
        late += report.late_bots.len();
        println!("{}", serde_json::to_string(report)?);
    }

    tracing::info!(
        "Decided {} rounds ({} late-bot reports)",
        reports.len(),
        late
    );

    Ok(())
}
