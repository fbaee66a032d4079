use std::collections::HashMap;
use std::path::{Path, PathBuf};

use clap::Parser;
use codex::GameConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use referee::{play_match, Recorder};
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// How many players sit at the table, from 2 to 4
    #[arg(short, long, default_value_t = 2)]
    players: usize,

    /// How many games to play
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a JSON file with the game config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Record the snapshots of each game as JSON files into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Default)]
struct PlayerTally {
    wins: usize,
    total_score: u64,
}

fn load_config(path: &Path) -> anyhow::Result<GameConfig> {
    let file = std::fs::File::open(path)?;
    let config = serde_json::from_reader(std::io::BufReader::new(file))?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let base_config = match &args.config {
        Some(path) => load_config(path)?,
        None => GameConfig::default(),
    };

    // Get a random seed
    let seed = args.seed.or(base_config.seed).unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut recorder = if let Some(dir_path) = args.record_games_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    let nicknames: Vec<String> = (1..=args.players).map(|i| format!("player_{}", i)).collect();
    let mut tallies: HashMap<String, PlayerTally> = HashMap::new();
    let mut shared_wins = 0;

    for game_idx in 0..args.num_games {
        let config = GameConfig {
            seed: Some(rng.gen()),
            ..base_config.clone()
        };
        let result = play_match(&mut rng, &nicknames, config, &mut recorder)?;
        debug!(game_idx, winners = ?result.winners, turns = result.turns);

        if result.winners.len() > 1 {
            shared_wins += 1;
        }
        for winner in &result.winners {
            tallies.entry(winner.clone()).or_default().wins += 1;
        }
        for (nickname, score) in result.scores {
            tallies.entry(nickname).or_default().total_score += u64::from(score);
        }
    }

    eprintln!("End result after {} games:", args.num_games);
    for nickname in &nicknames {
        let tally = tallies.remove(nickname).unwrap_or_default();
        let average = if args.num_games > 0 {
            tally.total_score as f64 / args.num_games as f64
        } else {
            0.0
        };
        eprintln!(
            "- {} wins by {}, average score {:.1}",
            tally.wins, nickname, average
        );
    }
    eprintln!("- {} games with a shared win", shared_wins);

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
