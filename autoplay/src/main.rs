use std::path::PathBuf;

use autoplay::{play_games, ConfigOverrides, RunConfig};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Plays batches of sliding tile games without a user interface.
#[derive(Parser)]
struct Args {
    /// Path to a JSON file with the run configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: ConfigOverrides,

    /// Print the report as JSON to stdout instead of a table to stderr
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Print the final board of every game
    #[arg(long, default_value_t = false)]
    show_boards: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let config = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    }
    .merge(args.overrides);
    config.validate()?;

    // Get a random seed
    let seed = config.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let report = play_games(&mut rng, &config, seed, |game_idx, summary| {
        if args.show_boards {
            eprintln!(
                "Game {}: {} moves, {}\n{}",
                game_idx + 1,
                summary.moves,
                summary.end_reason,
                summary.final_board
            );
        }
    });

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        eprintln!("{}", report);
    }

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
