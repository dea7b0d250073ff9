//! Headless simulator: heuristic vs heuristic La Chouine matches.

use clap::Parser;
use tracing::info;

use la_chouine::core::{generate_seed, Side};
use la_chouine::rules::ChouineRules;
use la_chouine::sim::{MatchSummary, SelfPlay, SelfPlayConfig};

#[derive(Parser)]
#[command(name = "chouine-sim")]
#[command(about = "Run heuristic-vs-heuristic La Chouine matches")]
struct Args {
    /// Number of games to play
    #[arg(short, long, default_value = "100")]
    games: usize,

    /// Match seed; a random one is drawn when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // RUST_LOG wins when set; otherwise warnings only unless --verbose.
    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let match_seed = args.seed.unwrap_or_else(|| u64::from(generate_seed()));
    info!(games = args.games, match_seed, "starting match");

    let config = SelfPlayConfig::new()
        .with_games(args.games)
        .with_match_seed(match_seed);
    let (_, summary) = SelfPlay::new(ChouineRules::default(), config).run()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(summary: &MatchSummary) {
    println!("match seed: {}", summary.match_seed);
    println!("games:      {}", summary.games);
    for side in Side::ALL {
        println!(
            "{:<6} wins: {:>5}   avg score: {:>6.1}",
            side.name(),
            summary.wins[side],
            summary.average_scores[side]
        );
    }
    println!("ties:       {}", summary.ties);
    println!("chouines:   {}", summary.chouines);
}
