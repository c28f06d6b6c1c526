//! lineup CLI
//!
//! Raw batting CSV → roster CSV, single game simulation and batting order
//! search.

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "lineup")]
#[command(about = "Estimate the best batting order by season simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(clap::Args)]
struct RosterArgs {
    /// Processed roster CSV
    #[arg(long)]
    roster: PathBuf,

    /// Nine comma-separated player names in batting order (default: first nine rows)
    #[arg(long, value_delimiter = ',')]
    players: Option<Vec<String>>,

    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Simulation config as a JSON object
    #[arg(long)]
    config: Option<String>,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Convert a raw season batting table into a roster table
    Process {
        /// Raw batting CSV (Player, PA, H, 2B, 3B, HR, BB, HBP, SB, CS)
        #[arg(long)]
        raw: PathBuf,

        /// Output roster CSV
        #[arg(long)]
        out: PathBuf,
    },

    /// Play one game with the given batting order
    Simulate {
        #[command(flatten)]
        roster: RosterArgs,

        /// Skip the inning-by-inning grid
        #[arg(long, default_value = "false")]
        no_inning_log: bool,
    },

    /// Search random batting orders over full seasons
    Search {
        #[command(flatten)]
        roster: RosterArgs,

        /// Number of random batting orders to try
        #[arg(long, default_value_t = 1000)]
        trials: usize,

        /// Games per season (overrides the config)
        #[arg(long)]
        games: Option<u32>,

        /// Run trials on one thread
        #[arg(long, default_value = "false")]
        sequential: bool,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,lineup_core=info,lineup_cli=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Process { raw, out } => {
            println!("🔨 Processing raw batting table...");
            println!("   Input:  {}", raw.display());
            println!("   Output: {}", out.display());

            let raw_rows = lineup_cli::read_raw_table(&raw)?;
            let total = raw_rows.len();
            let rows = lineup_cli::process_rows(raw_rows);
            lineup_cli::write_roster_table(&out, &rows)?;

            println!("\n✅ Wrote {} players ({} below the PA minimum dropped)", rows.len(), total - rows.len());
        }

        Commands::Simulate { roster, no_inning_log } => {
            let rows = load_lineup(&roster)?;
            let config = parse_config(roster.config.as_deref())?;
            let request = serde_json::json!({
                "schema_version": lineup_core::SCHEMA_VERSION,
                "seed": roster.seed,
                "roster": rows,
                "enable_inning_log": !no_inning_log,
                "config": config,
            });

            let response_json =
                lineup_core::simulate_game_json(&request.to_string()).map_err(anyhow::Error::msg)?;
            let response: lineup_core::api::GameResponse =
                serde_json::from_str(&response_json).context("Failed to parse game response")?;
            print!("{}", lineup_cli::report::format_game(&response));
        }

        Commands::Search { roster, trials, games, sequential } => {
            let rows = load_lineup(&roster)?;
            let lineup_roster = lineup_core::roster_from_rows(&rows)?;

            let mut config = lineup_core::api::resolve_sim_config(parse_config(roster.config.as_deref())?)
                .map_err(anyhow::Error::msg)?;
            if let Some(games) = games {
                config.games_per_season = games;
            }

            let mode = if sequential {
                lineup_core::ExecutionMode::Sequential
            } else {
                lineup_core::ExecutionMode::Parallel
            };
            let options = lineup_core::SearchOptions::new(trials, roster.seed).with_mode(mode);

            println!("🔍 Searching {} batting orders ({} games each)...", trials, config.games_per_season);
            let outcome = run_search(&lineup_roster, &config, options)?;

            println!();
            print!("{}", lineup_cli::report::format_order("Best order", &outcome.best.into()));
            println!();
            print!("{}", lineup_cli::report::format_order("Worst order", &outcome.worst.into()));
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn load_lineup(args: &RosterArgs) -> Result<Vec<lineup_core::RosterRow>> {
    let table = lineup_cli::read_roster_table(&args.roster)?;
    lineup_cli::pick_lineup(&table, args.players.as_deref())
}

#[cfg(feature = "cli")]
fn parse_config(json: Option<&str>) -> Result<Option<lineup_core::SimConfig>> {
    json.map(|j| lineup_core::SimConfig::from_json(j).context("Invalid --config JSON"))
        .transpose()
}

#[cfg(feature = "cli")]
fn run_search(
    roster: &lineup_core::Roster,
    config: &lineup_core::SimConfig,
    options: lineup_core::SearchOptions,
) -> Result<lineup_core::SearchOutcome> {
    use indicatif::{ProgressBar, ProgressStyle};

    let bar = ProgressBar::new(options.trials as u64);
    bar.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} trials ({eta})")?);
    let sink = |fraction: f64| bar.set_position((fraction * options.trials as f64).round() as u64);

    let outcome = lineup_core::BattingOrderSearch::new(roster, config).run(
        options,
        &sink,
        &lineup_core::CancelToken::new(),
    );
    bar.finish_and_clear();
    Ok(outcome?)
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("lineup CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
