//! LifePath command-line front end
//!
//! Runs the engine against a birth date, an amount or a saved profile
//! snapshot and prints the result.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use lifepath::{
    calculate_age, calculate_progress, format_currency, recommendations_for_birth_date,
    today_local, Dashboard, EngineConfig, ProfileSnapshot,
};

#[derive(Parser, Debug)]
#[command(name = "lifepath")]
#[command(about = "Age-tailored personal development recommendations", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Evaluate as if today were this date (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Age in completed years
    Age { birth_date: String },
    /// Life stage, focus areas and suggestions for a birth date
    Recommend { birth_date: String },
    /// Format an amount in Brazilian Real
    Currency {
        #[arg(allow_hyphen_values = true)]
        value: f64,
    },
    /// Percentage of target reached, capped at 100
    Progress {
        #[arg(allow_hyphen_values = true)]
        current: f64,
        #[arg(allow_hyphen_values = true)]
        target: f64,
    },
    /// Dashboard summary for a saved profile snapshot
    Dashboard { snapshot: PathBuf },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = EngineConfig::load(args.config.clone()).context("loading configuration")?;

    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::from_str(&config.log_level).unwrap_or(Level::INFO)
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let today = args.today.or(config.today).unwrap_or_else(today_local);
    info!(%today, "LifePath engine starting");

    match args.command {
        Command::Age { birth_date } => {
            let age = calculate_age(&birth_date, today)?;
            println!("{}", age);
        }
        Command::Recommend { birth_date } => {
            let rec = recommendations_for_birth_date(&birth_date, today)?;
            println!("stage: {}", rec.stage.as_str());
            let tags: Vec<&str> = rec.focus.iter().map(|f| f.as_str()).collect();
            println!("focus: {}", tags.join(", "));
            for suggestion in &rec.suggestions {
                println!("  - {}", suggestion);
            }
        }
        Command::Currency { value } => {
            println!("{}", format_currency(value)?);
        }
        Command::Progress { current, target } => {
            println!("{}%", calculate_progress(current, target)?);
        }
        Command::Dashboard { snapshot } => {
            let json = std::fs::read_to_string(&snapshot)
                .with_context(|| format!("reading snapshot {}", snapshot.display()))?;
            let profile = ProfileSnapshot::from_json(&json)?;

            let mut rng = match config.suggestion_seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let dashboard = Dashboard::build(&profile, today, &mut rng, config.daily_suggestions)?;
            println!("{}", serde_json::to_string_pretty(&dashboard)?);
        }
    }

    Ok(())
}
