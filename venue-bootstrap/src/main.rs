use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;

use venue_bootstrap::RunOptions;
use venue_infrastructure::CONFIG_ENV;

#[derive(Parser, Debug)]
#[command(name = "venue-sync")]
#[command(about = "Normalize scraped venue bookings into canonical events", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,

    /// Booking date to process (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    date: Option<String>,

    /// Skip recording task derivation
    #[arg(long)]
    no_tasks: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if let Some(config) = args.config {
        std::env::set_var(CONFIG_ENV, config);
    }

    let date = match args.date {
        Some(value) => NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .with_context(|| format!("invalid --date '{}'", value))?,
        None => Local::now().date_naive(),
    };

    venue_bootstrap::run(RunOptions {
        date,
        skip_tasks: args.no_tasks,
    })
    .await
}
