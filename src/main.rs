use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use calorie_stats::analysis::{increasing_runs, max_adjacent_product};
use calorie_stats::input::{CalorieSequence, require_multiple_days, validate};
use calorie_stats::report::{IncreasingRunsReport, MaxProductReport};

#[derive(Parser)]
#[command(name = "calorie-stats")]
#[command(version, about = "Analyze daily calorie intake")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Maximum calorie intake of two contiguous days, as a product
    MaxProduct(InputArgs),

    /// Days on which calorie intake increased from the day before
    Increasing(InputArgs),
}

#[derive(clap::Args)]
struct InputArgs {
    /// Number of days
    #[arg(short, long, value_name = "NUM")]
    days: String,

    /// Comma separated calories, one per day (e.g. "2000, 2500, 1800")
    #[arg(short, long, value_name = "LIST")]
    calories: String,
}

impl InputArgs {
    fn sequence(&self) -> Result<CalorieSequence> {
        let calories = validate(&self.days, &self.calories).context("Validation Error")?;
        require_multiple_days(&calories).context("Number of days should be more than 1")?;
        Ok(calories)
    }
}

fn init_logging(verbose: bool) {
    // RUST_LOG wins over --verbose. Logs go to stderr, the report to stdout.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// CLI usage: cargo run -- max-product --days 3 --calories "2000, 2500, 1800"
fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match &cli.command {
        Commands::MaxProduct(args) => {
            let calories = args.sequence()?;
            let max_product = max_adjacent_product(&calories)?;
            debug!(max_product, "computed maximum adjacent product");

            println!("{}", MaxProductReport(max_product));
        }
        Commands::Increasing(args) => {
            let calories = args.sequence()?;
            let runs = increasing_runs(&calories);
            debug!(increases = runs.day_count - 1, "computed increasing runs");

            println!("{}", IncreasingRunsReport(&runs));
        }
    }

    Ok(())
}
