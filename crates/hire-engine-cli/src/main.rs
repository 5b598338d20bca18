use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use hire_engine::{
    apply_move, count_for_date_and_filter, find_conflicts, generate_dates, parse_date, render_view,
    reorder, Snapshot, StatusFilter, ViewConfig, ViewType,
};

#[derive(Parser)]
#[command(
    name = "hire",
    version,
    about = "Rental calendar engine: timelines, hire status, conflicts and reschedules over JSON snapshots"
)]
struct Cli {
    /// Log engine decisions to stderr (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the date axis for a view
    Dates {
        /// Reference date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,
        /// day, week or month
        #[arg(long, default_value = "week")]
        view: String,
    },
    /// Render a full calendar view from a snapshot
    View {
        #[command(flatten)]
        input: SnapshotArg,
        #[arg(short, long)]
        date: String,
        #[arg(long, default_value = "week")]
        view: String,
        /// all, available or on_hire
        #[arg(long, default_value = "all")]
        status: String,
        #[arg(long)]
        category: Option<String>,
        /// Comma-separated asset ids shown first, in this order
        #[arg(long, value_delimiter = ',')]
        order: Vec<String>,
        /// Date used for filters and the today marker (defaults to --date)
        #[arg(long)]
        today: Option<String>,
    },
    /// List double-booked dates for one asset across a view
    Conflicts {
        #[command(flatten)]
        input: SnapshotArg,
        #[arg(long)]
        asset: String,
        #[arg(short, long)]
        date: String,
        #[arg(long, default_value = "week")]
        view: String,
    },
    /// Move a booking to a new asset and start date, keeping its length
    Move {
        #[command(flatten)]
        input: SnapshotArg,
        #[arg(long)]
        booking: String,
        #[arg(long)]
        asset: String,
        #[arg(long)]
        start: String,
    },
    /// Move one id within a custom asset order
    Reorder {
        #[arg(long, value_delimiter = ',', required = true)]
        order: Vec<String>,
        #[arg(long)]
        from: usize,
        #[arg(long)]
        to: usize,
    },
    /// Count assets matching a status on a date
    Count {
        #[command(flatten)]
        input: SnapshotArg,
        #[arg(short, long)]
        date: String,
        #[arg(long, default_value = "all")]
        status: String,
    },
}

#[derive(clap::Args)]
struct SnapshotArg {
    /// Snapshot JSON file (`-` for stdin)
    #[arg(short, long, default_value = "-")]
    snapshot: PathBuf,
}

impl SnapshotArg {
    fn load(&self) -> Result<Snapshot> {
        let json = read_input(&self.snapshot)?;
        let snapshot = Snapshot::from_json(&json)
            .with_context(|| format!("Failed to parse snapshot {}", self.snapshot.display()))?;
        debug!(
            assets = snapshot.assets.len(),
            bookings = snapshot.bookings.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = match cli.command {
        Commands::Dates { date, view } => {
            let dates = generate_dates(date_arg(&date)?, view_arg(&view)?);
            serde_json::to_value(dates)?
        }
        Commands::View {
            input,
            date,
            view,
            status,
            category,
            order,
            today,
        } => {
            let reference = date_arg(&date)?;
            let today = match today {
                Some(t) => date_arg(&t)?,
                None => reference,
            };
            let config = ViewConfig {
                view_type: view_arg(&view)?,
                reference_date: reference,
                status_filter: status_arg(&status)?,
                category_filter: category,
                custom_order: order,
            };
            let snapshot = input.load()?;
            serde_json::to_value(render_view(&config, &snapshot, today)?)?
        }
        Commands::Conflicts {
            input,
            asset,
            date,
            view,
        } => {
            let dates = generate_dates(date_arg(&date)?, view_arg(&view)?);
            let snapshot = input.load()?;
            snapshot.validate()?;
            serde_json::to_value(find_conflicts(&snapshot.bookings, &asset, &dates))?
        }
        Commands::Move {
            input,
            booking,
            asset,
            start,
        } => {
            let snapshot = input.load()?;
            snapshot.validate()?;
            let outcome = apply_move(&snapshot, &booking, &asset, date_arg(&start)?)?;
            if !outcome.conflicts.is_empty() {
                tracing::warn!(
                    "booking {booking} now overlaps {}",
                    outcome.conflicts.join(", ")
                );
            }
            serde_json::to_value(outcome)?
        }
        Commands::Reorder { order, from, to } => serde_json::to_value(reorder(&order, from, to)?)?,
        Commands::Count {
            input,
            date,
            status,
        } => {
            let snapshot = input.load()?;
            snapshot.validate()?;
            let n = count_for_date_and_filter(&snapshot.assets, date_arg(&date)?, status_arg(&status)?);
            Value::from(n)
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }
}

fn date_arg(s: &str) -> Result<NaiveDate> {
    Ok(parse_date(s)?)
}

fn view_arg(s: &str) -> Result<ViewType> {
    Ok(s.parse::<ViewType>()?)
}

fn status_arg(s: &str) -> Result<StatusFilter> {
    Ok(s.parse::<StatusFilter>()?)
}
