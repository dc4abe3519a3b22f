//! Periodic CLI
//!
//! Validates a JSON snapshot of analytic periods and entries the same way the
//! record-management layer does at save time.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use periodic_core::period::attribute_date;
use periodic_shared::types::OrganizationId;
use periodic_core::{
    Clock, Entry, EntryValidator, FixedClock, Period, PeriodValidator, SystemClock,
    ValidationHook,
};
use periodic_shared::{AppConfig, AppError};

#[derive(Parser)]
#[command(name = "periodic")]
#[command(version)]
#[command(about = "Validate analytic periods and entries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate every period and entry of a snapshot
    Check {
        /// JSON snapshot with `periods` and `entries`
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Date used as today (YYYY-MM-DD), defaults to the configured timezone's today
        #[arg(long, value_name = "DATE")]
        today: Option<NaiveDate>,
    },
    /// Show the period a date of one organization is attributed to
    Resolve {
        /// JSON snapshot with `periods`
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Organization whose periods are candidates
        #[arg(long, value_name = "UUID")]
        organization: OrganizationId,
        /// Date to resolve (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        date: NaiveDate,
    },
}

/// Periods and entries as exported by the record-management layer.
#[derive(Debug, Deserialize)]
struct Snapshot {
    #[serde(default)]
    periods: Vec<Period>,
    #[serde(default)]
    entries: Vec<Entry>,
}

impl Snapshot {
    fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
        let snapshot: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse snapshot {}", path.display()))?;
        debug!(
            periods = snapshot.periods.len(),
            entries = snapshot.entries.len(),
            "Loaded snapshot"
        );
        Ok(snapshot)
    }
}

/// A record refused by one of the validation hooks.
struct Rejection {
    record: String,
    error: AppError,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_code_for(&err)
        }
    }
}

/// Exit status 1 for rejected records, 2 for anything that kept the check from running.
fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<AppError>() {
        Some(app) if app.is_rejection() => ExitCode::from(1),
        _ => ExitCode::from(2),
    }
}

fn run() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { input, today } => {
            let today = match today {
                Some(date) => date,
                None => {
                    let clock = SystemClock::from_config(&config.validation)?;
                    debug!(timezone = %clock.timezone(), "Using system clock");
                    clock.today()
                }
            };
            let snapshot = Snapshot::load(&input)?;
            run_check(&snapshot, today)
        }
        Commands::Resolve {
            input,
            organization,
            date,
        } => {
            let snapshot = Snapshot::load(&input)?;
            println!("{}", resolve_line(&snapshot, organization, date)?);
            Ok(())
        }
    }
}

fn run_check(snapshot: &Snapshot, today: NaiveDate) -> Result<()> {
    info!(%today, "Checking snapshot");
    let rejections = check_snapshot(snapshot, today);

    for rejection in &rejections {
        println!(
            "REJECTED {}: [{}] {}",
            rejection.record,
            rejection.error.error_code(),
            rejection.error
        );
    }

    let total = snapshot.periods.len() + snapshot.entries.len();
    println!("{} of {total} record(s) accepted", total - rejections.len());

    if !rejections.is_empty() {
        error!(rejected = rejections.len(), "Snapshot has rejected records");
        let rejected = AppError::Validation(format!("{} record(s) rejected", rejections.len()));
        return Err(rejected.into());
    }
    Ok(())
}

fn check_snapshot(snapshot: &Snapshot, today: NaiveDate) -> Vec<Rejection> {
    let mut rejections = Vec::new();

    for period in &snapshot.periods {
        if let Err(err) = PeriodValidator.on_create(period, &snapshot.periods) {
            rejections.push(Rejection {
                record: format!("period '{}' ({})", period.name, period.id),
                error: err.into(),
            });
        }
    }

    let entries = EntryValidator::new(FixedClock(today));
    for entry in &snapshot.entries {
        if let Err(err) = entries.on_create(entry, &snapshot.periods) {
            rejections.push(Rejection {
                record: format!("entry {} dated {}", entry.id, entry.date),
                error: err.into(),
            });
        }
    }

    rejections
}

/// Describes the period `date` is attributed to for `organization`.
fn resolve_line(
    snapshot: &Snapshot,
    organization: OrganizationId,
    date: NaiveDate,
) -> Result<String, AppError> {
    match attribute_date(organization, date, &snapshot.periods)? {
        Some(period) => Ok(format!(
            "{date}: period '{}' ({}) {} to {}",
            period.name, period.id, period.start_date, period.end_date
        )),
        None => Ok(format!("{date}: no period")),
    }
}
