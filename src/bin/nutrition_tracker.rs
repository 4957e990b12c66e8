// ABOUTME: Nutrition tracker CLI for rendering a daily dashboard from a food log file
// ABOUTME: Loads entries and goals from JSON, runs the insight engine and searches the catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Tracker Contributors
//!
//! Usage:
//! ```bash
//! # Dashboard for the most recent day in a log file
//! nutrition-tracker dashboard --entries log.json
//!
//! # Dashboard for a given day and hour with saved goals, as JSON
//! nutrition-tracker dashboard --entries log.json --goals goals.json --date 2025-03-01 --hour 20 --format json
//!
//! # Search the food catalog
//! nutrition-tracker search chicken
//! ```

use chrono::{Local, NaiveDate, Timelike};
use clap::{Parser, Subcommand, ValueEnum};
use nutrition_tracker::catalog::FoodCatalog;
use nutrition_tracker::config::TrackerConfig;
use nutrition_tracker::errors::{AppError, AppResult};
use nutrition_tracker::models::{LogEntry, NutritionGoals};
use nutrition_tracker::session::SessionLoader;
use nutrition_tracker::storage::{DocumentStore, InMemoryDocumentStore, StoreCapability};
use std::path::{Path, PathBuf};
use tracing::info;

/// Last hour of the day, used when showing a past day
const END_OF_DAY_HOUR: u32 = 23;

#[derive(Parser)]
#[command(
    name = "nutrition-tracker",
    about = "Daily nutrition dashboard and food catalog",
    long_about = "Aggregates a day's food log, compares it with nutrition goals and prints progress, insights and chart data."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show the dashboard for one day of a food log
    Dashboard {
        /// JSON file containing an array of log entries
        #[arg(long)]
        entries: PathBuf,

        /// JSON file containing nutrition goals (defaults apply when omitted)
        #[arg(long)]
        goals: Option<PathBuf>,

        /// Day to show (defaults to the latest day in the log)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Hour of day for time-sensitive insights (0-23)
        #[arg(long)]
        hour: Option<u32>,

        /// User the log belongs to
        #[arg(long, default_value = "local")]
        user: String,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Search the food catalog
    Search {
        /// Search text (at least two characters)
        query: String,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let mut config = TrackerConfig::from_env()?;
    if cli.verbose {
        config.logging.level = "debug".into();
    }
    config.logging.init()?;
    config.log_summary();

    match cli.command {
        Command::Dashboard {
            entries,
            goals,
            date,
            hour,
            user,
            format,
        } => show_dashboard(config, &entries, goals.as_deref(), date, hour, user, format).await,
        Command::Search { query, format } => search(&query, format),
    }
}

async fn show_dashboard(
    config: TrackerConfig,
    entries_path: &Path,
    goals_path: Option<&Path>,
    date: Option<NaiveDate>,
    hour: Option<u32>,
    user: String,
    format: OutputFormat,
) -> AppResult<()> {
    let entries: Vec<LogEntry> = read_json(entries_path).await?;
    info!(count = entries.len(), path = %entries_path.display(), "Loaded food log");

    let store = InMemoryDocumentStore::new();
    for entry in &entries {
        store.save_entry(&user, entry).await?;
    }
    if let Some(path) = goals_path {
        let goals: NutritionGoals = read_json(path).await?;
        goals.validate()?;
        store.save_goals(&user, &goals).await?;
    }

    let now = Local::now();
    let date = date
        .or_else(|| entries.iter().map(|e| e.date).max())
        .unwrap_or_else(|| now.date_naive());
    let hour = hour.unwrap_or(if date < now.date_naive() {
        END_OF_DAY_HOUR
    } else {
        now.hour()
    });

    let loader =
        SessionLoader::new(user, StoreCapability::available(store), config).for_date(date);
    let view = loader.session().await?.lock().await.dashboard(date, hour);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
        OutputFormat::Text => print!("{view}"),
    }

    if let Some(summary) = loader.close() {
        info!(
            user_id = %summary.user_id,
            entries_loaded = summary.entries_loaded,
            "Dashboard rendered"
        );
    }
    Ok(())
}

fn search(query: &str, format: OutputFormat) -> AppResult<()> {
    let results = FoodCatalog::builtin().search(query);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Text => {
            if results.is_empty() {
                println!("No foods match '{query}'");
            }
            for item in results {
                println!(
                    "{:>3}  {:<20} {:<14} {:>5.0} kcal  P {:.1}g  C {:.1}g  F {:.1}g",
                    item.id,
                    item.name,
                    item.serving,
                    item.nutrients.calories,
                    item.nutrients.protein,
                    item.nutrients.carbs,
                    item.nutrients.fat
                );
            }
        }
    }
    Ok(())
}

async fn read_json<T: serde::de::DeserializeOwned + Send>(path: &Path) -> AppResult<T> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::storage(format!("Cannot read {}", path.display())).with_source(e)
    })?;
    Ok(serde_json::from_str(&raw)?)
}
