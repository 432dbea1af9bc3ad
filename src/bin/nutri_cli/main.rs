// ABOUTME: Nutri CLI - command-line access to food recommendations and catalog queries
// ABOUTME: Recommends food bundles for a nutrient target and searches or filters the catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors
//!
//! Usage:
//! ```bash
//! # Recommend foods for the reference adult daily intake
//! nutri-cli recommend
//!
//! # Weekly target with custom protein and calories, reproducible
//! nutri-cli recommend --calories 1800 --protein 80 --period weekly --seed 42
//!
//! # Only the given nutrients, as JSON
//! nutri-cli recommend --only-given --iron 18 --vitamin-c 100 --json
//!
//! # Catalog queries
//! nutri-cli search 豆腐
//! nutri-cli category 穀類
//! nutri-cli calories --min 100 --max 200
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::recommend::TargetArgs;
use nutri_picker::catalog::FoodCatalog;
use nutri_picker::config::environment::DEFAULT_CATALOG_PATH;
use nutri_picker::formatters::OutputFormat;
use nutri_picker::logging::LoggingConfig;
use std::env;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "nutri-cli",
    about = "Nutri Picker command-line tool",
    long_about = "Recommend food bundles for a nutrient target and query the food catalog."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Catalog JSON file (defaults to NUTRI_CATALOG_PATH, then data/nutrition_data_mini.json)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Print output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Recommend foods and quantities for a nutrient target
    Recommend {
        #[command(flatten)]
        target: TargetArgs,

        /// Planning period: daily, weekly or monthly
        #[arg(long, default_value = "daily")]
        period: String,

        /// Seed for reproducible tie-breaking
        #[arg(long)]
        seed: Option<u64>,

        /// Leave nutrients without a flag at zero instead of the reference intake
        #[arg(long)]
        only_given: bool,
    },

    /// Search foods by name (case-insensitive substring)
    Search {
        /// Text to look for in food names
        query: String,
    },

    /// List foods in a category (exact label)
    Category {
        /// Category label, e.g. 穀類
        label: String,
    },

    /// List foods within a calorie range per 100 g (inclusive)
    Calories {
        /// Lower bound, default 0
        #[arg(long)]
        min: Option<String>,

        /// Upper bound, default 1000
        #[arg(long)]
        max: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;

    let catalog_path = cli
        .catalog
        .or_else(|| env::var("NUTRI_CATALOG_PATH").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH));
    debug!(path = %catalog_path.display(), "Loading catalog");
    let catalog = FoodCatalog::load(&catalog_path).await?;

    let format = OutputFormat::from_json_flag(cli.json);

    let output = match cli.command {
        Command::Recommend {
            target,
            period,
            seed,
            only_given,
        } => commands::recommend::run(&catalog, &target, &period, seed, only_given, format)?,
        Command::Search { query } => {
            commands::catalog::render(&catalog.search_by_name(&query), format)?
        }
        Command::Category { label } => {
            commands::catalog::render(&catalog.filter_by_category(&label), format)?
        }
        Command::Calories { min, max } => {
            commands::catalog::calories(&catalog, min.as_deref(), max.as_deref(), format)?
        }
    };

    print!("{output}");
    Ok(())
}
