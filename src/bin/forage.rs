// ABOUTME: Command-line front end: one harvest run with optional cleaning filters
// ABOUTME: Credentials come from the environment; the table prints as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forage Contributors

//! Usage:
//! ```bash
//! export FATSECRET_CONSUMER_KEY=...
//! export FATSECRET_SHARED_SECRET=...
//!
//! # Harvest every match for a term
//! forage "clif bar"
//!
//! # Keep standard bars only, drop novelty variants
//! forage "clif bar" --keep-serving "1 bar" --drop-name mini --drop-name "fun size"
//!
//! # Inspect distinct serving units before filtering
//! forage "clif bar" --distinct metric_serving_unit
//!
//! # Machine-readable output
//! forage "clif bar" --json
//! ```

use anyhow::Result;
use clap::Parser;

use forage::config::FatSecretConfig;
use forage::providers::fatsecret::FatSecretProvider;
use forage::{harvest, logging, COLUMNS};

#[derive(Parser)]
#[command(
    name = "forage",
    about = "Harvest normalized nutrition records from the FatSecret platform API"
)]
struct Cli {
    /// Search term, e.g. "clif bar"
    term: String,

    /// Keep only rows whose serving_description contains this text
    /// (case-insensitive); repeatable, applied in order
    #[arg(long, value_name = "TEXT")]
    keep_serving: Vec<String>,

    /// Drop rows whose food_name contains this text (case-insensitive);
    /// repeatable, applied in order
    #[arg(long, value_name = "TEXT")]
    drop_name: Vec<String>,

    /// Print the distinct values of a column instead of the table
    #[arg(long, value_name = "COLUMN")]
    distinct: Option<String>,

    /// Print the table as JSON instead of tab-separated text
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let provider = FatSecretProvider::new(FatSecretConfig::from_env()?);
    let mut table = harvest(&provider, &cli.term).await?;

    for needle in &cli.keep_serving {
        table.retain_contains("serving_description", needle);
    }
    for needle in &cli.drop_name {
        table.exclude_contains("food_name", needle);
    }

    if let Some(column) = &cli.distinct {
        for value in table.distinct(column) {
            println!("{value}");
        }
        return Ok(());
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&table.to_json())?);
    } else {
        let header: Vec<&str> = COLUMNS.iter().map(|column| column.name).collect();
        println!("{}", header.join("\t"));
        for row in table.rows() {
            let cells: Vec<String> = row.values().iter().map(forage::FieldValue::render).collect();
            println!("{}", cells.join("\t"));
        }
    }

    Ok(())
}
