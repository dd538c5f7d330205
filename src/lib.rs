// ABOUTME: Library entry point for the forage nutrition-harvesting crate
// ABOUTME: Wires config, provider, normalization, and table modules together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forage Contributors

#![deny(unsafe_code)]

//! # Forage
//!
//! A client for harvesting normalized nutrition records from the FatSecret
//! platform food-database API.
//!
//! Forage signs requests with two-legged OAuth 1.0a, walks paginated search
//! results for a term, fetches full nutrient and serving detail for every
//! matched item, and flattens each response into a row with a fixed column
//! set. The assembled [`ResultTable`](models::table::ResultTable) supports
//! case-insensitive substring filters for ad-hoc cleaning of serving sizes
//! and novelty product variants.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use forage::config::FatSecretConfig;
//! use forage::providers::fatsecret::FatSecretProvider;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = FatSecretConfig::from_env()?;
//!     let provider = FatSecretProvider::new(config);
//!
//!     let mut table = forage::harvest(&provider, "clif bar").await?;
//!     table.retain_contains("serving_description", "1 bar");
//!     table.exclude_contains("food_name", "mini");
//!
//!     println!("{} records after cleaning", table.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Providers**: the [`providers::FoodProvider`] trait and its FatSecret
//!   implementation own all remote-API interaction
//! - **Normalizer**: [`normalize`] flattens one detail response into one row
//! - **Harvest**: [`harvest()`] drives the page walk and row accumulation
//! - **Models**: the fixed column schema, records, and the result table

/// Credential and endpoint configuration from the environment
pub mod config;
/// Error taxonomy for provider operations
pub mod errors;
/// The harvest pipeline: page walk, detail fetch, row accumulation
pub mod harvest;
/// Shared HTTP client with connection pooling
pub mod http_client;
/// Structured logging setup
pub mod logging;
/// Column schema, records, and the result table
pub mod models;
/// Flattening of detail responses into fixed-schema records
pub mod normalize;
/// Two-legged OAuth 1.0a request signing
pub mod oauth1;
/// Food-database provider trait and implementations
pub mod providers;

pub use errors::{ProviderError, ProviderResult};
pub use harvest::harvest;
pub use models::record::{FieldValue, FoodRecord};
pub use models::schema::{ColumnGroup, COLUMNS, PAGE_SIZE};
pub use models::table::ResultTable;
pub use providers::{FoodDetail, FoodProvider, FoodSummary, SearchPage};
