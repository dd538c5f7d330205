// ABOUTME: Food-database provider trait and the types it exchanges
// ABOUTME: Search pages, food summaries, and raw detail objects behind one async seam
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forage Contributors

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::errors::ProviderResult;
use crate::models::schema::PAGE_SIZE;

/// FatSecret platform API provider
pub mod fatsecret;

/// One item of a search page: the identifier used to request detail, plus
/// the name for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodSummary {
    /// Provider-assigned opaque identifier
    pub food_id: String,
    /// Display name, when the search response carried one
    pub food_name: Option<String>,
}

/// One decoded page of search results with its pagination metadata.
#[derive(Debug, Clone)]
pub struct SearchPage {
    /// Items on this page, in provider order
    pub foods: Vec<FoodSummary>,
    /// Zero-based page number echoed by the provider
    pub page_number: u64,
    /// Total matches across all pages, as reported by the provider
    pub total_results: u64,
}

impl SearchPage {
    /// Whether another page remains after this one.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        (self.page_number + 1) * PAGE_SIZE < self.total_results
    }
}

/// The raw `food` object of a detail response.
///
/// Kept as a JSON map rather than a typed struct so the normalizer can
/// consume the declarative column schema uniformly: brand columns read from
/// the food object, nutrient and serving columns from the first serving
/// entry.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodDetail {
    food: Map<String, Value>,
}

impl FoodDetail {
    /// Wrap a `food` object. Returns `None` unless the value is a JSON object.
    #[must_use]
    pub fn from_food_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(food) => Some(Self { food }),
            _ => None,
        }
    }

    /// The food object's own fields (brand, name, type).
    #[must_use]
    pub fn food(&self) -> &Map<String, Value> {
        &self.food
    }

    /// The first serving entry, whether the provider sent one serving as a
    /// bare object or several as an array.
    ///
    /// Foods with multiple serving entries keep only the first; the rest are
    /// ignored.
    #[must_use]
    pub fn first_serving(&self) -> Option<&Map<String, Value>> {
        let serving = self.food.get("servings")?.get("serving")?;
        let entry = match serving {
            Value::Array(entries) => entries.first()?,
            other => other,
        };
        entry.as_object()
    }
}

/// The seam between the harvest pipeline and a remote food database.
///
/// Implementations own authentication signing and envelope decoding; the
/// pipeline sees only decoded pages and detail objects. Tests drive the
/// pipeline through a deterministic in-memory implementation.
#[async_trait]
pub trait FoodProvider: Send + Sync {
    /// Provider name for diagnostics.
    fn name(&self) -> &'static str;

    /// Fetch one page of search results for a term.
    ///
    /// # Errors
    ///
    /// `Transport` when the HTTP call fails, `Format` when the body is not
    /// the expected search envelope, `Api` when the provider reports an error
    /// envelope. All are fatal for the run.
    async fn search(&self, term: &str, page: u64) -> ProviderResult<SearchPage>;

    /// Fetch full detail for one food identifier.
    ///
    /// Returns `Ok(None)` when the response carries no decodable `food`
    /// object — the caller logs the identifier and emits a placeholder row.
    ///
    /// # Errors
    ///
    /// `Transport` when the HTTP call fails; format problems downgrade to
    /// `Ok(None)` instead of raising.
    async fn detail(&self, food_id: &str) -> ProviderResult<Option<FoodDetail>>;
}
