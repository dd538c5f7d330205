// ABOUTME: The harvest pipeline: page walk, per-item detail fetch, row accumulation
// ABOUTME: Iterative pagination bounded by the provider-reported total; one table out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forage Contributors

use tracing::{debug, warn};

use crate::errors::ProviderResult;
use crate::models::record::FoodRecord;
use crate::models::table::ResultTable;
use crate::normalize;
use crate::providers::FoodProvider;

/// Fetch every search result for `term` and assemble the normalized table.
///
/// Pages are walked iteratively from page 0 while
/// `(page_number + 1) * PAGE_SIZE < total_results`, using the page number the
/// provider echoes back. Every item on a page is detailed before the next
/// page is requested, sequentially, so row order matches search-result order.
/// Items whose detail lookup comes back absent are logged and contribute an
/// all-default placeholder row — the table always has one row per search
/// result.
///
/// After the walk, nutrient columns are cast to floating point in one
/// whole-table pass.
///
/// # Errors
///
/// Propagates the first fatal provider error: `Transport` anywhere, `Format`
/// or `Api` on a search request. Progress made before the failure is lost;
/// rerun the query.
pub async fn harvest(provider: &dyn FoodProvider, term: &str) -> ProviderResult<ResultTable> {
    let mut rows: Vec<FoodRecord> = Vec::new();
    let mut page = 0;

    loop {
        let batch = provider.search(term, page).await?;
        debug!(
            provider = provider.name(),
            page = batch.page_number,
            items = batch.foods.len(),
            total = batch.total_results,
            "fetched search page"
        );

        for summary in &batch.foods {
            match provider.detail(&summary.food_id).await? {
                Some(detail) => rows.push(normalize::flatten(Some(&detail))),
                None => {
                    warn!(
                        food_id = %summary.food_id,
                        food_name = summary.food_name.as_deref().unwrap_or(""),
                        "detail lookup returned no food, emitting placeholder row"
                    );
                    rows.push(normalize::flatten(None));
                }
            }
        }

        if batch.has_next_page() {
            page = batch.page_number + 1;
        } else {
            break;
        }
    }

    let mut table = ResultTable::from_rows(rows);
    table.coerce_nutrients();
    Ok(table)
}
