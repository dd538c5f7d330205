// ABOUTME: Ordered collection of normalized food records
// ABOUTME: Whole-table nutrient coercion plus substring retain/exclude filters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forage Contributors

use serde_json::{Map, Value};
use tracing::warn;

use super::record::{FieldValue, FoodRecord};
use super::schema::{ColumnGroup, COLUMNS};

/// The assembled output of a harvest: one row per search item, in
/// search-result order.
///
/// Rows are append-only. After assembly the only mutations are the
/// whole-table nutrient coercion and row filtering — rows are dropped, never
/// edited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    rows: Vec<FoodRecord>,
}

impl ResultTable {
    /// Materialize a table from an already-collected row sequence.
    #[must_use]
    pub fn from_rows(rows: Vec<FoodRecord>) -> Self {
        Self { rows }
    }

    /// The rows, in search-result order.
    #[must_use]
    pub fn rows(&self) -> &[FoodRecord] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cast every nutrient cell to floating point.
    ///
    /// The API reports nutrient values as JSON strings; this pass parses them
    /// in place. Unparseable text becomes NaN — the same marker as a missing
    /// value — with a warning naming the column and offending text.
    pub fn coerce_nutrients(&mut self) {
        for row in &mut self.rows {
            for (column, cell) in COLUMNS.iter().zip(row.values_mut()) {
                if column.group != ColumnGroup::Nutrient {
                    continue;
                }
                if let FieldValue::Text(text) = cell {
                    let parsed = text.trim().parse::<f64>().unwrap_or_else(|_| {
                        warn!(
                            column = column.name,
                            value = text.as_str(),
                            "nutrient value is not numeric, coercing to NaN"
                        );
                        f64::NAN
                    });
                    *cell = FieldValue::Number(parsed);
                }
            }
        }
    }

    /// Keep only rows whose `column` text contains `needle`, ignoring case.
    ///
    /// Rows whose cell is missing or non-text never match and are dropped.
    pub fn retain_contains(&mut self, column: &str, needle: &str) {
        let needle = needle.to_lowercase();
        self.rows
            .retain(|row| cell_contains(row, column, &needle));
    }

    /// Drop rows whose `column` text contains `needle`, ignoring case.
    ///
    /// The complement of [`ResultTable::retain_contains`]: rows whose cell is
    /// missing or non-text never match and are kept.
    pub fn exclude_contains(&mut self, column: &str, needle: &str) {
        let needle = needle.to_lowercase();
        self.rows
            .retain(|row| !cell_contains(row, column, &needle));
    }

    /// Sorted distinct renderings of a column's values.
    ///
    /// The operator-side inspection step before filtering: odd units, bulk
    /// serving counts, and unusual measurement descriptions show up here.
    #[must_use]
    pub fn distinct(&self, column: &str) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for row in &self.rows {
            if let Some(cell) = row.get(column) {
                let rendered = cell.render();
                if !seen.contains(&rendered) {
                    seen.push(rendered);
                }
            }
        }
        seen.sort();
        seen
    }

    /// The table as a JSON array of column-keyed objects. NaN becomes null.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut object = Map::new();
                for (column, cell) in COLUMNS.iter().zip(row.values()) {
                    let value = match cell {
                        FieldValue::Text(text) => Value::String(text.clone()),
                        FieldValue::Number(number) => serde_json::Number::from_f64(*number)
                            .map_or(Value::Null, Value::Number),
                    };
                    object.insert(column.name.to_owned(), value);
                }
                Value::Object(object)
            })
            .collect();
        Value::Array(rows)
    }
}

// Case-insensitive substring match against a text cell. `needle` must
// already be lowercased.
fn cell_contains(row: &FoodRecord, column: &str, needle: &str) -> bool {
    row.get(column)
        .and_then(FieldValue::as_text)
        .is_some_and(|text| text.to_lowercase().contains(needle))
}
