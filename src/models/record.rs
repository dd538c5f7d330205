// ABOUTME: Single-row record type aligned with the fixed column schema
// ABOUTME: Cells are text or floating-point; missing nutrients are NaN, missing text is empty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forage Contributors

use serde::Serialize;

use super::schema::{column_index, ColumnGroup, COLUMNS};

/// One cell of a normalized record.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Textual cell; empty string marks a missing text field
    Text(String),
    /// Numeric cell; NaN marks a missing nutrient
    Number(f64),
}

impl FieldValue {
    /// The default cell for a column group: NaN for nutrients, empty text otherwise.
    #[must_use]
    pub fn default_for(group: ColumnGroup) -> Self {
        match group {
            ColumnGroup::Nutrient => Self::Number(f64::NAN),
            ColumnGroup::Serving | ColumnGroup::Brand => Self::Text(String::new()),
        }
    }

    /// Borrow the text content, if this is a text cell.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) => None,
        }
    }

    /// Copy the numeric content, if this is a numeric cell.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Text(_) => None,
        }
    }

    /// Render the cell for display output. NaN renders as empty.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(number) if number.is_nan() => String::new(),
            Self::Number(number) => format!("{number}"),
        }
    }
}

// NaN cells compare equal so that identical runs produce comparable tables.
impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            _ => false,
        }
    }
}

/// One normalized row, with cells aligned to [`COLUMNS`].
///
/// Every record carries the full fixed column set; construction is only
/// possible through the normalizer or [`FoodRecord::absent`], so a record can
/// never have a column subset that depends on what the API returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodRecord {
    values: Vec<FieldValue>,
}

impl FoodRecord {
    /// Build a record from cells already aligned with [`COLUMNS`].
    ///
    /// # Panics
    ///
    /// Panics when the cell count does not match the schema; the normalizer
    /// iterates [`COLUMNS`] directly, so this indicates a bug in the caller
    /// rather than bad input data.
    #[must_use]
    pub fn from_values(values: Vec<FieldValue>) -> Self {
        assert_eq!(values.len(), COLUMNS.len(), "record must cover the schema");
        Self { values }
    }

    /// A placeholder row with every column at its group default.
    ///
    /// Emitted when a detail lookup fails, so the table's row count still
    /// matches the search-result count.
    #[must_use]
    pub fn absent() -> Self {
        Self {
            values: COLUMNS
                .iter()
                .map(|column| FieldValue::default_for(column.group))
                .collect(),
        }
    }

    /// Look up a cell by column name.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        column_index(column).map(|index| &self.values[index])
    }

    /// All cells, in schema order.
    #[must_use]
    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut [FieldValue] {
        &mut self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_record_uses_group_defaults() {
        let record = FoodRecord::absent();
        assert!(record
            .get("calories")
            .and_then(FieldValue::as_number)
            .is_some_and(f64::is_nan));
        assert_eq!(
            record.get("serving_description").and_then(FieldValue::as_text),
            Some("")
        );
        assert_eq!(record.get("brand_name").and_then(FieldValue::as_text), Some(""));
        assert_eq!(record.values().len(), COLUMNS.len());
    }

    #[test]
    fn nan_cells_compare_equal() {
        assert_eq!(FoodRecord::absent(), FoodRecord::absent());
    }

    #[test]
    fn unknown_column_yields_none() {
        assert!(FoodRecord::absent().get("cholesterol").is_none());
    }
}
