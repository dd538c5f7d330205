// ABOUTME: Declarative column schema for normalized food records
// ABOUTME: Fixed column order consumed uniformly by normalization and the table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forage Contributors

//! Every [`FoodRecord`](super::record::FoodRecord) carries exactly these
//! columns in exactly this order, regardless of which fields an individual
//! API response happened to include. The table's column set is fixed here
//! and nowhere else.

/// Number of items requested per search page.
pub const PAGE_SIZE: u64 = 50;

/// Which of the three field groups a column belongs to.
///
/// The group determines the column's source object in a detail response and
/// its default when the source omits the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnGroup {
    /// Nutrient values from the first serving entry; numeric, default NaN
    Nutrient,
    /// Serving-size fields from the first serving entry; default empty text
    Serving,
    /// Identity fields from the food object itself; default empty text
    Brand,
}

/// One column of the fixed schema.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    /// Field name, matching the provider's JSON key
    pub name: &'static str,
    /// Field group the column belongs to
    pub group: ColumnGroup,
}

const fn nutrient(name: &'static str) -> Column {
    Column {
        name,
        group: ColumnGroup::Nutrient,
    }
}

const fn serving(name: &'static str) -> Column {
    Column {
        name,
        group: ColumnGroup::Serving,
    }
}

const fn brand(name: &'static str) -> Column {
    Column {
        name,
        group: ColumnGroup::Brand,
    }
}

/// All columns in table order: nutrients, then serving fields, then brand.
pub const COLUMNS: [Column; 16] = [
    nutrient("calories"),
    nutrient("carbohydrate"),
    nutrient("fat"),
    nutrient("fiber"),
    nutrient("protein"),
    nutrient("saturated_fat"),
    nutrient("sugar"),
    nutrient("trans_fat"),
    serving("measurement_description"),
    serving("metric_serving_amount"),
    serving("metric_serving_unit"),
    serving("number_of_units"),
    serving("serving_description"),
    brand("brand_name"),
    brand("food_name"),
    brand("food_type"),
];

/// Position of a column in the schema, by name.
#[must_use]
pub fn column_index(name: &str) -> Option<usize> {
    COLUMNS.iter().position(|column| column.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_has_no_duplicate_columns() {
        for (i, column) in COLUMNS.iter().enumerate() {
            assert_eq!(column_index(column.name), Some(i));
        }
    }

    #[test]
    fn nutrients_come_first() {
        assert_eq!(column_index("calories"), Some(0));
        assert_eq!(COLUMNS[0].group, ColumnGroup::Nutrient);
        assert_eq!(column_index("food_type"), Some(COLUMNS.len() - 1));
    }
}
