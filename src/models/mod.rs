// ABOUTME: Data model for normalized nutrition records
// ABOUTME: Column schema, row records, and the accumulating result table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forage Contributors

/// Single-cell values and fixed-schema rows
pub mod record;
/// The declarative column schema shared by all rows
pub mod schema;
/// Ordered row collection with coercion and filters
pub mod table;

pub use record::{FieldValue, FoodRecord};
pub use schema::{Column, ColumnGroup, COLUMNS, PAGE_SIZE};
pub use table::ResultTable;
