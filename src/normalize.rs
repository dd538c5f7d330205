// ABOUTME: Flattens one detail response into one fixed-schema record
// ABOUTME: Present and absent details share the same schema-driven default substitution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forage Contributors

use serde_json::Value;

use crate::models::record::{FieldValue, FoodRecord};
use crate::models::schema::{ColumnGroup, COLUMNS};
use crate::providers::FoodDetail;

/// Convert one detail lookup result into exactly one record.
///
/// A present detail fills each column from its group's source object,
/// substituting the group default for anything the response omits. An absent
/// detail yields the all-default placeholder row, so the table's row count
/// always matches the search-result count.
#[must_use]
pub fn flatten(detail: Option<&FoodDetail>) -> FoodRecord {
    match detail {
        Some(detail) => flatten_present(detail),
        None => FoodRecord::absent(),
    }
}

fn flatten_present(detail: &FoodDetail) -> FoodRecord {
    let serving = detail.first_serving();

    let values = COLUMNS
        .iter()
        .map(|column| {
            let source = match column.group {
                ColumnGroup::Brand => Some(detail.food()),
                ColumnGroup::Nutrient | ColumnGroup::Serving => serving,
            };
            source
                .and_then(|object| object.get(column.name))
                .and_then(cell_from_json)
                .unwrap_or_else(|| FieldValue::default_for(column.group))
        })
        .collect();

    FoodRecord::from_values(values)
}

// Strings and numbers carry over; anything else counts as absent.
fn cell_from_json(value: &Value) -> Option<FieldValue> {
    match value {
        Value::String(text) => Some(FieldValue::Text(text.clone())),
        Value::Number(number) => number.as_f64().map(FieldValue::Number),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn detail(value: Value) -> FoodDetail {
        FoodDetail::from_food_value(value).unwrap()
    }

    #[test]
    fn absent_detail_flattens_to_placeholder() {
        assert_eq!(flatten(None), FoodRecord::absent());
    }

    #[test]
    fn first_serving_wins_when_several_are_reported() {
        let detail = detail(json!({
            "food_name": "Crunchy Peanut Butter",
            "servings": {
                "serving": [
                    {"serving_description": "1 bar (68g)", "calories": "250"},
                    {"serving_description": "100 g", "calories": "368"}
                ]
            }
        }));

        let record = flatten(Some(&detail));
        assert_eq!(
            record
                .get("serving_description")
                .and_then(FieldValue::as_text),
            Some("1 bar (68g)")
        );
        assert_eq!(
            record.get("calories").and_then(FieldValue::as_text),
            Some("250")
        );
    }

    #[test]
    fn missing_fields_fall_back_to_group_defaults() {
        let detail = detail(json!({
            "food_name": "Generic Bar",
            "servings": {
                "serving": {"calories": "240"}
            }
        }));

        let record = flatten(Some(&detail));
        assert_eq!(
            record.get("food_name").and_then(FieldValue::as_text),
            Some("Generic Bar")
        );
        // brand_name absent from the food object
        assert_eq!(record.get("brand_name").and_then(FieldValue::as_text), Some(""));
        // fiber absent from the serving entry
        assert!(record
            .get("fiber")
            .and_then(FieldValue::as_number)
            .is_some_and(f64::is_nan));
        // serving text absent from the serving entry
        assert_eq!(
            record
                .get("measurement_description")
                .and_then(FieldValue::as_text),
            Some("")
        );
    }

    #[test]
    fn numeric_json_values_carry_over() {
        let detail = detail(json!({
            "servings": {
                "serving": {"calories": 240, "metric_serving_amount": 68.0}
            }
        }));

        let record = flatten(Some(&detail));
        assert_eq!(
            record.get("calories").and_then(FieldValue::as_number),
            Some(240.0)
        );
        assert_eq!(
            record
                .get("metric_serving_amount")
                .and_then(FieldValue::as_number),
            Some(68.0)
        );
    }

    #[test]
    fn detail_without_servings_gets_nutrient_defaults() {
        let detail = detail(json!({
            "food_name": "Mystery Item",
            "food_type": "Generic"
        }));

        let record = flatten(Some(&detail));
        assert_eq!(
            record.get("food_name").and_then(FieldValue::as_text),
            Some("Mystery Item")
        );
        assert!(record
            .get("protein")
            .and_then(FieldValue::as_number)
            .is_some_and(f64::is_nan));
    }
}
