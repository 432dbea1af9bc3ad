// ABOUTME: Tolerant parser for food composition table exports in JSON form
// ABOUTME: Accepts Japanese column labels or English wire names, numbers or strings, Tr and estimates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors

//! Catalog row parsing
//!
//! Composition tables mark trace amounts as `Tr`, missing values as `-` and
//! estimated values in parentheses, e.g. `(0.3)`. Every cell that is not a
//! usable non-negative number becomes zero, so a malformed cell never rejects
//! a whole row.

use nutri_core::constants::catalog_columns;
use nutri_core::errors::{AppError, AppResult};
use nutri_core::models::{FoodRecord, Nutrient, NutrientVector};
use serde_json::{Map, Value};
use std::collections::HashSet;
use tracing::warn;

const NAME_KEYS: [&str; 2] = [catalog_columns::NAME, "name"];
const CATEGORY_KEYS: [&str; 2] = [catalog_columns::CATEGORY, "category"];
const FOOD_ID_KEYS: [&str; 3] = [catalog_columns::FOOD_ID, "foodId", "food_id"];

/// Parse a JSON document holding an array of catalog rows
///
/// # Errors
///
/// Returns an `InvalidFormat` error when the text is not valid JSON or the
/// top-level value is not an array.
pub fn parse_catalog(json: &str) -> AppResult<Vec<FoodRecord>> {
    let document: Value = serde_json::from_str(json)
        .map_err(|e| AppError::invalid_format(format!("Catalog is not valid JSON: {e}")))?;

    let Value::Array(rows) = document else {
        return Err(AppError::invalid_format(
            "Catalog must be a JSON array of food rows",
        ));
    };

    let mut foods = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        match row.as_object().and_then(parse_row) {
            Some(food) => foods.push(food),
            None => warn!(row = index, "Skipping catalog row without a food name"),
        }
    }

    warn_on_duplicate_names(&foods);
    Ok(foods)
}

/// Build a record from one row; `None` when the row has no usable name
#[must_use]
pub fn parse_row(row: &Map<String, Value>) -> Option<FoodRecord> {
    let name = text_cell(row, &NAME_KEYS).filter(|name| !name.is_empty())?;
    let category = text_cell(row, &CATEGORY_KEYS).unwrap_or_default();

    let nutrients = NutrientVector::from_pairs(Nutrient::ALL.into_iter().map(|nutrient| {
        let amount = [nutrient.catalog_column(), nutrient.wire_name()]
            .into_iter()
            .find_map(|key| row.get(key))
            .map_or(0.0, parse_amount);
        (nutrient, amount)
    }));

    let mut food = FoodRecord::new(name, category, nutrients);
    if let Some(food_id) = text_cell(row, &FOOD_ID_KEYS).filter(|id| !id.is_empty()) {
        food = food.with_food_id(food_id);
    }
    Some(food)
}

/// Normalize one nutrient cell to a non-negative finite amount
#[must_use]
pub fn parse_amount(value: &Value) -> f64 {
    let amount = match value {
        Value::Number(number) => number.as_f64().unwrap_or(0.0),
        Value::String(text) => parse_amount_text(text),
        _ => 0.0,
    };
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}

fn parse_amount_text(text: &str) -> f64 {
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(trimmed);
    inner.trim().parse().unwrap_or(0.0)
}

/// Leading integer of `text`, ignoring trailing garbage
///
/// `"120kcal"` gives 120, `"-5"` gives -5, `"abc"` and `""` give `None`.
#[must_use]
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

fn text_cell(row: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| row.get(*key))
        .and_then(|value| match value {
            Value::String(text) => Some(text.trim().to_owned()),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        })
}

fn warn_on_duplicate_names(foods: &[FoodRecord]) {
    let mut seen = HashSet::with_capacity(foods.len());
    for food in foods.iter().filter(|food| food.food_id.is_none()) {
        if !seen.insert(food.name.as_str()) {
            warn!(
                food = %food.name,
                "Duplicate food name without a food number; recommendations will merge these entries"
            );
        }
    }
}
