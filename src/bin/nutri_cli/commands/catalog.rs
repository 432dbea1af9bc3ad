// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors
// ABOUTME: Catalog query commands for nutri-cli
// ABOUTME: Renders search, category and calorie range results as text or JSON

use anyhow::Result;
use nutri_core::models::FoodRecord;
use nutri_picker::catalog::{calorie_bounds, FoodCatalog};
use nutri_picker::formatters::{format_food_list, to_pretty_json, OutputFormat};

/// Render a list of foods
pub fn render(foods: &[&FoodRecord], format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => format_food_list(foods),
        OutputFormat::Json => to_pretty_json(foods)? + "\n",
    })
}

/// Filter by calorie range, with the same defaults as the HTTP endpoint
pub fn calories(
    catalog: &FoodCatalog,
    min: Option<&str>,
    max: Option<&str>,
    format: OutputFormat,
) -> Result<String> {
    let (min, max) = calorie_bounds(min, max);
    render(&catalog.filter_by_calories(min, max), format)
}
