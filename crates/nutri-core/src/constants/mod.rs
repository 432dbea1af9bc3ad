// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for periods, reference intakes, planner limits and the catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors

//! Constants module
//!
//! Application constants grouped by domain.

/// Period multipliers applied to per-period targets
pub mod periods {
    /// Daily period multiplier
    pub const DAILY_MULTIPLIER: f64 = 1.0;
    /// Weekly period multiplier
    pub const WEEKLY_MULTIPLIER: f64 = 7.0;
    /// Monthly period multiplier (30-day month)
    pub const MONTHLY_MULTIPLIER: f64 = 30.0;
}

/// Reference daily intakes used as the default target
pub mod default_targets {
    use crate::models::Nutrient;

    /// Adult daily reference intake per nutrient
    pub const ADULT_DAILY: [(Nutrient, f64); Nutrient::COUNT] = [
        (Nutrient::Calories, 2000.0),
        (Nutrient::Protein, 60.0),
        (Nutrient::Fat, 65.0),
        (Nutrient::Carbs, 250.0),
        (Nutrient::Fiber, 25.0),
        (Nutrient::Sodium, 2300.0),
        (Nutrient::Potassium, 3500.0),
        (Nutrient::Calcium, 1000.0),
        (Nutrient::Magnesium, 400.0),
        (Nutrient::Phosphorus, 700.0),
        (Nutrient::Iron, 18.0),
        (Nutrient::Zinc, 11.0),
        (Nutrient::VitaminA, 900.0),
        (Nutrient::VitaminD, 15.0),
        (Nutrient::VitaminE, 15.0),
        (Nutrient::VitaminK, 120.0),
        (Nutrient::VitaminB1, 1.2),
        (Nutrient::VitaminB2, 1.3),
        (Nutrient::VitaminB6, 1.3),
        (Nutrient::VitaminB12, 2.4),
        (Nutrient::VitaminC, 90.0),
        (Nutrient::Folate, 400.0),
    ];
}

/// Default limits of the greedy planner
pub mod planner {
    /// Catalog densities are expressed per this many base units
    pub const REFERENCE_PORTION: f64 = 100.0;
    /// Largest quantity a single pick may take (one reference portion)
    pub const MAX_QUANTITY_PER_PICK: f64 = 100.0;
    /// Picks allowed per nutrient pass
    pub const MAX_PICKS_PER_NUTRIENT: usize = 3;
    /// Picks allowed in the calorie top-up pass
    pub const MAX_CALORIE_TOP_UP_PICKS: usize = 5;
}

/// Catalog column labels that are not nutrients
pub mod catalog_columns {
    /// Food name column
    pub const NAME: &str = "食品名";
    /// Food group column
    pub const CATEGORY: &str = "食品群";
    /// Food number column
    pub const FOOD_ID: &str = "食品番号";
}

/// Calorie range filter defaults
pub mod calorie_filter {
    /// Lower bound used when none is supplied
    pub const DEFAULT_MIN: i64 = 0;
    /// Upper bound used when none is supplied
    pub const DEFAULT_MAX: i64 = 1000;
}

/// Service names for logging
pub mod service_names {
    /// HTTP server service name
    pub const NUTRI_PICKER_SERVER: &str = "nutri-picker-server";
    /// CLI service name
    pub const NUTRI_CLI: &str = "nutri-cli";
}

/// Network defaults
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 3001;
}
