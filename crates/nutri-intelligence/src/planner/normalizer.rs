// ABOUTME: Target normalizer scaling per-period nutrient targets by the period multiplier
// ABOUTME: daily=1, weekly=7, monthly=30; the adjusted target drives every comparison
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors

use nutri_core::models::{NutrientTarget, NutrientVector};

/// Scale a per-period target to the whole planning period
#[must_use]
pub fn adjusted_target(target: &NutrientTarget) -> NutrientVector {
    target.amounts.scaled(target.period.multiplier())
}
