// ABOUTME: Nutrient targets with a planning period (daily, weekly, monthly)
// ABOUTME: Period parsing is lossy so unrecognized values fall back to daily
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors

use super::nutrient::{Nutrient, NutrientVector};
use crate::constants::{default_targets, periods};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Planning period a target is expressed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    /// One day
    #[default]
    Daily,
    /// Seven days
    Weekly,
    /// Thirty days
    Monthly,
}

impl Period {
    /// Parse a period from string, defaulting to daily for anything unrecognized
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Self::Weekly,
            "monthly" => Self::Monthly,
            _ => Self::Daily,
        }
    }

    /// Number of days the period covers
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Daily => periods::DAILY_MULTIPLIER,
            Self::Weekly => periods::WEEKLY_MULTIPLIER,
            Self::Monthly => periods::MONTHLY_MULTIPLIER,
        }
    }

    /// Lowercase name used on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_str_lossy(&raw))
    }
}

/// Desired nutrient amounts for one period instance
///
/// Serialized flat: nutrient keys and `period` live side by side, e.g.
/// `{"calories": 2000, "protein": 60, "period": "weekly"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientTarget {
    /// Amount per nutrient for a single period instance
    #[serde(flatten)]
    pub amounts: NutrientVector,
    /// Period the amounts are expressed for
    #[serde(default)]
    pub period: Period,
}

impl NutrientTarget {
    /// Target with the given amounts and period
    #[must_use]
    pub const fn new(amounts: NutrientVector, period: Period) -> Self {
        Self { amounts, period }
    }

    /// Daily target built from `(nutrient, amount)` pairs
    #[must_use]
    pub fn daily(pairs: impl IntoIterator<Item = (Nutrient, f64)>) -> Self {
        Self::new(NutrientVector::from_pairs(pairs), Period::Daily)
    }

    /// Same amounts for a different period
    #[must_use]
    pub const fn with_period(mut self, period: Period) -> Self {
        self.period = period;
        self
    }

    /// Amount for one nutrient
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> f64 {
        self.amounts.get(nutrient)
    }
}

impl Default for NutrientTarget {
    /// Reference adult daily intake used by the planner form
    fn default() -> Self {
        Self::daily(default_targets::ADULT_DAILY)
    }
}
