// ABOUTME: Planner configuration for the greedy food bundle recommendation
// ABOUTME: Pick caps, per-pick quantity cap, candidate revisiting and optional fixed seed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors

//! Food Planner Configuration
//!
//! Limits for the greedy allocation passes. The defaults reproduce the
//! reference behaviour: three picks per nutrient pass, five calorie top-up
//! picks and at most one reference portion (100 units) per pick.

use super::error::ConfigError;
use nutri_core::constants::planner;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Greedy planner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Maximum picks in each per-nutrient pass
    pub max_picks_per_nutrient: usize,
    /// Maximum picks in the calorie top-up pass
    pub max_calorie_top_up_picks: usize,
    /// Largest quantity (base units) a single pick may take
    pub max_quantity_per_pick: f64,
    /// Wrap around the ranked candidate list while a pass still has room
    pub revisit_candidates: bool,
    /// Fixed seed for the ranking shuffle; entropy-seeded per request when unset
    pub seed: Option<u64>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_picks_per_nutrient: planner::MAX_PICKS_PER_NUTRIENT,
            max_calorie_top_up_picks: planner::MAX_CALORIE_TOP_UP_PICKS,
            max_quantity_per_pick: planner::MAX_QUANTITY_PER_PICK,
            revisit_candidates: true,
            seed: None,
        }
    }
}

impl PlannerConfig {
    /// Load planner configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if a variable is set but cannot be parsed,
    /// or a validation error from [`PlannerConfig::validate`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load planner configuration through an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Same as [`PlannerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            max_picks_per_nutrient: parse_var(
                &lookup,
                "NUTRI_MAX_PICKS_PER_NUTRIENT",
                defaults.max_picks_per_nutrient,
            )?,
            max_calorie_top_up_picks: parse_var(
                &lookup,
                "NUTRI_MAX_TOP_UP_PICKS",
                defaults.max_calorie_top_up_picks,
            )?,
            max_quantity_per_pick: parse_var(
                &lookup,
                "NUTRI_MAX_QUANTITY_PER_PICK",
                defaults.max_quantity_per_pick,
            )?,
            revisit_candidates: lookup("NUTRI_REVISIT_CANDIDATES")
                .map_or(defaults.revisit_candidates, |v| v != "false" && v != "0"),
            seed: lookup("NUTRI_SEED")
                .map(|raw| {
                    raw.trim()
                        .parse()
                        .map_err(|e| ConfigError::Parse(format!("NUTRI_SEED={raw}: {e}")))
                })
                .transpose()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate limits
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if a pick cap is zero or the
    /// quantity cap is not a positive finite number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_picks_per_nutrient == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_picks_per_nutrient must be at least 1",
            ));
        }
        if self.max_calorie_top_up_picks == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_calorie_top_up_picks must be at least 1",
            ));
        }
        if !self.max_quantity_per_pick.is_finite() || self.max_quantity_per_pick <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_quantity_per_pick must be a positive finite number",
            ));
        }
        Ok(())
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse()
            .map_err(|e| ConfigError::Parse(format!("{key}={raw}: {e}")))
    })
}
