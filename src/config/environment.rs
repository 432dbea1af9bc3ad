// ABOUTME: Environment-based server configuration with defaults for every setting
// ABOUTME: HTTP host and port, catalog file location and greedy planner limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors

use anyhow::{Context, Result};
use nutri_core::constants::ports;
use nutri_intelligence::PlannerConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use tracing::info;

/// Default catalog file, relative to the working directory
pub const DEFAULT_CATALOG_PATH: &str = "data/nutrition_data_mini.json";

/// Default bind address
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    pub http_host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Food catalog JSON file
    pub catalog_path: PathBuf,
    /// Greedy planner limits
    pub planner: PlannerConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_host: DEFAULT_HTTP_HOST.to_owned(),
            http_port: ports::DEFAULT_HTTP_PORT,
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            planner: PlannerConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `HTTP_PORT` is not a valid port number or the
    /// planner settings are invalid.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_host: env_var_or("HTTP_HOST", DEFAULT_HTTP_HOST),
            http_port: env_var_or("HTTP_PORT", &ports::DEFAULT_HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            catalog_path: PathBuf::from(env_var_or("NUTRI_CATALOG_PATH", DEFAULT_CATALOG_PATH)),
            planner: PlannerConfig::from_env().context("Invalid planner configuration")?,
        };

        Ok(config)
    }

    /// Socket address string for binding
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Nutri Picker Server Configuration:\n\
             - HTTP Address: {}\n\
             - Catalog: {}\n\
             - Picks per Nutrient: {}\n\
             - Calorie Top-Up Picks: {}\n\
             - Max Quantity per Pick: {}\n\
             - Revisit Candidates: {}\n\
             - Seed: {}",
            self.bind_address(),
            self.catalog_path.display(),
            self.planner.max_picks_per_nutrient,
            self.planner.max_calorie_top_up_picks,
            self.planner.max_quantity_per_pick,
            self.planner.revisit_candidates,
            self.planner
                .seed
                .map_or_else(|| "entropy".to_owned(), |seed| seed.to_string()),
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.http_port, 3001);
        assert_eq!(config.bind_address(), "0.0.0.0:3001");
        assert_eq!(config.catalog_path, PathBuf::from("data/nutrition_data_mini.json"));
    }

    #[test]
    fn test_summary_mentions_settings() {
        let mut config = ServerConfig::default();
        config.planner.seed = Some(9);

        let summary = config.summary();
        assert!(summary.contains("0.0.0.0:3001"));
        assert!(summary.contains("nutrition_data_mini.json"));
        assert!(summary.contains("Seed: 9"));
    }
}
