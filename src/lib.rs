// ABOUTME: Main library entry point for the Nutri Picker food recommendation service
// ABOUTME: Catalog loading, configuration, logging, HTTP routes and text formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors

#![deny(unsafe_code)]

//! # Nutri Picker
//!
//! Recommends a bundle of foods, with quantities, that together approach a
//! multi-nutrient target for a day, a week or a month. Foods come from a
//! composition table loaded once at startup.
//!
//! ## Architecture
//!
//! - **`nutri-core`**: nutrients, food records, targets, errors and constants
//! - **`nutri-intelligence`**: the greedy planner and its configuration
//! - **Catalog**: tolerant JSON loading and catalog queries
//! - **Routes**: axum HTTP API over the catalog and the planner
//! - **Formatters**: text rendering for the command line tool
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutri_picker::catalog::FoodCatalog;
//! use nutri_picker::config::ServerConfig;
//! use nutri_core::models::NutrientTarget;
//! use nutri_intelligence::FoodPlanner;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let catalog = FoodCatalog::load(&config.catalog_path).await?;
//!
//!     let recommendation = FoodPlanner::new(config.planner)?
//!         .recommend(&NutrientTarget::default(), catalog.foods());
//!     println!("{} foods recommended", recommendation.foods.len());
//!     Ok(())
//! }
//! ```

/// Food catalog loading and queries
pub mod catalog;

/// Environment configuration
pub mod config;

/// Text and JSON output rendering
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// HTTP route handlers
pub mod routes;

/// HTTP server assembly
pub mod server;

pub use nutri_core::errors::{AppError, AppResult, ErrorCode};
