// ABOUTME: Core types and constants for the Nutri Picker food recommendation platform
// ABOUTME: Foundation crate with error handling, nutrient identifiers, food records and targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors

#![deny(unsafe_code)]

//! # Nutri Core
//!
//! Foundation crate providing shared types and constants for Nutri Picker.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Period multipliers, reference intakes and planner limits
//! - **models**: `Nutrient`, `NutrientVector`, `FoodRecord`, `NutrientTarget`

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (nutrients, foods, targets)
pub mod models;
