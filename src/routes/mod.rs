// ABOUTME: Route module organization for the Nutri Picker HTTP endpoints
// ABOUTME: Health, food catalog and recommendation routes grouped by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors

//! Route module for Nutri Picker
//!
//! Each domain module contains route definitions and thin handlers that
//! delegate to the catalog and the planner.

/// Food catalog query routes
pub mod foods;
/// Health check routes
pub mod health;
/// Recommendation routes
pub mod recommend;

/// Food catalog route handlers
pub use foods::FoodRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
/// Recommendation route handlers
pub use recommend::{RecommendRequest, RecommendRoutes};
