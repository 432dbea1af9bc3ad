// ABOUTME: Configuration module for the nutri-intelligence crate
// ABOUTME: Re-exports planner configuration and its validation error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors

/// Configuration validation errors
pub mod error;
/// Greedy planner limits and random source settings
pub mod planner;

pub use error::ConfigError;
pub use planner::PlannerConfig;
