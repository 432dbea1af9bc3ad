// ABOUTME: Configuration module for server settings loaded from the environment
// ABOUTME: Re-exports ServerConfig and the planner configuration it embeds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors

//! Configuration module for Nutri Picker
//!
//! - **Environment**: HTTP binding, catalog location and planner limits

/// Environment and server configuration
pub mod environment;

pub use environment::ServerConfig;
pub use nutri_intelligence::config::{ConfigError, PlannerConfig};
