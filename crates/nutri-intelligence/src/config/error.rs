// ABOUTME: Configuration error types for planner settings validation
// ABOUTME: Defines error variants for invalid ranges and unparseable environment values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors

//! Configuration error types for planner settings validation.

use nutri_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match error {
            ConfigError::ValueOutOfRange(_) => ErrorCode::ValueOutOfRange,
            ConfigError::Parse(_) => ErrorCode::ConfigInvalid,
        };
        Self::new(code, error.to_string())
    }
}
