// ABOUTME: Shared benchmark utilities and fixtures
// ABOUTME: Provides deterministic food catalogs sized for the recommendation benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors

#![allow(dead_code)]

pub mod fixtures;
