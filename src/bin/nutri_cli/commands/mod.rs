// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors
// ABOUTME: Re-exports command modules for nutri-cli
// ABOUTME: Provides recommendation and catalog query commands

pub mod catalog;
pub mod recommend;
