// ABOUTME: Configuration module re-exporting environment-based settings
// ABOUTME: Environment-only configuration approach with validated tuning bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment variable parsing for deployment settings
pub mod environment;

pub use environment::{Environment, LogLevel, PreferencesBackend, PreferencesConfig, StrengthConfig};
