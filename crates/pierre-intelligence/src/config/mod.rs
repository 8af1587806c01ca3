// ABOUTME: Configuration module for pierre-intelligence crate
// ABOUTME: Re-exports tuning bounds and configuration error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration error types
pub mod error;
/// Recovery and scoring tuning bounds
pub mod tuning;

pub use error::ConfigError;
pub use tuning::{RecoveryTuningConfig, ScoringTuningConfig, TuningConfig};
