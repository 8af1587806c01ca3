// ABOUTME: Muscle recovery module: tunable decay constants and last-trained tracking
// ABOUTME: Derives per-muscle recovery percentages from timestamps and decay rates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Per-muscle decay constants and their persistence
pub mod rates;
/// Last-trained timestamps and derived recovery scores
pub mod tracker;

pub use rates::{MuscleRecoveryRates, RecoveryRateProvider};
pub use tracker::{hours_before, MuscleRecoveryTracker, RecoveryScores};
