// ABOUTME: Strength intelligence algorithms for recovery tuning and lift estimation
// ABOUTME: Pure, stateless calculations consumed by the storage providers and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Intelligence
//!
//! Pure calculation crate. Nothing here performs I/O or holds state between
//! calls; every function is safe to call on each slider movement.
//!
//! - [`algorithms::freshness`]: exponential recovery and freshness curves
//! - [`algorithms::one_rep_max`]: Epley, Brzycki, and Mayhew 1RM estimates
//! - [`algorithms::scoring_weights`]: exercise scoring weights with normalization
//! - [`config`]: tuning bounds and their validation

/// Calculation algorithms
pub mod algorithms;

/// Tuning configuration and validation errors
pub mod config;

pub use algorithms::{
    FormulaRecommendation, OneRepMaxAlgorithm, OneRepMaxEstimate, ScoringWeights,
};
