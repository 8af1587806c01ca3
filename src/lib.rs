// ABOUTME: Main library entry point for Pierre Strength tuning and estimation
// ABOUTME: Wires preference storage, recovery tracking, scoring weights, and tuning state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Strength
//!
//! Power-user tuning for strength training: per-muscle recovery decay
//! constants, one-rep-max estimation, and the weights of the exercise
//! selection score.
//!
//! The pure calculations live in `pierre-intelligence`; this crate adds the
//! collaborators around them:
//!
//! - **preferences**: asynchronous key-value store (in-memory or JSON file)
//! - **recovery**: persisted decay constants and last-trained timestamps
//! - **scoring**: persisted scoring weights with reset and normalize
//! - **exercises**: favorite and avoided exercise lists
//! - **tuning**: immutable tuning state, a pure reducer, and a controller that
//!   performs persistence side effects
//! - **formatters**: fixed-precision display strings
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use pierre_strength::preferences::memory::InMemoryPreferences;
//! use pierre_strength::tuning::{TuningAction, TuningController};
//! use pierre_intelligence::config::TuningConfig;
//!
//! # async fn example() -> pierre_strength::errors::AppResult<()> {
//! let store = Arc::new(InMemoryPreferences::new());
//! let mut controller = TuningController::load(store, TuningConfig::default()).await?;
//! controller.dispatch(TuningAction::SetLiftWeightText("100".into())).await?;
//! controller.dispatch(TuningAction::SetLiftRepsText("5".into())).await?;
//! assert!(controller.state().lift.estimate.is_some());
//! # Ok(())
//! # }
//! ```

/// Environment-based configuration
pub mod config;

/// Unified error handling re-exported from `pierre-core`
pub mod errors;

/// Favorite and avoided exercise lists
pub mod exercises;

/// Display formatting for rates, loads, and percentages
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// Preference key-value store abstraction and backends
pub mod preferences;

/// Muscle recovery rates, last-trained tracking, and recovery scores
pub mod recovery;

/// Persisted exercise scoring weights
pub mod scoring;

/// Tuning state, actions, reducer, and controller
pub mod tuning;

pub use pierre_core::{constants, models};
