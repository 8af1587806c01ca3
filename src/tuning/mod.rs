// ABOUTME: Tuning state management with a pure reducer and a persisting controller
// ABOUTME: Actions produce a new immutable state plus an optional persistence effect
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Tuning state
//!
//! ```text
//! TuningAction ──► TuningState::reduce ──► Transition { state, effect }
//!                                                  │
//!                          TuningController ◄──────┘ performs effect
//! ```
//!
//! The reducer never touches storage. The controller applies the effect
//! through the providers after the new state has been computed, so a storage
//! failure leaves the previous state in place.

/// Controller that owns the state and performs persistence
pub mod controller;
/// Immutable state, actions, and the reducer
pub mod state;

pub use controller::TuningController;
pub use state::{LiftCalculatorState, PersistEffect, Transition, TuningAction, TuningState};
