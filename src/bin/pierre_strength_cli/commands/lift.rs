// ABOUTME: One-rep-max and freshness commands for pierre-strength-cli
// ABOUTME: Runs the lift calculator through the tuning reducer like the interactive screen
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use pierre_intelligence::algorithms::freshness;
use pierre_strength::{
    config::StrengthConfig,
    errors::{AppError, AppResult},
    formatters::format_percent,
    preferences::memory::InMemoryPreferences,
    tuning::{TuningAction, TuningController},
};
use tracing::info;

use crate::helpers::display::display_estimate;

/// Estimate a one-rep max from raw weight and reps text
pub async fn one_rep_max(config: &StrengthConfig, weight: String, reps: String) -> AppResult<()> {
    // The calculator never persists, so it does not need the user's store.
    let store = Arc::new(InMemoryPreferences::new());
    let mut controller = TuningController::load(store, config.tuning).await?;
    controller
        .dispatch(TuningAction::SetLiftWeightText(weight))
        .await?;
    let state = controller
        .dispatch(TuningAction::SetLiftRepsText(reps))
        .await?;

    let Some(estimate) = state.lift.estimate.as_ref() else {
        return Err(AppError::invalid_input(
            "Weight and reps must be positive numbers",
        ));
    };
    info!(weight = %state.lift.weight_text, reps = %state.lift.reps_text, "Estimated one-rep max");
    display_estimate(estimate, state.lift.recommendation.as_ref(), config.weight_unit);
    Ok(())
}

/// Print freshness after `sessions_ago` sessions
pub fn freshness(k: f64, sessions_ago: u32) {
    let value = freshness::freshness(k, sessions_ago);
    println!("Freshness: {value:.4} ({})", format_percent(value));
}
