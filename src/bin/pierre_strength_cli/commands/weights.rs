// ABOUTME: Scoring weight commands for pierre-strength-cli
// ABOUTME: Handles show, set, normalize, and reset through the tuning controller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use pierre_strength::{
    config::StrengthConfig,
    errors::{AppError, AppResult},
    preferences::PreferenceStore,
    tuning::{TuningAction, TuningController},
};
use tracing::{info, warn};

use crate::helpers::display::display_weights_table;

/// Show the current weights
pub async fn show(store: Arc<dyn PreferenceStore>, config: &StrengthConfig) -> AppResult<()> {
    let controller = TuningController::load(store, config.tuning).await?;
    display_weights_table(controller.state());
    Ok(())
}

/// Set one factor weight
pub async fn set(
    store: Arc<dyn PreferenceStore>,
    config: &StrengthConfig,
    factor: String,
    weight: f64,
) -> AppResult<()> {
    let mut controller = TuningController::load(store, config.tuning).await?;
    if controller.state().scoring_weights.get(&factor).is_none() {
        let known: Vec<&str> = controller
            .state()
            .scoring_weights
            .iter()
            .map(|(name, _)| name)
            .collect();
        warn!(factor = %factor, "Unknown scoring factor");
        return Err(AppError::not_found(format!(
            "Scoring factor '{factor}' (known: {})",
            known.join(", ")
        )));
    }

    let state = controller
        .dispatch(TuningAction::SetScoringWeight { factor, weight })
        .await?;
    info!(total = state.scoring_weights.sum(), "Scoring weight updated");
    display_weights_table(state);
    Ok(())
}

/// Rescale the weights to total 1.0
pub async fn normalize(store: Arc<dyn PreferenceStore>, config: &StrengthConfig) -> AppResult<()> {
    let mut controller = TuningController::load(store, config.tuning).await?;
    if controller.state().scoring_weights.sum() <= 0.0 {
        println!("All weights are zero; nothing to normalize");
        return Ok(());
    }
    let state = controller
        .dispatch(TuningAction::NormalizeScoringWeights)
        .await?;
    display_weights_table(state);
    Ok(())
}

/// Restore the default weights
pub async fn reset(store: Arc<dyn PreferenceStore>, config: &StrengthConfig) -> AppResult<()> {
    let mut controller = TuningController::load(store, config.tuning).await?;
    let state = controller
        .dispatch(TuningAction::ResetScoringWeights)
        .await?;
    display_weights_table(state);
    Ok(())
}
