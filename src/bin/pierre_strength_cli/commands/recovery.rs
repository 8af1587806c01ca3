// ABOUTME: Recovery rate commands for pierre-strength-cli
// ABOUTME: Handles show, set, reset, and train operations on per-muscle recovery
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use chrono::Utc;
use pierre_strength::{
    config::StrengthConfig,
    errors::{AppError, AppResult},
    formatters::format_rate,
    models::MuscleGroup,
    preferences::PreferenceStore,
    recovery::{hours_before, MuscleRecoveryTracker},
    tuning::{TuningAction, TuningController},
};
use tracing::info;

use crate::helpers::display::display_recovery_table;

/// Show rates and current recovery for every muscle
pub async fn show(store: Arc<dyn PreferenceStore>, config: &StrengthConfig) -> AppResult<()> {
    let controller = TuningController::load(Arc::clone(&store), config.tuning).await?;
    let rates = &controller.state().recovery_rates;
    let scores = MuscleRecoveryTracker::new(store)
        .scores(rates, Utc::now())
        .await?;
    display_recovery_table(rates, &scores, config.tuning.recovery.ready_percent);
    Ok(())
}

/// Set the decay constant of `muscle`
pub async fn set(
    store: Arc<dyn PreferenceStore>,
    config: &StrengthConfig,
    muscle: MuscleGroup,
    rate: f64,
) -> AppResult<()> {
    let bounds = config.tuning.recovery;
    if !rate.is_finite() {
        return Err(AppError::invalid_input("Rate must be a finite number"));
    }
    if !bounds.contains(rate) {
        println!(
            "Rate {} is outside [{}, {}], clamping",
            format_rate(rate),
            format_rate(bounds.min_rate),
            format_rate(bounds.max_rate)
        );
    }

    let mut controller = TuningController::load(store, config.tuning).await?;
    let state = controller
        .dispatch(TuningAction::SetRecoveryRate { muscle, rate })
        .await?;
    let applied = state.recovery_rates.get(muscle);
    info!(muscle = %muscle, rate = applied, "Recovery rate updated");
    println!("{}: {}", muscle.display_name(), format_rate(applied));
    Ok(())
}

/// Restore default rates
pub async fn reset(store: Arc<dyn PreferenceStore>, config: &StrengthConfig) -> AppResult<()> {
    let mut controller = TuningController::load(store, config.tuning).await?;
    controller.dispatch(TuningAction::ResetRecoveryRates).await?;
    println!("Recovery rates reset to defaults");
    Ok(())
}

/// Record a training session for `muscles`
pub async fn train(
    store: Arc<dyn PreferenceStore>,
    muscles: &[MuscleGroup],
    hours_ago: f64,
) -> AppResult<()> {
    let trained_at = hours_before(Utc::now(), hours_ago)?;
    MuscleRecoveryTracker::new(store)
        .record_training(muscles, trained_at)
        .await?;

    let names: Vec<&str> = muscles.iter().map(MuscleGroup::display_name).collect();
    println!("Recorded training: {}", names.join(", "));
    Ok(())
}
