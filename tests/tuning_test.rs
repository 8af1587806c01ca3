// ABOUTME: Tests for the tuning reducer and the controller that performs persistence
// ABOUTME: Covers effects per action, no-op transitions, lift calculator state, and failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use common::{assert_close, init_test_logging, memory_store};
use pierre_intelligence::config::TuningConfig;
use pierre_intelligence::{FormulaRecommendation, OneRepMaxAlgorithm, ScoringWeights};
use pierre_strength::{
    constants::{preference_keys, scoring},
    errors::{AppError, AppResult, ErrorCode},
    models::MuscleGroup,
    preferences::PreferenceStore,
    recovery::{MuscleRecoveryRates, RecoveryRateProvider},
    tuning::{PersistEffect, TuningAction, TuningController, TuningState},
};

fn initial_state() -> TuningState {
    TuningState::new(
        MuscleRecoveryRates::default(),
        ScoringWeights::default(),
        TuningConfig::default(),
    )
}

/// Store that reads as empty and fails every write
struct ReadOnlyStore;

#[async_trait]
impl PreferenceStore for ReadOnlyStore {
    async fn get(&self, _key: &str) -> AppResult<Option<String>> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: &str) -> AppResult<()> {
        Err(AppError::storage("store is read-only"))
    }

    async fn remove(&self, _key: &str) -> AppResult<bool> {
        Err(AppError::storage("store is read-only"))
    }

    async fn keys(&self) -> AppResult<Vec<String>> {
        Ok(Vec::new())
    }
}

#[test]
fn test_set_recovery_rate_clamps_and_requests_save() {
    let state = initial_state();
    let transition = state.reduce(TuningAction::SetRecoveryRate {
        muscle: MuscleGroup::Chest,
        rate: 0.4,
    });

    assert_eq!(transition.effect, Some(PersistEffect::SaveRecoveryRates));
    assert_close(transition.state.recovery_rates.get(MuscleGroup::Chest), 0.15, 1e-12);
    // Original state is untouched
    assert_close(state.recovery_rates.get(MuscleGroup::Chest), 0.045, 1e-12);
}

#[test]
fn test_unchanged_rate_produces_no_effect() {
    let transition = initial_state().reduce(TuningAction::SetRecoveryRate {
        muscle: MuscleGroup::Back,
        rate: 0.045,
    });
    assert_eq!(transition.effect, None);
    assert_eq!(transition.state, initial_state());
}

#[test]
fn test_reset_actions_request_clear() {
    let state = initial_state();
    assert_eq!(
        state.reduce(TuningAction::ResetRecoveryRates).effect,
        Some(PersistEffect::ClearRecoveryRates)
    );
    assert_eq!(
        state.reduce(TuningAction::ResetScoringWeights).effect,
        Some(PersistEffect::ClearScoringWeights)
    );
}

#[test]
fn test_scoring_weight_edit_flags_normalization() {
    let state = initial_state();
    assert!(!state.needs_normalization());

    let transition = state.reduce(TuningAction::SetScoringWeight {
        factor: scoring::FRESHNESS.to_owned(),
        weight: 0.45,
    });
    assert_eq!(transition.effect, Some(PersistEffect::SaveScoringWeights));
    assert!(transition.state.needs_normalization());

    let normalized = transition
        .state
        .reduce(TuningAction::NormalizeScoringWeights);
    assert_eq!(normalized.effect, Some(PersistEffect::SaveScoringWeights));
    assert_close(normalized.state.scoring_weights.sum(), 1.0, 1e-12);
    assert!(!normalized.state.needs_normalization());
}

#[test]
fn test_unknown_factor_is_ignored() {
    let transition = initial_state().reduce(TuningAction::SetScoringWeight {
        factor: "vibes".to_owned(),
        weight: 0.3,
    });
    assert_eq!(transition.effect, None);
    assert!(transition.state.scoring_weights.get("vibes").is_none());
}

#[test]
fn test_normalize_zero_total_is_noop() {
    let zeros: ScoringWeights = ScoringWeights::default()
        .iter()
        .map(|(name, _)| (name.to_owned(), 0.0))
        .collect();
    let state = TuningState::new(
        MuscleRecoveryRates::default(),
        zeros.clone(),
        TuningConfig::default(),
    );

    let transition = state.reduce(TuningAction::NormalizeScoringWeights);
    assert_eq!(transition.effect, None);
    assert_eq!(transition.state.scoring_weights, zeros);
}

#[test]
fn test_lift_fields_derive_estimate() {
    let state = initial_state()
        .reduce(TuningAction::SetLiftWeightText("100".into()))
        .state;
    assert!(state.lift.estimate.is_none());
    assert!(state.lift.recommendation.is_none());

    let transition = state.reduce(TuningAction::SetLiftRepsText("5".into()));
    assert_eq!(transition.effect, None);
    let lift = &transition.state.lift;
    assert_eq!(lift.weight_text, "100");
    assert_eq!(lift.reps_text, "5");
    assert_close(lift.estimate.unwrap().brzycki.unwrap(), 112.5, 1e-9);
    assert_eq!(
        lift.recommendation,
        Some(FormulaRecommendation::Either {
            first: OneRepMaxAlgorithm::Brzycki,
            second: OneRepMaxAlgorithm::Epley,
        })
    );

    let cleared = transition
        .state
        .reduce(TuningAction::SetLiftWeightText("abc".into()))
        .state;
    assert!(cleared.lift.estimate.is_none());
    assert_eq!(cleared.lift.reps_text, "5");
}

#[tokio::test]
async fn test_controller_persists_effects() {
    let store = memory_store();
    let mut controller = TuningController::load(Arc::clone(&store), TuningConfig::default())
        .await
        .unwrap();

    controller
        .dispatch(TuningAction::SetRecoveryRate {
            muscle: MuscleGroup::Hamstrings,
            rate: 0.05,
        })
        .await
        .unwrap();
    controller
        .dispatch(TuningAction::SetScoringWeight {
            factor: scoring::RECOVERY.to_owned(),
            weight: 0.25,
        })
        .await
        .unwrap();

    let rates = RecoveryRateProvider::new(Arc::clone(&store), TuningConfig::default().recovery)
        .load()
        .await
        .unwrap();
    assert_close(rates.get(MuscleGroup::Hamstrings), 0.05, 1e-12);

    let reloaded = TuningController::load(Arc::clone(&store), TuningConfig::default())
        .await
        .unwrap();
    assert_eq!(reloaded.state().recovery_rates, controller.state().recovery_rates);
    assert_eq!(reloaded.state().scoring_weights, controller.state().scoring_weights);

    controller
        .dispatch(TuningAction::ResetRecoveryRates)
        .await
        .unwrap();
    controller
        .dispatch(TuningAction::ResetScoringWeights)
        .await
        .unwrap();
    assert!(store
        .get(preference_keys::RECOVERY_RATES)
        .await
        .unwrap()
        .is_none());
    assert!(store
        .get(preference_keys::SCORING_WEIGHTS)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_lift_actions_never_write() {
    let store = memory_store();
    let mut controller = TuningController::load(Arc::clone(&store), TuningConfig::default())
        .await
        .unwrap();
    controller
        .dispatch(TuningAction::SetLiftWeightText("82,5".into()))
        .await
        .unwrap();
    let state = controller
        .dispatch(TuningAction::SetLiftRepsText("3".into()))
        .await
        .unwrap();

    assert!(state.lift.estimate.is_some());
    assert!(store.keys().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_persistence_keeps_previous_state() {
    init_test_logging();
    let store: Arc<dyn PreferenceStore> = Arc::new(ReadOnlyStore);
    let mut controller = TuningController::load(store, TuningConfig::default())
        .await
        .unwrap();

    let error = controller
        .dispatch(TuningAction::SetRecoveryRate {
            muscle: MuscleGroup::Core,
            rate: 0.1,
        })
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);
    assert!(controller.state().recovery_rates.is_default(MuscleGroup::Core));

    // Actions without effects still apply
    controller
        .dispatch(TuningAction::SetLiftWeightText("60".into()))
        .await
        .unwrap();
    assert_eq!(controller.state().lift.weight_text, "60");
}
